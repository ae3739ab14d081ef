use super::confirmation_modal::ConfirmationModal;
use crate::model::{LedgerAction, LedgerState, Transaction, TransactionKind, list_order};
use crate::state::SwipeTracker;
use crate::util::{format_currency, format_date};
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransactionsListProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub start_date: String,
    pub end_date: String,
    pub on_notice: Callback<String>,
}

/// Transaction rows with swipe-to-reveal delete. Touch and mouse events are
/// adapted into one pointer stream and fed to a shared [`SwipeTracker`]; the
/// tracker's per-row transform is applied declaratively as inline style, so
/// a re-render is forced (via `version`) after every sample it accepts.
#[function_component(TransactionsList)]
pub fn transactions_list(props: &TransactionsListProps) -> Html {
    let tracker = use_mut_ref(SwipeTracker::default);
    let version = use_state(|| 0u64);
    let pending_delete = use_state(|| None::<String>);

    let bump = {
        let version = version.clone();
        move || version.set(*version + 1)
    };

    let state = &*props.ledger;
    let mut rows = state.transactions_between(&props.start_date, &props.end_date);
    list_order(&mut rows);

    let confirm_delete = {
        let ledger = props.ledger.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            if let Some(id) = (*pending_delete).clone() {
                ledger.dispatch(LedgerAction::DeleteTransaction { id });
                on_notice.emit("Transaction deleted".to_string());
            }
            pending_delete.set(None);
        })
    };
    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    html! {<>
        <div style="display:flex; flex-direction:column; gap:12px;">
            { for rows.iter().map(|t| {
                let id = t.id.clone();
                let transform = tracker.borrow().row_transform(&id);

                let ontouchstart = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let bump = bump.clone();
                    Callback::from(move |e: TouchEvent| {
                        if let Some(t0) = e.target_touches().item(0) {
                            tracker.borrow_mut().begin(
                                &id,
                                t0.client_x() as f64,
                                t0.client_y() as f64,
                                js_sys::Date::now(),
                            );
                            bump();
                        }
                    })
                };
                let ontouchmove = {
                    let tracker = tracker.clone();
                    let bump = bump.clone();
                    Callback::from(move |e: TouchEvent| {
                        if let Some(t0) = e.target_touches().item(0) {
                            let moved = tracker
                                .borrow_mut()
                                .update(t0.client_x() as f64, t0.client_y() as f64);
                            if moved.is_some() {
                                // Horizontal sample: this is a swipe, not a scroll.
                                e.prevent_default();
                                bump();
                            }
                        }
                    })
                };
                let ontouchend = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let bump = bump.clone();
                    Callback::from(move |_e: TouchEvent| {
                        tracker.borrow_mut().end(&id, js_sys::Date::now());
                        bump();
                    })
                };
                let onmousedown = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let bump = bump.clone();
                    Callback::from(move |e: MouseEvent| {
                        tracker.borrow_mut().begin(
                            &id,
                            e.client_x() as f64,
                            e.client_y() as f64,
                            js_sys::Date::now(),
                        );
                        bump();
                    })
                };
                let onmousemove = {
                    let tracker = tracker.clone();
                    let bump = bump.clone();
                    Callback::from(move |e: MouseEvent| {
                        let moved = tracker
                            .borrow_mut()
                            .update(e.client_x() as f64, e.client_y() as f64);
                        if moved.is_some() {
                            e.prevent_default();
                            bump();
                        }
                    })
                };
                let onmouseup = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let bump = bump.clone();
                    Callback::from(move |_e: MouseEvent| {
                        tracker.borrow_mut().end(&id, js_sys::Date::now());
                        bump();
                    })
                };
                // Leaving the row mid-drag is always a cancel, never a settle-open.
                let onmouseleave = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let bump = bump.clone();
                    Callback::from(move |_e: MouseEvent| {
                        tracker.borrow_mut().cancel(&id);
                        bump();
                    })
                };
                let on_delete_tap = {
                    let tracker = tracker.clone();
                    let id = id.clone();
                    let pending_delete = pending_delete.clone();
                    let bump = bump.clone();
                    Callback::from(move |_e: MouseEvent| {
                        tracker.borrow_mut().close_row(&id);
                        pending_delete.set(Some(id.clone()));
                        bump();
                    })
                };

                let is_expense = t.kind == TransactionKind::Expense;
                let border = if is_expense { "#ef4444" } else { "#22c55e" };
                let transition = if transform.animate {
                    "transform 0.2s ease-out"
                } else {
                    "none"
                };
                let card_style = format!(
                    "background:#fff; padding:14px; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.12); \
                     border-left:4px solid {border}; position:relative; z-index:10; cursor:grab; \
                     transform:translateX({}px); transition:{transition};",
                    transform.offset,
                );

                html! {<div key={id.clone()}
                    style="position:relative; touch-action:pan-y; user-select:none;"
                    {ontouchstart} {ontouchmove} {ontouchend}
                    {onmousedown} {onmousemove} {onmouseup} {onmouseleave}
                >
                    <div style="position:absolute; top:0; bottom:0; right:0; display:flex;">
                        <button onclick={on_delete_tap.clone()}
                            style="width:80px; background:#ef4444; color:#fff; border:0; border-radius:0 8px 8px 0; cursor:pointer;">
                            {"🗑"}
                        </button>
                    </div>
                    <div style="position:absolute; top:0; bottom:0; left:0; display:flex;">
                        <button onclick={on_delete_tap}
                            style="width:80px; background:#ef4444; color:#fff; border:0; border-radius:8px 0 0 8px; cursor:pointer;">
                            {"🗑"}
                        </button>
                    </div>
                    <div style={card_style}>
                        <div style="display:flex; align-items:center; justify-content:space-between; gap:12px;">
                            <p style="margin:0; font-size:13px; color:#374151; line-height:1.5; flex:1;">
                                { describe_transaction(t, state) }
                            </p>
                            <span style="font-size:13px; color:#6b7280; white-space:nowrap;">
                                { format_date(&t.date) }
                            </span>
                        </div>
                    </div>
                </div>}
            }) }

            if rows.is_empty() {
                <div style="background:#fff; border-radius:8px; padding:24px; text-align:center; color:#6b7280;">
                    {"No transactions found"}
                </div>
            }
        </div>

        <ConfirmationModal
            show={pending_delete.is_some()}
            title="Delete transaction"
            message="Are you sure you want to delete this transaction? This cannot be undone."
            on_confirm={confirm_delete}
            on_close={close_delete}
        />
    </>}
}

fn describe_transaction(t: &Transaction, state: &LedgerState) -> Html {
    let amount = format_currency(t.amount);
    if t.goal_id.is_some() {
        let name = t.description.as_deref().unwrap_or("goal");
        return html! { <>{ format!("Added {amount} to goal \"{name}\"") }</> };
    }
    let label = match t.kind {
        TransactionKind::Expense => "Expense",
        TransactionKind::Income => "Income",
    };
    let sign = if t.kind == TransactionKind::Expense { "- " } else { "" };
    let account = t
        .account_id
        .as_deref()
        .and_then(|id| state.accounts.iter().find(|a| a.id == id));
    html! {<>
        { format!("{label} in category ") }
        <strong>{ &t.category }</strong>
        { format!(" of {sign}{amount}") }
        { account.map(|a| format!(" ({})", a.name)).unwrap_or_default() }
    </>}
}
