use super::confirmation_modal::ConfirmationModal;
use crate::model::{Goal, LedgerAction, LedgerState, Transaction, TransactionKind};
use crate::util::{format_currency, gen_id, parse_amount, today};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GoalsViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_notice: Callback<String>,
}

/// Savings goals: create against an account, deposit towards them (which
/// books a matching transaction), delete with confirmation.
#[function_component(GoalsView)]
pub fn goals_view(props: &GoalsViewProps) -> Html {
    let name = use_state(String::new);
    let account_id = use_state(String::new);
    let target = use_state(String::new);
    let deposit_amounts = use_state(std::collections::HashMap::<String, String>::new);
    let pending_delete = use_state(|| None::<String>);

    let state = &*props.ledger;

    let name_cb = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let target_cb = {
        let target = target.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                target.set(input.value());
            }
        })
    };
    let account_cb = {
        let account_id = account_id.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                account_id.set(select.value());
            }
        })
    };

    let add = {
        let ledger = props.ledger.clone();
        let on_notice = props.on_notice.clone();
        let name = name.clone();
        let account_id = account_id.clone();
        let target = target.clone();
        Callback::from(move |_: MouseEvent| {
            if name.trim().is_empty() {
                on_notice.emit("Give the goal a name".to_string());
                return;
            }
            if account_id.is_empty() {
                on_notice.emit("Pick an account for the goal".to_string());
                return;
            }
            let Some(target_amount) = parse_amount(&target) else {
                on_notice.emit("Enter a target amount greater than zero".to_string());
                return;
            };
            ledger.dispatch(LedgerAction::AddGoal(Goal {
                id: gen_id(),
                name: name.trim().to_string(),
                account_id: (*account_id).clone(),
                target_amount,
                current_amount: 0.0,
                completed: false,
                created_at: today(),
            }));
            on_notice.emit("Goal created".to_string());
            name.set(String::new());
            account_id.set(String::new());
            target.set(String::new());
        })
    };

    let confirm_delete = {
        let ledger = props.ledger.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            if let Some(id) = (*pending_delete).clone() {
                ledger.dispatch(LedgerAction::DeleteGoal { id });
                on_notice.emit("Goal deleted".to_string());
            }
            pending_delete.set(None);
        })
    };
    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let field_style = "padding:8px; border:1px solid #e5e7eb; border-radius:6px;";

    html! {<div style="max-width:960px; margin:0 auto; padding:24px 16px 90px;">
        <h1 style="font-size:22px; margin:0 0 18px;">{"Goals"}</h1>

        <div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px; margin-bottom:24px;">
            <h2 style="margin:0 0 14px; font-size:16px;">{"New goal"}</h2>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <input type="text" placeholder="Goal name" value={(*name).clone()} onchange={name_cb} style={field_style} />
                <select onchange={account_cb} style={field_style}>
                    <option value="" selected={account_id.is_empty()}>{"Account…"}</option>
                    { for state.accounts.iter().map(|a| html! {
                        <option value={a.id.clone()} selected={*account_id == a.id}>{ &a.name }</option>
                    }) }
                </select>
                <input type="text" placeholder="Target amount" value={(*target).clone()} onchange={target_cb} style={field_style} />
                <button onclick={add} style="padding:8px 16px; background:#22c55e; border:0; color:#fff; border-radius:6px; cursor:pointer;">{"Create"}</button>
            </div>
        </div>

        <div style="display:flex; flex-direction:column; gap:12px;">
            { for state.goals.iter().map(|g| {
                let progress = if g.target_amount > 0.0 {
                    (g.current_amount / g.target_amount * 100.0).min(100.0)
                } else {
                    0.0
                };
                let delete = {
                    let pending_delete = pending_delete.clone();
                    let id = g.id.clone();
                    Callback::from(move |_| pending_delete.set(Some(id.clone())))
                };
                let deposit_cb = {
                    let deposit_amounts = deposit_amounts.clone();
                    let id = g.id.clone();
                    Callback::from(move |e: Event| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            let mut map = (*deposit_amounts).clone();
                            map.insert(id.clone(), input.value());
                            deposit_amounts.set(map);
                        }
                    })
                };
                let deposit = {
                    let ledger = props.ledger.clone();
                    let on_notice = props.on_notice.clone();
                    let deposit_amounts = deposit_amounts.clone();
                    let goal = g.clone();
                    Callback::from(move |_: MouseEvent| {
                        let raw = deposit_amounts.get(&goal.id).cloned().unwrap_or_default();
                        let Some(amount) = parse_amount(&raw) else {
                            on_notice.emit("Enter a deposit amount greater than zero".to_string());
                            return;
                        };
                        let tx = Transaction {
                            id: gen_id(),
                            amount,
                            category: "Goal".to_string(),
                            kind: TransactionKind::Income,
                            date: today(),
                            description: Some(goal.name.clone()),
                            account_id: None,
                            payment_kind: None,
                            due_date: None,
                            goal_id: Some(goal.id.clone()),
                            deposit_account_id: Some(goal.account_id.clone()),
                            created_at: today(),
                        };
                        ledger.dispatch(LedgerAction::AddToGoal {
                            id: goal.id.clone(),
                            amount,
                            deposit: tx,
                        });
                        let reached = goal.current_amount + amount >= goal.target_amount;
                        on_notice.emit(if reached {
                            "Goal reached! 🎉".to_string()
                        } else {
                            "Deposit added".to_string()
                        });
                        let mut map = (*deposit_amounts).clone();
                        map.remove(&goal.id);
                        deposit_amounts.set(map);
                    })
                };
                let deposit_value = deposit_amounts.get(&g.id).cloned().unwrap_or_default();

                html! {<div key={g.id.clone()}
                    style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.12); padding:16px;">
                    <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px;">
                        <div style="display:flex; align-items:center; gap:8px;">
                            <span>{ if g.completed { "🏆" } else { "🎯" } }</span>
                            <span style="font-weight:600;">{ &g.name }</span>
                        </div>
                        <button onclick={delete} style="border:0; background:none; cursor:pointer; font-size:16px;">{"🗑"}</button>
                    </div>
                    <div style="font-size:13px; color:#6b7280; margin-bottom:6px;">
                        { format!("{} of {}", format_currency(g.current_amount), format_currency(g.target_amount)) }
                    </div>
                    <div style="height:8px; background:#f3f4f6; border-radius:4px; overflow:hidden; margin-bottom:12px;">
                        <div style={format!("height:100%; width:{progress}%; background:linear-gradient(to right, #22c55e, #4ade80); border-radius:4px;")} />
                    </div>
                    if !g.completed {
                        <div style="display:flex; gap:8px;">
                            <input type="text" placeholder="Deposit amount" value={deposit_value} onchange={deposit_cb}
                                style="flex:1; padding:8px; border:1px solid #e5e7eb; border-radius:6px;" />
                            <button onclick={deposit} style="padding:8px 14px; background:#22c55e; border:0; color:#fff; border-radius:6px; cursor:pointer;">{"Add"}</button>
                        </div>
                    }
                </div>}
            }) }

            if state.goals.is_empty() {
                <div style="background:#fff; border-radius:8px; padding:24px; text-align:center; color:#6b7280;">
                    {"No goals yet"}
                </div>
            }
        </div>

        <ConfirmationModal
            show={pending_delete.is_some()}
            title="Delete goal"
            message="Are you sure you want to delete this goal? Deposits already made are kept as transactions."
            on_confirm={confirm_delete}
            on_close={close_delete}
        />
    </div>}
}
