use super::confirmation_modal::ConfirmationModal;
use crate::model::{AccountKind, BankAccount, LedgerAction, LedgerState};
use crate::util::{format_currency, gen_id, today};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountsViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_notice: Callback<String>,
}

/// Bank accounts and credit cards: create, list with computed balance,
/// delete with confirmation.
#[function_component(AccountsView)]
pub fn accounts_view(props: &AccountsViewProps) -> Html {
    let name = use_state(String::new);
    let bank_name = use_state(String::new);
    let kind = use_state(|| AccountKind::BankAccount);
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
    let bank_cb = {
        let bank_name = bank_name.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                bank_name.set(input.value());
            }
        })
    };
    let kind_cb = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                kind.set(if select.value() == "credit_card" {
                    AccountKind::CreditCard
                } else {
                    AccountKind::BankAccount
                });
            }
        })
    };

    let add = {
        let ledger = props.ledger.clone();
        let on_notice = props.on_notice.clone();
        let name = name.clone();
        let bank_name = bank_name.clone();
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| {
            if name.trim().is_empty() {
                on_notice.emit("Give the account a name".to_string());
                return;
            }
            ledger.dispatch(LedgerAction::AddAccount(BankAccount {
                id: gen_id(),
                name: name.trim().to_string(),
                kind: *kind,
                bank_name: bank_name.trim().to_string(),
                color: "#1e40af".to_string(),
                created_at: today(),
            }));
            on_notice.emit("Account added".to_string());
            name.set(String::new());
            bank_name.set(String::new());
        })
    };

    let confirm_delete = {
        let ledger = props.ledger.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            if let Some(id) = (*pending_delete).clone() {
                ledger.dispatch(LedgerAction::DeleteAccount { id });
                on_notice.emit("Account deleted".to_string());
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
        <h1 style="font-size:22px; margin:0 0 18px;">{"Accounts"}</h1>

        <div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px; margin-bottom:24px;">
            <h2 style="margin:0 0 14px; font-size:16px;">{"New account"}</h2>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <input type="text" placeholder="Account name" value={(*name).clone()} onchange={name_cb} style={field_style} />
                <input type="text" placeholder="Bank" value={(*bank_name).clone()} onchange={bank_cb} style={field_style} />
                <select onchange={kind_cb} style={field_style}>
                    <option value="bank_account" selected={*kind == AccountKind::BankAccount}>{"Bank account"}</option>
                    <option value="credit_card" selected={*kind == AccountKind::CreditCard}>{"Credit card"}</option>
                </select>
                <button onclick={add} style="padding:8px 16px; background:#22c55e; border:0; color:#fff; border-radius:6px; cursor:pointer;">{"Add"}</button>
            </div>
        </div>

        <div style="display:flex; flex-direction:column; gap:12px;">
            { for state.accounts.iter().map(|a| {
                let balance = state.account_balance(&a.id);
                let delete = {
                    let pending_delete = pending_delete.clone();
                    let id = a.id.clone();
                    Callback::from(move |_| pending_delete.set(Some(id.clone())))
                };
                let kind_label = match a.kind {
                    AccountKind::BankAccount => "Bank account",
                    AccountKind::CreditCard => "Credit card",
                };
                html! {<div key={a.id.clone()}
                    style={format!("background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.12); padding:14px; display:flex; justify-content:space-between; align-items:center; border-left:4px solid {};", a.color)}>
                    <div>
                        <p style="margin:0; font-weight:600;">{ &a.name }</p>
                        <p style="margin:2px 0 0; font-size:12px; color:#6b7280;">
                            { format!("{kind_label}{}", if a.bank_name.is_empty() { String::new() } else { format!(" · {}", a.bank_name) }) }
                        </p>
                    </div>
                    <div style="display:flex; align-items:center; gap:14px;">
                        <span style={format!("font-weight:700; color:{};", if balance >= 0.0 { "#16a34a" } else { "#ef4444" })}>
                            { format!("{}{}", if balance < 0.0 { "- " } else { "" }, format_currency(balance)) }
                        </span>
                        <button onclick={delete} style="border:0; background:none; cursor:pointer; font-size:16px;">{"🗑"}</button>
                    </div>
                </div>}
            }) }

            if state.accounts.is_empty() {
                <div style="background:#fff; border-radius:8px; padding:24px; text-align:center; color:#6b7280;">
                    {"No accounts yet"}
                </div>
            }
        </div>

        <ConfirmationModal
            show={pending_delete.is_some()}
            title="Delete account"
            message="Are you sure you want to delete this account? Its transactions are kept."
            on_confirm={confirm_delete}
            on_close={close_delete}
        />
    </div>}
}
