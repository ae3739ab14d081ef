use crate::model::{
    AccountKind, LedgerAction, LedgerState, PaymentKind, Transaction, TransactionKind,
};
use crate::util::{gen_id, parse_amount, today};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransactionModalProps {
    pub show: bool,
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_close: Callback<()>,
    pub on_notice: Callback<String>,
}

/// Add-transaction form: kind tabs, amount, category, account and payment
/// method, date and optional description.
#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let kind = use_state(|| TransactionKind::Expense);
    let amount = use_state(String::new);
    let category = use_state(String::new);
    let account_id = use_state(String::new);
    let payment = use_state(|| PaymentKind::Debit);
    let due_date = use_state(String::new);
    let date = use_state(today);
    let description = use_state(String::new);
    let error = use_state(|| None::<String>);

    if !props.show {
        return html! {};
    }

    let state = &*props.ledger;
    let categories: Vec<_> = state
        .categories
        .iter()
        .filter(|c| c.kind == *kind)
        .cloned()
        .collect();

    let set_kind = |k: TransactionKind| {
        let kind = kind.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            kind.set(k);
            category.set(String::new());
        })
    };
    let input_cb = |handle: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    let select_cb = |handle: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                handle.set(select.value());
            }
        })
    };
    let payment_cb = {
        let payment = payment.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                payment.set(if select.value() == "credit" {
                    PaymentKind::Credit
                } else {
                    PaymentKind::Debit
                });
            }
        })
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let save = {
        let ledger = props.ledger.clone();
        let on_close = props.on_close.clone();
        let on_notice = props.on_notice.clone();
        let kind = kind.clone();
        let amount = amount.clone();
        let category = category.clone();
        let account_id = account_id.clone();
        let payment = payment.clone();
        let due_date = due_date.clone();
        let date = date.clone();
        let description = description.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(value) = parse_amount(&amount) else {
                error.set(Some("Enter an amount greater than zero".to_string()));
                return;
            };
            if category.is_empty() {
                error.set(Some("Pick a category".to_string()));
                return;
            }
            let account = (!account_id.is_empty()).then(|| (*account_id).clone());
            let tx = Transaction {
                id: gen_id(),
                amount: value,
                category: (*category).clone(),
                kind: *kind,
                date: (*date).clone(),
                description: (!description.is_empty()).then(|| (*description).clone()),
                account_id: account.clone(),
                payment_kind: account.is_some().then(|| *payment),
                due_date: (*payment == PaymentKind::Credit && !due_date.is_empty())
                    .then(|| (*due_date).clone()),
                goal_id: None,
                deposit_account_id: None,
                created_at: today(),
            };
            ledger.dispatch(LedgerAction::AddTransaction(tx));
            on_notice.emit("Transaction added".to_string());
            amount.set(String::new());
            description.set(String::new());
            error.set(None);
            on_close.emit(());
        })
    };

    let tab_style = |active: bool, color: &str| {
        if active {
            format!("flex:1; padding:8px; border:0; border-radius:6px; color:#fff; cursor:pointer; background:{color};")
        } else {
            "flex:1; padding:8px; border:1px solid #e5e7eb; border-radius:6px; background:#fff; cursor:pointer;".to_string()
        }
    };
    let field_style = "width:100%; padding:8px; border:1px solid #e5e7eb; border-radius:6px; box-sizing:border-box;";

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:55;">
        <div style="background:#fff; border-radius:12px; padding:20px; width:360px; max-height:85vh; overflow-y:auto; display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"New transaction"}</h3>
                <button onclick={close_cb.clone()} style="border:0; background:none; font-size:18px; cursor:pointer;">{"✕"}</button>
            </div>

            <div style="display:flex; gap:8px;">
                <button onclick={set_kind(TransactionKind::Expense)}
                    style={tab_style(*kind == TransactionKind::Expense, "#ef4444")}>{"Expense"}</button>
                <button onclick={set_kind(TransactionKind::Income)}
                    style={tab_style(*kind == TransactionKind::Income, "#22c55e")}>{"Income"}</button>
            </div>

            <input type="text" placeholder="Amount" value={(*amount).clone()}
                onchange={input_cb(amount.clone())} style={field_style} />

            <select onchange={select_cb(category.clone())} style={field_style}>
                <option value="" selected={category.is_empty()}>{"Category…"}</option>
                { for categories.iter().map(|c| html! {
                    <option value={c.name.clone()} selected={*category == c.name}>{ &c.name }</option>
                }) }
            </select>

            <select onchange={select_cb(account_id.clone())} style={field_style}>
                <option value="" selected={account_id.is_empty()}>{"No account"}</option>
                { for state.accounts.iter().map(|a| {
                    let label = match a.kind {
                        AccountKind::CreditCard => format!("{} (card)", a.name),
                        AccountKind::BankAccount => a.name.clone(),
                    };
                    html! { <option value={a.id.clone()} selected={*account_id == a.id}>{ label }</option> }
                }) }
            </select>

            if !account_id.is_empty() {
                <select onchange={payment_cb} style={field_style}>
                    <option value="debit" selected={*payment == PaymentKind::Debit}>{"Debit"}</option>
                    <option value="credit" selected={*payment == PaymentKind::Credit}>{"Credit"}</option>
                </select>
            }
            if *payment == PaymentKind::Credit && !account_id.is_empty() {
                <label style="font-size:12px; color:#6b7280;">{"Due date"}
                    <input type="date" value={(*due_date).clone()}
                        onchange={input_cb(due_date.clone())} style={field_style} />
                </label>
            }

            <input type="date" value={(*date).clone()} onchange={input_cb(date.clone())} style={field_style} />
            <input type="text" placeholder="Description (optional)" value={(*description).clone()}
                onchange={input_cb(description.clone())} style={field_style} />

            if let Some(msg) = &*error {
                <p style="margin:0; color:#ef4444; font-size:13px;">{ msg }</p>
            }

            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <button onclick={close_cb} style="padding:8px 14px;">{"Cancel"}</button>
                <button onclick={save} style="padding:8px 14px; background:#22c55e; border:0; color:#fff; border-radius:6px; cursor:pointer;">{"Save"}</button>
            </div>
        </div>
    </div>}
}
