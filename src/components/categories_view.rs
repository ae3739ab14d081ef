use super::confirmation_modal::ConfirmationModal;
use crate::model::{
    Category, EXPENSE_COLOR, INCOME_COLOR, LedgerAction, LedgerState, TransactionKind,
};
use crate::util::{gen_id, today};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoriesViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_notice: Callback<String>,
}

#[function_component(CategoriesView)]
pub fn categories_view(props: &CategoriesViewProps) -> Html {
    let active_tab = use_state(|| TransactionKind::Expense);
    let new_name = use_state(String::new);
    let pending_delete = use_state(|| None::<String>);

    let state = &*props.ledger;
    let filtered: Vec<&Category> = state
        .categories
        .iter()
        .filter(|c| c.kind == *active_tab)
        .collect();

    let set_tab = |k: TransactionKind| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(k))
    };
    let name_cb = {
        let new_name = new_name.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_name.set(input.value());
            }
        })
    };

    let add = {
        let ledger = props.ledger.clone();
        let on_notice = props.on_notice.clone();
        let new_name = new_name.clone();
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| {
            if new_name.trim().is_empty() {
                on_notice.emit("Give the category a name".to_string());
                return;
            }
            let color = match *active_tab {
                TransactionKind::Income => INCOME_COLOR,
                TransactionKind::Expense => EXPENSE_COLOR,
            };
            ledger.dispatch(LedgerAction::AddCategory(Category {
                id: gen_id(),
                name: new_name.trim().to_string(),
                kind: *active_tab,
                color: color.to_string(),
                created_at: today(),
            }));
            on_notice.emit("Category added".to_string());
            new_name.set(String::new());
        })
    };

    let confirm_delete = {
        let ledger = props.ledger.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            if let Some(id) = (*pending_delete).clone() {
                ledger.dispatch(LedgerAction::DeleteCategory { id });
                on_notice.emit("Category deleted".to_string());
            }
            pending_delete.set(None);
        })
    };
    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let tab_style = |active: bool, color: &str| {
        if active {
            format!("flex:1; padding:8px; border:0; border-radius:6px; color:#fff; cursor:pointer; background:{color};")
        } else {
            "flex:1; padding:8px; border:1px solid #e5e7eb; border-radius:6px; background:#fff; cursor:pointer;".to_string()
        }
    };

    html! {<div style="max-width:960px; margin:0 auto; padding:24px 16px 90px;">
        <h1 style="font-size:22px; margin:0 0 18px;">{"Categories"}</h1>

        <div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px; margin-bottom:24px;">
            <div style="display:flex; gap:8px; margin-bottom:14px;">
                <button onclick={set_tab(TransactionKind::Expense)}
                    style={tab_style(*active_tab == TransactionKind::Expense, EXPENSE_COLOR)}>{"Expenses"}</button>
                <button onclick={set_tab(TransactionKind::Income)}
                    style={tab_style(*active_tab == TransactionKind::Income, INCOME_COLOR)}>{"Income"}</button>
            </div>
            <div style="display:flex; gap:8px;">
                <input type="text" placeholder="New category" value={(*new_name).clone()} onchange={name_cb}
                    style="flex:1; padding:8px; border:1px solid #e5e7eb; border-radius:6px;" />
                <button onclick={add} style="padding:8px 16px; background:#22c55e; border:0; color:#fff; border-radius:6px; cursor:pointer;">{"Add"}</button>
            </div>
        </div>

        <div style="display:flex; flex-direction:column; gap:8px;">
            { for filtered.iter().map(|c| {
                let delete = {
                    let pending_delete = pending_delete.clone();
                    let id = c.id.clone();
                    Callback::from(move |_| pending_delete.set(Some(id.clone())))
                };
                html! {<div key={c.id.clone()}
                    style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.1); padding:12px 14px; display:flex; justify-content:space-between; align-items:center;">
                    <div style="display:flex; align-items:center; gap:10px;">
                        <span style={format!("width:10px; height:10px; border-radius:50%; display:inline-block; background:{};", c.color)} />
                        <span>{ &c.name }</span>
                    </div>
                    <button onclick={delete} style="border:0; background:none; cursor:pointer; font-size:16px;">{"🗑"}</button>
                </div>}
            }) }

            if filtered.is_empty() {
                <div style="background:#fff; border-radius:8px; padding:24px; text-align:center; color:#6b7280;">
                    {"No categories in this tab"}
                </div>
            }
        </div>

        <ConfirmationModal
            show={pending_delete.is_some()}
            title="Delete category"
            message="Are you sure you want to delete this category?"
            on_confirm={confirm_delete}
            on_close={close_delete}
        />
    </div>}
}
