use super::floating_action_button::FloatingActionButton;
use super::transaction_modal::TransactionModal;
use super::transactions_list::TransactionsList;
use crate::model::LedgerState;
use crate::util::{days_ago, today};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransactionsViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_notice: Callback<String>,
}

#[function_component(TransactionsView)]
pub fn transactions_view(props: &TransactionsViewProps) -> Html {
    let show_modal = use_state(|| false);
    // Last 30 days, same window the original list defaults to.
    let start_date = use_state(|| days_ago(30.0));
    let end_date = use_state(today);

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };
    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    html! {<div style="max-width:960px; margin:0 auto; padding:24px 16px 90px;">
        <h1 style="font-size:22px; margin:0 0 18px;">{"Transactions"}</h1>

        <TransactionsList
            ledger={props.ledger.clone()}
            start_date={(*start_date).clone()}
            end_date={(*end_date).clone()}
            on_notice={props.on_notice.clone()}
        />

        <FloatingActionButton on_click={open_modal} />
        <TransactionModal
            show={*show_modal}
            ledger={props.ledger.clone()}
            on_close={close_modal}
            on_notice={props.on_notice.clone()}
        />
    </div>}
}
