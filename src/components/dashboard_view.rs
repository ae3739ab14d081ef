use super::dashboard_card::DashboardCard;
use super::date_filter::DateFilter;
use crate::model::{LedgerState, TransactionKind, period_balance, period_total, totals_by_category};
use crate::util::{days_ago, format_currency, today};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let start_date = use_state(|| days_ago(30.0));
    let end_date = use_state(today);

    let state = &*props.ledger;
    let period = state.transactions_between(&start_date, &end_date);
    let balance = period_balance(&period);
    let income = period_total(&period, TransactionKind::Income);
    let expenses = period_total(&period, TransactionKind::Expense);
    let daily_average = expenses / (period.len().max(1) as f64);
    let expense_breakdown = totals_by_category(&period, TransactionKind::Expense);
    let income_breakdown = totals_by_category(&period, TransactionKind::Income);

    let on_start = {
        let start_date = start_date.clone();
        Callback::from(move |d: String| start_date.set(d))
    };
    let on_end = {
        let end_date = end_date.clone();
        Callback::from(move |d: String| end_date.set(d))
    };

    let breakdown = |title: &str, rows: &[(String, f64)], total: f64, bar: &str, empty: &str| {
        html! {<div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px;">
            <h2 style="margin:0 0 16px; font-size:16px;">{ title }</h2>
            <div style="display:flex; flex-direction:column; gap:12px;">
                { for rows.iter().map(|(category, amount)| {
                    let percentage = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                    html! {<div>
                        <div style="display:flex; justify-content:space-between; font-size:13px; margin-bottom:4px;">
                            <span style="color:#4b5563;">{ category }</span>
                            <span>
                                <span style="font-weight:600;">{ format_currency(*amount) }</span>
                                <span style="color:#9ca3af; margin-left:8px;">{ format!("{percentage:.1}%") }</span>
                            </span>
                        </div>
                        <div style="height:8px; background:#f3f4f6; border-radius:4px; overflow:hidden;">
                            <div style={format!("height:100%; width:{percentage}%; background:{bar}; border-radius:4px;")} />
                        </div>
                    </div>}
                }) }
                if rows.is_empty() {
                    <div style="text-align:center; color:#6b7280; padding:12px 0;">{ empty }</div>
                }
            </div>
        </div>}
    };

    html! {<div style="max-width:960px; margin:0 auto; padding:24px 16px 90px;">
        <h1 style="font-size:22px; margin:0 0 18px;">{"Dashboard"}</h1>

        <DateFilter
            start_date={(*start_date).clone()}
            end_date={(*end_date).clone()}
            on_start_change={on_start}
            on_end_change={on_end}
        />

        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(200px, 1fr)); gap:14px; margin-bottom:24px;">
            <DashboardCard title="Period balance" value={format_currency(balance)} icon="💰"
                color={if balance >= 0.0 { "#22c55e" } else { "#ef4444" }} />
            <DashboardCard title="Period income" value={format_currency(income)} icon="📈" color="#22c55e" />
            <DashboardCard title="Period expenses" value={format_currency(expenses)} icon="📉" color="#ef4444" />
            <DashboardCard title="Daily average" value={format_currency(daily_average)} icon="📊" color="#16a34a" />
        </div>

        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(280px, 1fr)); gap:18px;">
            { breakdown("Expenses by category", &expense_breakdown, expenses,
                "linear-gradient(to right, #ef4444, #f87171)", "No expenses recorded in this period") }
            { breakdown("Income by category", &income_breakdown, income,
                "linear-gradient(to right, #22c55e, #4ade80)", "No income recorded in this period") }
        </div>
    </div>}
}
