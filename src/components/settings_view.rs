use crate::model::{LedgerAction, LedgerState};
use crate::store;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsViewProps {
    pub ledger: UseReducerHandle<LedgerState>,
    pub on_notice: Callback<String>,
}

#[function_component(SettingsView)]
pub fn settings_view(props: &SettingsViewProps) -> Html {
    let wipe_cb = {
        let ledger = props.ledger.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|win| {
                    win.confirm_with_message(
                        "This will WIPE all data (transactions, accounts, categories, goals). Are you sure?",
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(true);
            if confirmed {
                store::wipe();
                ledger.dispatch(LedgerAction::Load(LedgerState::default()));
                on_notice.emit("All data wiped".to_string());
            }
        })
    };

    let state = &*props.ledger;

    html! {<div style="max-width:960px; margin:0 auto; padding:24px 16px 90px;">
        <h1 style="font-size:22px; margin:0 0 18px;">{"Settings"}</h1>

        <div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px; margin-bottom:18px;">
            <h2 style="margin:0 0 10px; font-size:16px;">{"Your data"}</h2>
            <p style="margin:0 0 4px; font-size:13px; color:#6b7280;">
                { format!("{} transactions · {} accounts · {} categories · {} goals",
                    state.transactions.len(), state.accounts.len(),
                    state.categories.len(), state.goals.len()) }
            </p>
            <p style="margin:0; font-size:12px; color:#9ca3af;">
                {"Everything is stored locally in this browser."}
            </p>
        </div>

        <div style="background:#fff; border-radius:8px; box-shadow:0 1px 3px rgba(0,0,0,0.15); padding:18px;">
            <h2 style="margin:0 0 10px; font-size:16px;">{"Danger zone"}</h2>
            <button onclick={wipe_cb}
                style="padding:8px 16px; background:#ef4444; border:1px solid #b62324; color:#fff; border-radius:6px; cursor:pointer;">
                {"Wipe all data"}
            </button>
        </div>
    </div>}
}
