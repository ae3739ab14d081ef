use super::accounts_view::AccountsView;
use super::bottom_navigation::BottomNavigation;
use super::categories_view::CategoriesView;
use super::dashboard_view::DashboardView;
use super::goals_view::GoalsView;
use super::settings_view::SettingsView;
use super::transactions_view::TransactionsView;
use crate::model::{LedgerAction, LedgerState};
use crate::store;
use crate::util::{clog, today};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
pub enum View {
    Dashboard,
    Transactions,
    Accounts,
    Categories,
    Goals,
    Settings,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Dashboard);
    let ledger = use_reducer(LedgerState::default);
    let notice = use_state(|| None::<String>);

    // Load persisted data, then provision the stock categories for a fresh
    // ledger (the backend-provisioning rule, done locally here).
    {
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            ledger.dispatch(LedgerAction::Load(store::load_ledger()));
            ledger.dispatch(LedgerAction::EnsureDefaultCategories { now: today() });
            || ()
        });
    }

    // Persist on every mutation. Revision 0 is the pre-load blank state.
    {
        let ledger = ledger.clone();
        use_effect_with(ledger.revision, move |rev| {
            if *rev > 0 {
                store::save_ledger(&ledger);
            }
            || ()
        });
    }

    // Transient notice, auto-dismissed.
    {
        let notice = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let mut pending = None;
            if current.is_some() {
                if let Some(win) = web_sys::window() {
                    let notice = notice.clone();
                    let clear = Closure::wrap(Box::new(move || notice.set(None)) as Box<dyn FnMut()>);
                    if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        clear.as_ref().unchecked_ref(),
                        2500,
                    ) {
                        pending = Some((id, clear));
                    }
                }
            }
            move || {
                if let Some((id, _clear)) = pending {
                    if let Some(win) = web_sys::window() {
                        win.clear_timeout_with_handle(id);
                    }
                }
            }
        });
    }

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |v: View| view.set(v))
    };
    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |msg: String| {
            clog(&msg);
            notice.set(Some(msg));
        })
    };

    let content = match *view {
        View::Dashboard => html! { <DashboardView ledger={ledger.clone()} /> },
        View::Transactions => {
            html! { <TransactionsView ledger={ledger.clone()} on_notice={on_notice.clone()} /> }
        }
        View::Accounts => {
            html! { <AccountsView ledger={ledger.clone()} on_notice={on_notice.clone()} /> }
        }
        View::Categories => {
            html! { <CategoriesView ledger={ledger.clone()} on_notice={on_notice.clone()} /> }
        }
        View::Goals => html! { <GoalsView ledger={ledger.clone()} on_notice={on_notice.clone()} /> },
        View::Settings => {
            html! { <SettingsView ledger={ledger.clone()} on_notice={on_notice.clone()} /> }
        }
    };

    html! {<div id="root" style="min-height:100vh; background:#f3f4f6; font-family:system-ui, sans-serif;">
        { content }
        if let Some(msg) = &*notice {
            <div style="position:fixed; top:16px; left:50%; transform:translateX(-50%); background:#111827; color:#fff; padding:8px 16px; border-radius:8px; font-size:13px; z-index:70;">
                { msg }
            </div>
        }
        <BottomNavigation active={*view} on_navigate={on_navigate} />
    </div>}
}
