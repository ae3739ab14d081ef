//! localStorage persistence for the ledger. Stands in for the hosted
//! backend: each collection is stored as a JSON document under a `pf_*` key.
//! Storage failures are swallowed; the app keeps running on in-memory state.

use crate::model::{BankAccount, Category, Goal, LedgerState, Transaction};
use serde::Serialize;
use serde::de::DeserializeOwned;

const TRANSACTIONS_KEY: &str = "pf_transactions";
const ACCOUNTS_KEY: &str = "pf_accounts";
const CATEGORIES_KEY: &str = "pf_categories";
const GOALS_KEY: &str = "pf_goals";

fn read_key<T: DeserializeOwned>(key: &str) -> Option<T> {
    let win = web_sys::window()?;
    let store = win.local_storage().ok()??;
    let raw = store.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

fn write_key<T: Serialize>(key: &str, value: &T) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(s) = serde_json::to_string(value) {
                let _ = store.set_item(key, &s);
            }
        }
    }
}

pub fn load_ledger() -> LedgerState {
    LedgerState {
        transactions: read_key::<Vec<Transaction>>(TRANSACTIONS_KEY).unwrap_or_default(),
        accounts: read_key::<Vec<BankAccount>>(ACCOUNTS_KEY).unwrap_or_default(),
        categories: read_key::<Vec<Category>>(CATEGORIES_KEY).unwrap_or_default(),
        goals: read_key::<Vec<Goal>>(GOALS_KEY).unwrap_or_default(),
        revision: 0,
    }
}

pub fn save_ledger(state: &LedgerState) {
    write_key(TRANSACTIONS_KEY, &state.transactions);
    write_key(ACCOUNTS_KEY, &state.accounts);
    write_key(CATEGORIES_KEY, &state.categories);
    write_key(GOALS_KEY, &state.goals);
}

/// Remove every persisted collection (settings "wipe all data").
pub fn wipe() {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            for key in [TRANSACTIONS_KEY, ACCOUNTS_KEY, CATEGORIES_KEY, GOALS_KEY] {
                let _ = store.remove_item(key);
            }
        }
    }
}
