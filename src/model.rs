//! Domain types for the budget tracker plus the ledger reducer.
//! Mirrors the records the hosted backend would own: transactions,
//! bank accounts / credit cards, categories and savings goals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Debit,
    Credit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    BankAccount,
    CreditCard,
}

/// One income or expense entry. Dates are ISO `YYYY-MM-DD` strings, which
/// keeps date comparison a plain string comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub payment_kind: Option<PaymentKind>,
    /// Credit card transactions settle on this date instead of `date`.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Set when the entry is a deposit towards a savings goal.
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub deposit_account_id: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
    pub bank_name: String,
    pub color: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: TransactionKind,
    pub color: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub account_id: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub completed: bool,
    pub created_at: String,
}

pub const INCOME_COLOR: &str = "#22c55e";
pub const EXPENSE_COLOR: &str = "#ef4444";

const DEFAULT_INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Rent",
    "Dividends",
    "Bonus",
    "Commissions",
    "Gift",
    "Refund",
    "Other",
];

const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Housing",
    "Transport",
    "Health",
    "Education",
    "Leisure",
    "Clothing",
    "Utilities",
    "Internet/Phone",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<BankAccount>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
    /// Bumped on every mutation; the persistence effect keys off it.
    #[serde(skip)]
    pub revision: u64,
}

impl LedgerState {
    /// Transactions within `[start, end]` (inclusive, ISO date strings).
    pub fn transactions_between<'a>(&'a self, start: &str, end: &str) -> Vec<&'a Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date.as_str() >= start && t.date.as_str() <= end)
            .collect()
    }

    pub fn account_balance(&self, account_id: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|t| {
                t.account_id.as_deref() == Some(account_id)
                    || t.deposit_account_id.as_deref() == Some(account_id)
            })
            .map(signed_amount)
            .sum()
    }
}

fn signed_amount(t: &Transaction) -> f64 {
    match t.kind {
        TransactionKind::Income => t.amount,
        TransactionKind::Expense => -t.amount,
    }
}

// ---------------- Period aggregations (dashboard) -----------------

pub fn period_balance(transactions: &[&Transaction]) -> f64 {
    transactions.iter().map(|t| signed_amount(t)).sum()
}

pub fn period_total(transactions: &[&Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Per-category totals for one kind, sorted highest first.
pub fn totals_by_category(
    transactions: &[&Transaction],
    kind: TransactionKind,
) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(t.category.as_str()).or_insert(0.0) += t.amount;
    }
    let mut out: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Sort for the transaction list: due date when present, else date,
/// newest first.
pub fn list_order(transactions: &mut Vec<&Transaction>) {
    transactions.sort_by(|a, b| {
        let ka = a.due_date.as_deref().unwrap_or(&a.date);
        let kb = b.due_date.as_deref().unwrap_or(&b.date);
        kb.cmp(ka)
    });
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug)]
pub enum LedgerAction {
    /// Replace the whole ledger with persisted data.
    Load(LedgerState),
    AddTransaction(Transaction),
    DeleteTransaction { id: String },
    AddAccount(BankAccount),
    DeleteAccount { id: String },
    AddCategory(Category),
    DeleteCategory { id: String },
    /// Seed the stock income/expense categories when the user has none.
    EnsureDefaultCategories { now: String },
    AddGoal(Goal),
    DeleteGoal { id: String },
    /// Record a deposit towards a goal; also books the matching transaction.
    AddToGoal { id: String, amount: f64, deposit: Transaction },
}

impl Reducible for LedgerState {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LedgerAction::*;
        let mut new = (*self).clone();
        match action {
            Load(loaded) => {
                new = loaded;
            }
            AddTransaction(mut t) => {
                // Credit card entries always carry a due date.
                if t.payment_kind == Some(PaymentKind::Credit) && t.due_date.is_none() {
                    t.due_date = Some(t.date.clone());
                }
                new.transactions.push(t);
            }
            DeleteTransaction { id } => {
                new.transactions.retain(|t| t.id != id);
            }
            AddAccount(a) => {
                new.accounts.push(a);
            }
            DeleteAccount { id } => {
                new.accounts.retain(|a| a.id != id);
            }
            AddCategory(c) => {
                new.categories.push(c);
            }
            DeleteCategory { id } => {
                new.categories.retain(|c| c.id != id);
            }
            EnsureDefaultCategories { now } => {
                if new.categories.is_empty() {
                    new.categories = default_categories(&now);
                }
            }
            AddGoal(g) => {
                new.goals.push(g);
            }
            DeleteGoal { id } => {
                new.goals.retain(|g| g.id != id);
            }
            AddToGoal { id, amount, deposit } => {
                if let Some(goal) = new.goals.iter_mut().find(|g| g.id == id) {
                    goal.current_amount += amount;
                    goal.completed = goal.current_amount >= goal.target_amount;
                    new.transactions.push(deposit);
                }
            }
        }
        new.revision = self.revision.wrapping_add(1);
        Rc::new(new)
    }
}

pub fn default_categories(now: &str) -> Vec<Category> {
    let mut cats =
        Vec::with_capacity(DEFAULT_INCOME_CATEGORIES.len() + DEFAULT_EXPENSE_CATEGORIES.len());
    for (i, name) in DEFAULT_INCOME_CATEGORIES.iter().enumerate() {
        cats.push(Category {
            id: format!("cat-income-{i}"),
            name: (*name).to_string(),
            kind: TransactionKind::Income,
            color: INCOME_COLOR.to_string(),
            created_at: now.to_string(),
        });
    }
    for (i, name) in DEFAULT_EXPENSE_CATEGORIES.iter().enumerate() {
        cats.push(Category {
            id: format!("cat-expense-{i}"),
            name: (*name).to_string(),
            kind: TransactionKind::Expense,
            color: EXPENSE_COLOR.to_string(),
            created_at: now.to_string(),
        });
    }
    cats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, amount: f64, kind: TransactionKind, category: &str, date: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            category: category.to_string(),
            kind,
            date: date.to_string(),
            description: None,
            account_id: None,
            payment_kind: None,
            due_date: None,
            goal_id: None,
            deposit_account_id: None,
            created_at: date.to_string(),
        }
    }

    fn dispatch(state: LedgerState, action: LedgerAction) -> LedgerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn credit_transaction_gets_due_date_backfilled() {
        let mut t = tx("t1", 10.0, TransactionKind::Expense, "Food", "2026-08-01");
        t.payment_kind = Some(PaymentKind::Credit);
        let state = dispatch(LedgerState::default(), LedgerAction::AddTransaction(t));
        assert_eq!(state.transactions[0].due_date.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn debit_transaction_keeps_due_date_empty() {
        let mut t = tx("t1", 10.0, TransactionKind::Expense, "Food", "2026-08-01");
        t.payment_kind = Some(PaymentKind::Debit);
        let state = dispatch(LedgerState::default(), LedgerAction::AddTransaction(t));
        assert_eq!(state.transactions[0].due_date, None);
    }

    #[test]
    fn default_categories_seed_only_when_empty() {
        let state = dispatch(
            LedgerState::default(),
            LedgerAction::EnsureDefaultCategories { now: "2026-08-29".into() },
        );
        assert_eq!(state.categories.len(), 20);
        let before = state.categories.clone();
        let state = dispatch(
            state,
            LedgerAction::EnsureDefaultCategories { now: "2026-09-01".into() },
        );
        assert_eq!(state.categories, before);
    }

    #[test]
    fn goal_completes_when_target_reached() {
        let goal = Goal {
            id: "g1".into(),
            name: "Trip".into(),
            account_id: "a1".into(),
            target_amount: 100.0,
            current_amount: 0.0,
            completed: false,
            created_at: "2026-08-01".into(),
        };
        let state = dispatch(LedgerState::default(), LedgerAction::AddGoal(goal));
        let mut deposit = tx("t1", 100.0, TransactionKind::Income, "Goal", "2026-08-02");
        deposit.goal_id = Some("g1".into());
        deposit.deposit_account_id = Some("a1".into());
        let state = dispatch(
            state,
            LedgerAction::AddToGoal { id: "g1".into(), amount: 100.0, deposit },
        );
        assert!(state.goals[0].completed);
        assert_eq!(state.goals[0].current_amount, 100.0);
        // The matching deposit transaction was booked too.
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.account_balance("a1"), 100.0);
    }

    #[test]
    fn period_aggregations() {
        let a = tx("t1", 30.0, TransactionKind::Expense, "Food", "2026-08-10");
        let b = tx("t2", 20.0, TransactionKind::Expense, "Food", "2026-08-12");
        let c = tx("t3", 100.0, TransactionKind::Income, "Salary", "2026-08-11");
        let d = tx("t4", 99.0, TransactionKind::Expense, "Food", "2026-07-01");
        let state = LedgerState {
            transactions: vec![a, b, c, d],
            ..Default::default()
        };
        let period = state.transactions_between("2026-08-01", "2026-08-31");
        assert_eq!(period.len(), 3);
        assert_eq!(period_balance(&period), 50.0);
        assert_eq!(period_total(&period, TransactionKind::Income), 100.0);
        assert_eq!(period_total(&period, TransactionKind::Expense), 50.0);
        let by_cat = totals_by_category(&period, TransactionKind::Expense);
        assert_eq!(by_cat, vec![("Food".to_string(), 50.0)]);
    }

    #[test]
    fn list_order_prefers_due_date_newest_first() {
        let a = tx("t1", 1.0, TransactionKind::Expense, "Food", "2026-08-10");
        let mut b = tx("t2", 1.0, TransactionKind::Expense, "Food", "2026-08-01");
        b.due_date = Some("2026-08-20".into());
        let c = tx("t3", 1.0, TransactionKind::Income, "Salary", "2026-08-15");
        let mut list: Vec<&Transaction> = vec![&a, &b, &c];
        list_order(&mut list);
        let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn delete_transaction_removes_only_that_row() {
        let a = tx("t1", 1.0, TransactionKind::Expense, "Food", "2026-08-10");
        let b = tx("t2", 2.0, TransactionKind::Expense, "Food", "2026-08-11");
        let state = LedgerState {
            transactions: vec![a, b],
            ..Default::default()
        };
        let state = dispatch(state, LedgerAction::DeleteTransaction { id: "t1".into() });
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.transactions[0].id, "t2");
    }
}
