//! The finance store: single source of truth for transactions and budgets
//!
//! `FinanceStore` owns both collections, applies every mutation in place,
//! writes the whole state through to a [`KeyValueStore`] under
//! [`STORAGE_KEY`], and hands subscribers the new immutable [`Snapshot`].
//!
//! Mutations never fail. Update and delete of an unknown id leave the state
//! untouched and report `found == false`. Storage failures are logged and
//! reported as a [`PersistWarning`]; the in-memory state is kept either way.
//!
//! A record that cannot be parsed is copied to [`BACKUP_KEY`] before the
//! first write replaces it.

pub mod outcome;
pub mod snapshot;

pub use outcome::{Mutation, PersistWarning, WarningKind};
pub use snapshot::Snapshot;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{Budget, BudgetId, Transaction, TransactionId};
use crate::storage::KeyValueStore;

/// Key the state is persisted under
pub const STORAGE_KEY: &str = "finance-storage";

/// Key an unparseable record is copied to before being overwritten
pub const BACKUP_KEY: &str = "finance-storage-bad";

/// Callback invoked with each new snapshot
pub type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by [`FinanceStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observable container for the finance state
pub struct FinanceStore<S: KeyValueStore> {
    backend: S,
    snapshot: Arc<Snapshot>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    last_warning: Option<PersistWarning>,
    /// Raw text of a record that failed to parse, not yet backed up
    unreadable: Option<String>,
}

impl<S: KeyValueStore> FinanceStore<S> {
    /// Rehydrate the store from `backend`
    ///
    /// A missing record gives an empty store. An unreadable or malformed
    /// record also gives an empty store, with a load warning available from
    /// [`last_warning`](Self::last_warning). A malformed record is left alone
    /// until the next mutation, which first copies it to [`BACKUP_KEY`].
    pub fn open(backend: S) -> Self {
        let (snapshot, last_warning, unreadable) = match load_snapshot(&backend) {
            Ok(snapshot) => {
                debug!(
                    transactions = snapshot.transactions.len(),
                    budgets = snapshot.budgets.len(),
                    "loaded finance data"
                );
                (snapshot, None, None)
            }
            Err(LoadFailure { message, raw }) => {
                warn!(error = %message, "failed to load finance data, starting empty");
                (Snapshot::default(), Some(PersistWarning::load(message)), raw)
            }
        };

        Self {
            backend,
            snapshot: Arc::new(snapshot),
            subscribers: Vec::new(),
            next_subscription: 0,
            last_warning,
            unreadable,
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.snapshot.budgets
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// The most recent persistence warning still in effect
    ///
    /// Cleared by the next successful write.
    pub fn last_warning(&self) -> Option<&PersistWarning> {
        self.last_warning.as_ref()
    }

    /// Register a callback for every state change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Append a transaction
    ///
    /// Ids are not checked for duplicates; [`TransactionId::new`] guarantees
    /// uniqueness.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Mutation {
        debug!(id = %transaction.id, "adding transaction");
        Arc::make_mut(&mut self.snapshot)
            .transactions
            .push(transaction);
        self.commit(true)
    }

    /// Replace the first transaction whose id matches, as a whole record
    pub fn update_transaction(&mut self, transaction: Transaction) -> Mutation {
        let position = self
            .snapshot
            .transactions
            .iter()
            .position(|t| t.id == transaction.id);

        let Some(index) = position else {
            debug!(id = %transaction.id, "update of unknown transaction ignored");
            return self.commit(false);
        };

        debug!(id = %transaction.id, "updating transaction");
        Arc::make_mut(&mut self.snapshot).transactions[index] = transaction;
        self.commit(true)
    }

    /// Remove every transaction with the given id
    pub fn delete_transaction(&mut self, id: TransactionId) -> Mutation {
        if !self.snapshot.transactions.iter().any(|t| t.id == id) {
            debug!(%id, "delete of unknown transaction ignored");
            return self.commit(false);
        }

        debug!(%id, "deleting transaction");
        Arc::make_mut(&mut self.snapshot)
            .transactions
            .retain(|t| t.id != id);
        self.commit(true)
    }

    /// Append a budget
    pub fn add_budget(&mut self, budget: Budget) -> Mutation {
        debug!(id = %budget.id, category = %budget.category, "adding budget");
        Arc::make_mut(&mut self.snapshot).budgets.push(budget);
        self.commit(true)
    }

    /// Replace the first budget whose id matches, as a whole record
    pub fn update_budget(&mut self, budget: Budget) -> Mutation {
        let position = self.snapshot.budgets.iter().position(|b| b.id == budget.id);

        let Some(index) = position else {
            debug!(id = %budget.id, "update of unknown budget ignored");
            return self.commit(false);
        };

        debug!(id = %budget.id, "updating budget");
        Arc::make_mut(&mut self.snapshot).budgets[index] = budget;
        self.commit(true)
    }

    /// Remove every budget with the given id
    pub fn delete_budget(&mut self, id: BudgetId) -> Mutation {
        if !self.snapshot.budgets.iter().any(|b| b.id == id) {
            debug!(%id, "delete of unknown budget ignored");
            return self.commit(false);
        }

        debug!(%id, "deleting budget");
        Arc::make_mut(&mut self.snapshot)
            .budgets
            .retain(|b| b.id != id);
        self.commit(true)
    }

    /// Persist and notify after a change; report a no-op otherwise
    fn commit(&mut self, changed: bool) -> Mutation {
        if !changed {
            return Mutation {
                found: false,
                warning: None,
                snapshot: self.snapshot(),
            };
        }

        let warning = self.persist().err();
        self.last_warning = warning.clone();

        let snapshot: &Snapshot = &self.snapshot;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(snapshot);
        }

        Mutation {
            found: true,
            warning,
            snapshot: self.snapshot(),
        }
    }

    fn persist(&mut self) -> Result<(), PersistWarning> {
        if let Some(raw) = self.unreadable.as_deref() {
            self.backend.set(BACKUP_KEY, raw).map_err(|e| {
                warn!(error = %e, "failed to back up unreadable finance data");
                PersistWarning::save(format!(
                    "could not keep a copy of the unreadable record, so it was not replaced: {}",
                    e
                ))
            })?;
            warn!(key = BACKUP_KEY, "unreadable finance data copied aside");
            self.unreadable = None;
        }

        let json = serde_json::to_string(&*self.snapshot).map_err(|e| {
            warn!(error = %e, "failed to serialize finance data");
            PersistWarning::save(e.to_string())
        })?;

        self.backend.set(STORAGE_KEY, &json).map_err(|e| {
            warn!(error = %e, "failed to persist finance data");
            PersistWarning::save(e.to_string())
        })
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for FinanceStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinanceStore")
            .field("backend", &self.backend)
            .field("snapshot", &self.snapshot)
            .field("subscribers", &self.subscribers.len())
            .field("last_warning", &self.last_warning)
            .field("unreadable", &self.unreadable.is_some())
            .finish()
    }
}

struct LoadFailure {
    message: String,
    /// The record text, when it was read but did not parse
    raw: Option<String>,
}

fn load_snapshot<S: KeyValueStore>(backend: &S) -> Result<Snapshot, LoadFailure> {
    match backend.get(STORAGE_KEY) {
        Ok(Some(json)) => serde_json::from_str(&json).map_err(|e| LoadFailure {
            message: format!("Failed to parse stored data: {}", e),
            raw: Some(json),
        }),
        Ok(None) => Ok(Snapshot::default()),
        Err(e) => Err(LoadFailure {
            message: e.to_string(),
            raw: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use crate::storage::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(title: &str, cents: i64, category: &str) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            category,
            TransactionType::Expense,
            date(2024, 3, 1),
        )
    }

    fn memory_store() -> FinanceStore<MemoryStore> {
        FinanceStore::open(MemoryStore::new())
    }

    fn ids(store: &FinanceStore<MemoryStore>) -> Vec<TransactionId> {
        store.transactions().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_open_empty() {
        let store = memory_store();
        assert!(store.snapshot().is_empty());
        assert!(store.last_warning().is_none());
    }

    #[test]
    fn test_add_and_delete_keep_insertion_order() {
        let mut store = memory_store();
        let txns: Vec<_> = (0..5)
            .map(|i| expense(&format!("item {}", i), 100 + i, "food"))
            .collect();
        for txn in &txns {
            assert!(store.add_transaction(txn.clone()).is_clean());
        }

        assert!(store.delete_transaction(txns[1].id).found);
        assert!(store.delete_transaction(txns[3].id).found);

        assert_eq!(ids(&store), vec![txns[0].id, txns[2].id, txns[4].id]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = memory_store();
        store.add_transaction(expense("Coffee", 450, "food"));
        let before = store.snapshot();

        let outcome = store.delete_transaction(TransactionId::new());

        assert!(!outcome.found);
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_delete_removes_all_records_with_id() {
        let mut store = memory_store();
        let txn = expense("Coffee", 450, "food");
        store.add_transaction(txn.clone());
        store.add_transaction(expense("Tea", 300, "food"));
        store.add_transaction(txn.clone());

        store.delete_transaction(txn.id);

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].title, "Tea");
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut store = memory_store();
        let txn = expense("Coffee", 450, "food");
        store.add_transaction(txn.clone());
        store.add_transaction(expense("Bus", 275, "transportation"));

        let mut edited = txn.clone();
        edited.title = "Refund".to_string();
        edited.kind = TransactionType::Income;
        edited.amount = Money::from_cents(900);

        let outcome = store.update_transaction(edited.clone());

        assert!(outcome.found);
        assert_eq!(store.transactions()[0], edited);
        assert_eq!(store.transactions()[1].title, "Bus");
    }

    #[test]
    fn test_update_unknown_leaves_persisted_bytes_unchanged() {
        let mut store = memory_store();
        store.add_transaction(expense("Coffee", 450, "food"));
        let before = store.backend().get(STORAGE_KEY).unwrap();

        let outcome = store.update_transaction(expense("Ghost", 100, "other"));

        assert!(!outcome.found);
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), before);
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_budgets_add_update_delete() {
        let mut store = memory_store();
        let food = Budget::new("food", Money::from_cents(10000));
        let food_again = Budget::new("food", Money::from_cents(5000));
        store.add_budget(food.clone());
        store.add_budget(food_again.clone());
        assert_eq!(store.budgets().len(), 2);

        let mut raised = food.clone();
        raised.amount = Money::from_cents(20000);
        assert!(store.update_budget(raised).found);
        assert_eq!(store.budgets()[0].amount.cents(), 20000);

        assert!(store.delete_budget(food.id).found);
        assert!(!store.delete_budget(food.id).found);
        assert_eq!(store.budgets(), &[food_again]);
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut store = memory_store();
        let txns = vec![
            expense("Coffee", 450, "food"),
            Transaction::new("Salary", Money::from_cents(250000), "salary", TransactionType::Income, date(2024, 2, 28)),
            expense("Cinema", 1299, "entertainment"),
        ];
        for txn in &txns {
            store.add_transaction(txn.clone());
        }
        store.add_budget(Budget::new("food", Money::from_cents(10000)));
        store.add_budget(Budget::new("entertainment", Money::from_cents(4550)));
        let original = store.snapshot();

        let reopened = FinanceStore::open(store.into_backend());

        assert_eq!(*reopened.snapshot(), *original);
    }

    #[test]
    fn test_file_backend_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let txn = expense("Coffee", 450, "food");
        {
            let mut store = FinanceStore::open(FileStore::new(temp_dir.path()));
            assert!(store.add_transaction(txn.clone()).is_clean());
        }

        let store = FinanceStore::open(FileStore::new(temp_dir.path()));
        assert_eq!(store.transactions(), &[txn]);

        let raw = std::fs::read_to_string(temp_dir.path().join("finance-storage.json")).unwrap();
        assert!(raw.contains("\"amount\":4.5"));
        assert!(raw.contains("\"type\":\"expense\""));
    }

    #[test]
    fn test_quota_exceeded_is_warning_and_memory_stays_authoritative() {
        let mut store = FinanceStore::open(MemoryStore::with_capacity(250));
        assert!(store.add_transaction(expense("Coffee", 450, "food")).is_clean());
        let persisted = store.backend().get(STORAGE_KEY).unwrap();

        let outcome = store.add_transaction(expense("A much longer title that will not fit", 1000, "shopping"));

        assert!(outcome.found);
        let warning = outcome.warning.expect("expected a warning");
        assert_eq!(warning.kind, WarningKind::Save);
        assert!(warning.message.contains("quota"));
        assert_eq!(store.transactions().len(), 2);
        assert_eq!(outcome.snapshot.transactions.len(), 2);
        assert_eq!(store.last_warning(), Some(&warning));
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_successful_write_clears_warning() {
        let mut store = FinanceStore::open(MemoryStore::with_capacity(10));
        assert!(store.add_transaction(expense("Coffee", 450, "food")).warning.is_some());
        assert!(store.last_warning().is_some());

        store.backend_mut().set_capacity(None);
        assert!(store.add_transaction(expense("Tea", 300, "food")).is_clean());

        assert!(store.last_warning().is_none());
        let reopened = FinanceStore::open(store.into_backend());
        assert_eq!(reopened.transactions().len(), 2);
    }

    #[test]
    fn test_corrupt_record_starts_empty_with_load_warning() {
        let mut backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();

        let store = FinanceStore::open(backend);

        assert!(store.snapshot().is_empty());
        assert_eq!(store.last_warning().map(|w| w.kind), Some(WarningKind::Load));
        assert_eq!(
            store.backend().get(STORAGE_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_corrupt_record_backup_is_taken_once() {
        let mut backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        let mut store = FinanceStore::open(backend);

        assert!(store.add_transaction(expense("Coffee", 450, "food")).is_clean());
        store.backend_mut().set(BACKUP_KEY, "{not json, seen").unwrap();
        assert!(store.add_transaction(expense("Tea", 300, "food")).is_clean());

        assert_eq!(
            store.backend().get(BACKUP_KEY).unwrap().as_deref(),
            Some("{not json, seen")
        );
        let reopened = FinanceStore::open(store.into_backend());
        assert_eq!(reopened.transactions().len(), 2);
        assert!(reopened.last_warning().is_none());
    }

    #[test]
    fn test_corrupt_record_is_copied_before_overwrite() {
        let mut backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        let mut store = FinanceStore::open(backend);

        store.add_budget(Budget::new("food", Money::from_cents(10000)));

        assert_eq!(
            store.backend().get(BACKUP_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_corrupt_record_is_not_replaced_when_backup_fails() {
        let mut backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        backend.set_capacity(Some(30));
        let mut store = FinanceStore::open(backend);

        let outcome = store.add_transaction(expense("Coffee", 450, "food"));

        assert_eq!(outcome.warning.map(|w| w.kind), Some(WarningKind::Save));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.backend().get(BACKUP_KEY).unwrap(), None);
        assert_eq!(
            store.backend().get(STORAGE_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_subscribers_receive_each_new_snapshot() {
        let mut store = memory_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.transactions.len()));

        let txn = expense("Coffee", 450, "food");
        store.add_transaction(txn.clone());
        store.add_transaction(expense("Tea", 300, "food"));
        store.delete_transaction(TransactionId::new());
        store.delete_transaction(txn.id);

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = memory_store();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add_budget(Budget::new("food", Money::from_cents(100)));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_budget(Budget::new("food", Money::from_cents(200)));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_held_snapshot_is_not_mutated() {
        let mut store = memory_store();
        store.add_transaction(expense("Coffee", 450, "food"));
        let held = store.snapshot();

        store.add_transaction(expense("Tea", 300, "food"));

        assert_eq!(held.transactions.len(), 1);
        assert_eq!(store.transactions().len(), 2);
    }
}
