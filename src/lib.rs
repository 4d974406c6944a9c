//! Finance Tracker - personal income, expense and budget tracking
//!
//! Transactions and per-category budgets live in a single observable store
//! that persists to a string key-value medium under the key
//! `"finance-storage"`. Pure engines compute totals, budget usage, monthly
//! series and category distributions from store snapshots.
//!
//! # Architecture
//!
//! - `models`: transactions, budgets, money, ids and the category catalog
//! - `store`: the state container, its snapshots and mutation outcomes
//! - `storage`: the key-value media (JSON files, in-memory)
//! - `reports`: aggregation engine and text reports
//! - `services`: entry validation, filtering/sorting and id lookup
//! - `config`: paths and user settings
//! - `display`, `cli`: terminal presentation and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::storage::MemoryStore;
//! use finance_tracker::store::FinanceStore;
//! use finance_tracker::reports::balance;
//!
//! let store = FinanceStore::open(MemoryStore::new());
//! println!("{}", balance(store.transactions()));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{FinanceError, FinanceResult};
