//! Weekly Tracker - category budgets for the current week
//!
//! This library provides the core of a personal weekly expense tracker. It
//! records category-tagged expenses, keeps running totals against optional
//! per-category budgets, warns when a category reaches 90% of its budget,
//! and resets the week while keeping categories and budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Data models (category names, budgets, periods, results)
//! - `services`: Registry, ledger, budget evaluation and the `Tracker`
//! - `display`: Text formatting for summaries and alerts
//! - `cli`: Batch step parsing and execution for the `tracker` binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use weekly_tracker::models::BudgetStatus;
//! use weekly_tracker::services::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.register("Food", Some(50.0)).unwrap();
//!
//! let outcome = tracker.record("food", 45.0).unwrap();
//! assert_eq!(outcome.status, BudgetStatus::Warning { ratio: 0.9 });
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{TrackerError, TrackerResult};
pub use services::Tracker;
