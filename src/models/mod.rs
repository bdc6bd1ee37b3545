//! Core data models for the weekly tracker
//!
//! This module contains the plain data structures of the tracking domain:
//! category names, budgets and their status, the tracking period, and the
//! result types returned to callers.

pub mod budget;
pub mod category;
pub mod period;
pub mod progress;
pub mod summary;

pub use budget::{Budget, BudgetStatus, WARNING_THRESHOLD};
pub use category::{CategoryName, CategoryValidationError};
pub use period::Period;
pub use progress::{ProgressBar, DEFAULT_BAR_LENGTH};
pub use summary::{ChartPoint, RecordOutcome, ResetOutcome, SummaryLine};
