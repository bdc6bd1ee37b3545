//! Result types handed back to the shell
//!
//! These carry plain data; turning them into text is the job of the
//! `display` module.

use serde::{Deserialize, Serialize};

use super::budget::BudgetStatus;
use super::category::CategoryName;
use super::progress::ProgressBar;

/// One row of the period summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Category this row describes
    pub category: CategoryName,

    /// Spend accumulated this period
    pub spent: f64,

    /// Budget ceiling, if the category is monitored
    pub budget: Option<f64>,

    /// Current classification
    pub status: BudgetStatus,

    /// Progress indicator, present exactly when a budget exists
    pub progress: Option<ProgressBar>,
}

impl SummaryLine {
    /// The progress bar as text, or an empty string when unmonitored
    pub fn progress_bar_text(&self) -> String {
        self.progress.map(|bar| bar.to_string()).unwrap_or_default()
    }
}

/// What happened when an expense was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// Category the expense was added to
    pub category: CategoryName,

    /// The amount that was added
    pub amount: f64,

    /// Running total after the addition
    pub total: f64,

    /// Budget ceiling at the time of the addition
    pub budget: Option<f64>,

    /// Classification after the addition
    pub status: BudgetStatus,

    /// True when this expense created the category
    pub created: bool,
}

/// What happened when the period was reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResetOutcome {
    /// Totals were cleared and a new week was opened
    Cleared {
        /// Number of categories whose totals were dropped
        categories: usize,
        /// The newly opened week
        week: u32,
    },
    /// There was nothing to clear
    AlreadyEmpty,
}

/// Spend and budget for one category, for an external chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub category: CategoryName,
    pub spent: f64,
    /// Zero when the category has no budget
    pub budget: f64,
}
