//! Tracking period model
//!
//! The tracker accumulates spend for one period at a time. Periods are
//! numbered weeks; closing a week discards its totals instead of archiving
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current accumulation window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Week number, starting at 1
    pub week: u32,

    /// When this week was opened
    pub started_at: DateTime<Utc>,
}

impl Period {
    /// Open the first week
    pub fn new() -> Self {
        Self::starting(1, Utc::now())
    }

    /// Open a specific week at a given instant
    pub fn starting(week: u32, started_at: DateTime<Utc>) -> Self {
        Self { week, started_at }
    }

    /// Close this week and open the next one
    pub fn advance(&mut self) {
        self.week = self.week.saturating_add(1);
        self.started_at = Utc::now();
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::new()
    }
}
