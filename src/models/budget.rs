//! Budget ceiling and budget status models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spend ratio at which a budgeted category starts warning
pub const WARNING_THRESHOLD: f64 = 0.9;

/// A per-period spending ceiling for one category
///
/// Always positive and finite; construct with [`Budget::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Budget(f64);

impl Budget {
    /// Create a budget, rejecting zero, negative, NaN and infinite values
    pub fn new(amount: f64) -> Option<Self> {
        if amount.is_finite() && amount > 0.0 {
            Some(Self(amount))
        } else {
            None
        }
    }

    /// The ceiling amount
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// The spend level at which warnings start
    pub fn warning_level(&self) -> f64 {
        WARNING_THRESHOLD * self.0
    }
}

impl From<Budget> for f64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount).ok_or_else(|| format!("budget must be positive, got {}", amount))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Classification of a category's spend against its budget
///
/// Recomputed from the current totals on every query; nothing about it is
/// stored between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget is set for the category
    Unmonitored,
    /// Below the warning threshold
    Normal,
    /// Between 90% and 100% of the budget, inclusive
    Warning {
        /// `spent / budget`, not capped
        ratio: f64,
    },
    /// Strictly above the budget
    OverBudget { spent: f64, budget: f64 },
}

impl BudgetStatus {
    /// Short label for tables and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unmonitored => "unmonitored",
            Self::Normal => "normal",
            Self::Warning { .. } => "warning",
            Self::OverBudget { .. } => "over budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_must_be_positive() {
        assert!(Budget::new(50.0).is_some());
        assert!(Budget::new(0.01).is_some());
        assert!(Budget::new(0.0).is_none());
        assert!(Budget::new(-10.0).is_none());
        assert!(Budget::new(f64::NAN).is_none());
        assert!(Budget::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_warning_level() {
        let budget = Budget::new(200.0).unwrap();
        assert_eq!(budget.warning_level(), 180.0);
    }

    #[test]
    fn test_budget_serde_rejects_non_positive() {
        let budget: Budget = serde_json::from_str("25.5").unwrap();
        assert_eq!(budget.amount(), 25.5);
        assert!(serde_json::from_str::<Budget>("0").is_err());
        assert!(serde_json::from_str::<Budget>("-3").is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BudgetStatus::Unmonitored.to_string(), "unmonitored");
        assert_eq!(BudgetStatus::Normal.to_string(), "normal");
        assert_eq!(BudgetStatus::Warning { ratio: 0.95 }.to_string(), "warning");
        assert_eq!(
            BudgetStatus::OverBudget {
                spent: 60.0,
                budget: 50.0
            }
            .to_string(),
            "over budget"
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BudgetStatus::Warning { ratio: 1.0 }).unwrap();
        assert_eq!(json, r#"{"status":"warning","ratio":1.0}"#);

        let json = serde_json::to_string(&BudgetStatus::Unmonitored).unwrap();
        assert_eq!(json, r#"{"status":"unmonitored"}"#);
    }
}
