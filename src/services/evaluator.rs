//! Budget evaluation
//!
//! Pure functions classifying a category's spend against its budget and
//! producing the progress indicator shown in summaries.

use crate::models::{Budget, BudgetStatus, ProgressBar};

/// Classify spend against an optional budget
///
/// * no budget (or one that is not positive): `Unmonitored`
/// * `spent > budget`: `OverBudget`
/// * `spent >= 90%` of budget: `Warning` with the uncapped ratio
/// * otherwise: `Normal`
pub fn evaluate(spent: f64, budget: Option<f64>) -> BudgetStatus {
    let Some(budget) = budget.and_then(Budget::new) else {
        return BudgetStatus::Unmonitored;
    };

    if spent > budget.amount() {
        BudgetStatus::OverBudget {
            spent,
            budget: budget.amount(),
        }
    } else if spent >= budget.warning_level() {
        BudgetStatus::Warning {
            ratio: spent / budget.amount(),
        }
    } else {
        BudgetStatus::Normal
    }
}

/// Spend as a fraction of the budget, or zero when there is no budget
pub fn progress_ratio(spent: f64, budget: Option<f64>) -> f64 {
    match budget {
        Some(budget) if budget > 0.0 => spent / budget,
        _ => 0.0,
    }
}

/// Progress bar for a budgeted category; `None` when unmonitored
pub fn progress_bar(spent: f64, budget: Option<f64>, length: usize) -> Option<ProgressBar> {
    budget.map(|_| ProgressBar::new(progress_ratio(spent, budget), length))
}
