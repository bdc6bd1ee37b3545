//! One-line messages for tracker events
//!
//! Confirmations and budget alerts printed after each operation.

use crate::models::{BudgetStatus, CategoryName, RecordOutcome, ResetOutcome};

use super::report::{format_money, format_ratio_percent};

/// Format the budget alert for a category, if its status warrants one
///
/// The warning ratio is shown uncapped, so spend at 100% of the budget reads
/// `at 100%`.
pub fn format_alert(
    category: &CategoryName,
    spent: f64,
    budget: Option<f64>,
    status: &BudgetStatus,
    symbol: &str,
) -> Option<String> {
    match *status {
        BudgetStatus::OverBudget { spent, budget } => Some(format!(
            "OVERBUDGET! {}: {} / {}",
            category,
            format_money(spent, symbol),
            format_money(budget, symbol)
        )),
        BudgetStatus::Warning { ratio } => Some(format!(
            "WARNING: {} at {} ({:.2}/{:.2})",
            category,
            format_ratio_percent(ratio),
            spent,
            budget.unwrap_or(0.0)
        )),
        BudgetStatus::Normal | BudgetStatus::Unmonitored => None,
    }
}

/// Format the alert that follows a recorded expense
pub fn format_record_alert(outcome: &RecordOutcome, symbol: &str) -> Option<String> {
    format_alert(
        &outcome.category,
        outcome.total,
        outcome.budget,
        &outcome.status,
        symbol,
    )
}

/// Format the confirmation for a recorded expense
pub fn format_record_confirmation(outcome: &RecordOutcome, symbol: &str) -> String {
    format!(
        "Added {} to {}",
        format_money(outcome.amount, symbol),
        outcome.category
    )
}

/// Format the notice shown when an expense creates a category
pub fn format_new_category(category: &CategoryName) -> String {
    format!(
        "New category detected: {} (no budget monitoring)",
        category
    )
}

/// Format the confirmation for a budget change
pub fn format_budget_set(category: &CategoryName, budget: f64, symbol: &str) -> String {
    format!(
        "Weekly budget for {} set to {}",
        category,
        format_money(budget, symbol)
    )
}

/// Format the result of a period reset
pub fn format_reset(outcome: &ResetOutcome) -> String {
    match outcome {
        ResetOutcome::Cleared { week, .. } => {
            format!("Weekly totals cleared. Ready for week {}!", week)
        }
        ResetOutcome::AlreadyEmpty => "Weekly totals are already empty!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> CategoryName {
        CategoryName::parse("Food").unwrap()
    }

    #[test]
    fn test_over_budget_alert() {
        let status = BudgetStatus::OverBudget {
            spent: 60.0,
            budget: 50.0,
        };
        assert_eq!(
            format_alert(&food(), 60.0, Some(50.0), &status, "$").unwrap(),
            "OVERBUDGET! Food: $60.00 / $50.00"
        );
    }

    #[test]
    fn test_warning_alert() {
        let status = BudgetStatus::Warning { ratio: 1.0 };
        assert_eq!(
            format_alert(&food(), 50.0, Some(50.0), &status, "$").unwrap(),
            "WARNING: Food at 100% (50.00/50.00)"
        );
    }

    #[test]
    fn test_no_alert_when_quiet() {
        assert!(format_alert(&food(), 10.0, Some(50.0), &BudgetStatus::Normal, "$").is_none());
        assert!(format_alert(&food(), 10.0, None, &BudgetStatus::Unmonitored, "$").is_none());
    }

    #[test]
    fn test_record_messages() {
        let outcome = RecordOutcome {
            category: food(),
            amount: 10.0,
            total: 46.0,
            budget: Some(50.0),
            status: BudgetStatus::Warning { ratio: 0.92 },
            created: false,
        };

        assert_eq!(
            format_record_confirmation(&outcome, "$"),
            "Added $10.00 to Food"
        );
        assert_eq!(
            format_record_alert(&outcome, "$").unwrap(),
            "WARNING: Food at 92% (46.00/50.00)"
        );
    }

    #[test]
    fn test_reset_messages() {
        let cleared = ResetOutcome::Cleared {
            categories: 3,
            week: 2,
        };
        assert_eq!(
            format_reset(&cleared),
            "Weekly totals cleared. Ready for week 2!"
        );
        assert_eq!(
            format_reset(&ResetOutcome::AlreadyEmpty),
            "Weekly totals are already empty!"
        );
    }

    #[test]
    fn test_budget_set() {
        assert_eq!(
            format_budget_set(&food(), 50.0, "$"),
            "Weekly budget for Food set to $50.00"
        );
    }
}
