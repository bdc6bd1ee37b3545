//! Period summary formatting
//!
//! Formats summary rows for terminal output, one line per category in the
//! order the categories were first used.

use crate::models::{Period, SummaryLine};

use super::report::{format_header, format_money};

/// Width of the category column
const CATEGORY_WIDTH: usize = 15;

/// Format one summary row
///
/// ```text
/// FOOD            $50.00  Budget: $100.00 [██████████░░░░░░░░░░] 50%
/// COFFEE          $5.00  No budget set
/// ```
pub fn format_summary_line(line: &SummaryLine, symbol: &str) -> String {
    let budget_info = match line.budget {
        Some(budget) => format!("Budget: {}", format_money(budget, symbol)),
        None => "No budget set".to_string(),
    };

    let row = format!(
        "{:<width$} {}  {} {}",
        line.category.as_str().to_uppercase(),
        format_money(line.spent, symbol),
        budget_info,
        line.progress_bar_text(),
        width = CATEGORY_WIDTH
    );
    row.trim_end().to_string()
}

/// Format the full summary with a header naming the week
///
/// `total` is the period's grand total, shown on the closing `TOTAL` row.
pub fn format_summary(lines: &[SummaryLine], period: &Period, total: f64, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&format!("Weekly Summary (Week {})", period.week)));
    output.push('\n');

    if lines.is_empty() {
        output.push_str("No expenses recorded this week.\n");
        return output;
    }

    for line in lines {
        output.push_str(&format_summary_line(line, symbol));
        output.push('\n');
    }

    output.push_str(&format!(
        "{:<width$} {}\n",
        "TOTAL",
        format_money(total, symbol),
        width = CATEGORY_WIDTH
    ));

    output
}
