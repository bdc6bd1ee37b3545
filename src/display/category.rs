//! Category display formatting

use crate::models::CategoryName;

use super::report::format_money;

/// Format category suggestions with their budgets
///
/// `budget_of` looks up the budget of each category; categories without one
/// show a dash.
pub fn format_category_list<F>(categories: &[CategoryName], budget_of: F, symbol: &str) -> String
where
    F: Fn(&CategoryName) -> Option<f64>,
{
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.as_str().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>10}\n",
        "Category",
        "Budget",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->10}\n",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        let budget_str = budget_of(category)
            .map(|b| format_money(b, symbol))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<width$}  {:>10}\n",
            category.as_str(),
            budget_str,
            width = name_width
        ));
    }

    output
}
