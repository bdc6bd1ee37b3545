//! Batch step parsing
//!
//! A step is one line of text such as `add 12.50 Food` or `summary`. Amounts
//! stay as raw text here so that a bad number can be reported for that step
//! alone; only unknown keywords and missing arguments make a step malformed.

use std::fmt;

use crate::error::{TrackerError, TrackerResult};

/// One tracker operation requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `budget <amount> <category>`
    Budget { amount: String, category: String },
    /// `add <amount> <category>`
    Add { amount: String, category: String },
    /// `clear-budget <category>`
    ClearBudget { category: String },
    /// `status <category>`
    Status { category: String },
    /// `summary`
    Summary,
    /// `reset`
    Reset,
    /// `chart`
    Chart,
    /// `categories`
    Categories,
}

impl Step {
    /// Parse a single step
    pub fn parse(text: &str) -> TrackerResult<Self> {
        let mut words = text.split_whitespace();
        let keyword = words
            .next()
            .ok_or_else(|| TrackerError::Script("empty step".into()))?
            .to_lowercase();
        let rest: Vec<&str> = words.collect();

        let step = match keyword.as_str() {
            "budget" | "add" => {
                let (amount, category) = rest.split_first().ok_or_else(|| {
                    TrackerError::Script(format!("'{}' needs an amount and a category", keyword))
                })?;
                if category.is_empty() {
                    return Err(TrackerError::Script(format!(
                        "'{}' needs a category after the amount",
                        keyword
                    )));
                }
                let amount = amount.to_string();
                let category = category.join(" ");
                if keyword == "budget" {
                    Self::Budget { amount, category }
                } else {
                    Self::Add { amount, category }
                }
            }
            "clear-budget" | "status" => {
                if rest.is_empty() {
                    return Err(TrackerError::Script(format!(
                        "'{}' needs a category",
                        keyword
                    )));
                }
                let category = rest.join(" ");
                if keyword == "status" {
                    Self::Status { category }
                } else {
                    Self::ClearBudget { category }
                }
            }
            "summary" => Self::Summary,
            "reset" => Self::Reset,
            "chart" => Self::Chart,
            "categories" => Self::Categories,
            other => return Err(TrackerError::Script(format!("unknown step '{}'", other))),
        };

        Ok(step)
    }

    /// Parse a script: one step per line, skipping blanks and `#` comments
    pub fn parse_script(script: &str) -> TrackerResult<Vec<Self>> {
        script
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| {
                Self::parse(line).map_err(|e| match e {
                    TrackerError::Script(msg) => {
                        TrackerError::Script(format!("line {}: {}", index + 1, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget { amount, category } => write!(f, "budget {} {}", amount, category),
            Self::Add { amount, category } => write!(f, "add {} {}", amount, category),
            Self::ClearBudget { category } => write!(f, "clear-budget {}", category),
            Self::Status { category } => write!(f, "status {}", category),
            Self::Summary => write!(f, "summary"),
            Self::Reset => write!(f, "reset"),
            Self::Chart => write!(f, "chart"),
            Self::Categories => write!(f, "categories"),
        }
    }
}

/// Parse user-entered amount text into a finite number
///
/// Accepts an optional leading `$`, e.g. `"12.50"`, `"$12.50"`, `"-3"`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text);
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_multiword_category() {
        assert_eq!(
            Step::parse("add 12.50 School Supplies").unwrap(),
            Step::Add {
                amount: "12.50".into(),
                category: "School Supplies".into()
            }
        );
    }

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(Step::parse("SUMMARY").unwrap(), Step::Summary);
        assert_eq!(Step::parse("  reset ").unwrap(), Step::Reset);
        assert_eq!(
            Step::parse("Budget 50 Food").unwrap(),
            Step::Budget {
                amount: "50".into(),
                category: "Food".into()
            }
        );
    }

    #[test]
    fn test_bad_amount_still_parses() {
        let step = Step::parse("add abc Food").unwrap();
        assert!(matches!(step, Step::Add { ref amount, .. } if amount == "abc"));
    }

    #[test]
    fn test_malformed_steps() {
        assert!(matches!(Step::parse("spend 5 Food"), Err(TrackerError::Script(_))));
        assert!(matches!(Step::parse("add 5"), Err(TrackerError::Script(_))));
        assert!(matches!(Step::parse("add"), Err(TrackerError::Script(_))));
        assert!(matches!(Step::parse("status"), Err(TrackerError::Script(_))));
        assert!(matches!(Step::parse("   "), Err(TrackerError::Script(_))));
    }

    #[test]
    fn test_parse_script() {
        let script = "# weekly groceries\nbudget 50 Food\n\nadd 40 Food\nsummary\n";
        let steps = Step::parse_script(script).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], Step::Summary);
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = Step::parse_script("summary\nfly away\n").unwrap_err();
        assert_eq!(err.to_string(), "Script error: line 2: unknown step 'fly'");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" $40 "), Some(40.0));
        assert_eq!(parse_amount("-3"), Some(-3.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_display_round_trip_text() {
        let step = Step::parse("add 5 coffee").unwrap();
        assert_eq!(step.to_string(), "add 5 coffee");
    }
}
