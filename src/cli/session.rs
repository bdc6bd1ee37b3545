//! Batch session
//!
//! Runs a list of steps against a fresh tracker and writes the results.
//! Rejected input (a bad number, a non-positive budget, an empty category
//! name) is reported on the error stream and the session moves on to the
//! next step.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{
    format_alert, format_budget_set, format_category_list, format_money, format_new_category,
    format_record_alert, format_record_confirmation, format_reset, format_summary,
};
use crate::error::{TrackerError, TrackerResult};
use crate::services::Tracker;

use super::step::{parse_amount, Step};

/// Arguments for `tracker run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Steps to run in order, one quoted argument per step,
    /// e.g. "budget 50 Food" "add 12.50 Food" summary
    pub steps: Vec<String>,

    /// Read steps from a file (one per line), run before any inline steps
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

impl RunArgs {
    /// Collect and parse every requested step
    pub fn load_steps(&self) -> TrackerResult<Vec<Step>> {
        let mut steps = Vec::new();

        if let Some(path) = &self.script {
            let script = std::fs::read_to_string(path).map_err(|e| {
                TrackerError::Io(format!("Failed to read script {}: {}", path.display(), e))
            })?;
            steps.extend(Step::parse_script(&script)?);
        }

        for text in &self.steps {
            steps.push(Step::parse(text)?);
        }

        Ok(steps)
    }
}

/// A tracker driven by batch steps
pub struct Session {
    tracker: Tracker,
    currency_symbol: String,
}

impl Session {
    /// Start a session with a fresh tracker built from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            tracker: Tracker::with_settings(settings),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// The tracker this session drives
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Run all steps, writing results to `out` and rejected input to `err`
    pub fn run_all<O: Write, E: Write>(
        &mut self,
        steps: &[Step],
        out: &mut O,
        err: &mut E,
    ) -> TrackerResult<()> {
        for step in steps {
            self.run(step, out, err)?;
        }
        Ok(())
    }

    /// Run one step
    pub fn run<O: Write, E: Write>(
        &mut self,
        step: &Step,
        out: &mut O,
        err: &mut E,
    ) -> TrackerResult<()> {
        debug!(%step, "running step");
        let symbol = self.currency_symbol.as_str();

        match step {
            Step::Budget { amount, category } => {
                let Some(value) = parse_amount(amount) else {
                    writeln!(err, "Invalid budget! Must be a positive number.")?;
                    return Ok(());
                };

                match self.tracker.register(category, Some(value)) {
                    Ok(name) => writeln!(out, "{}", format_budget_set(&name, value, symbol))?,
                    Err(TrackerError::InvalidBudget { .. }) => {
                        writeln!(err, "Invalid budget! Must be a positive number.")?
                    }
                    Err(e) if e.is_input_error() => writeln!(err, "{}", e)?,
                    Err(e) => return Err(e),
                }
            }

            Step::Add { amount, category } => {
                let Some(value) = parse_amount(amount) else {
                    writeln!(err, "Invalid amount! Please enter a number.")?;
                    return Ok(());
                };

                match self.tracker.record(category, value) {
                    Ok(outcome) => {
                        if outcome.created {
                            writeln!(out, "{}", format_new_category(&outcome.category))?;
                        }
                        writeln!(out, "{}", format_record_confirmation(&outcome, symbol))?;
                        if let Some(alert) = format_record_alert(&outcome, symbol) {
                            writeln!(out, "{}", alert)?;
                        }
                    }
                    Err(e) if e.is_input_error() => writeln!(err, "{}", e)?,
                    Err(e) => return Err(e),
                }
            }

            Step::ClearBudget { category } => match self.tracker.clear_budget(category) {
                Some(previous) => writeln!(
                    out,
                    "Removed {} budget from {}",
                    format_money(previous, symbol),
                    self.display_name(category)
                )?,
                None => writeln!(out, "{} has no budget", self.display_name(category))?,
            },

            Step::Status { category } => {
                let name = self.display_name(category);
                let spent = self.tracker.total_for(category);
                let budget = self.tracker.get_budget(category);
                let status = self.tracker.evaluate(category);

                let budget_info = budget
                    .map(|b| format!(" of {}", format_money(b, symbol)))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{}: {}{} ({})",
                    name,
                    format_money(spent, symbol),
                    budget_info,
                    status
                )?;

                if let Some(known) = self.tracker.category(category) {
                    if let Some(alert) = format_alert(known, spent, budget, &status, symbol) {
                        writeln!(out, "{}", alert)?;
                    }
                }
            }

            Step::Summary => {
                let lines = self.tracker.summary_lines();
                write!(
                    out,
                    "{}",
                    format_summary(
                        &lines,
                        self.tracker.period(),
                        self.tracker.grand_total(),
                        symbol
                    )
                )?;
            }

            Step::Reset => {
                let outcome = self.tracker.reset();
                writeln!(out, "{}", format_reset(&outcome))?;
            }

            Step::Chart => {
                let json = serde_json::to_string_pretty(&self.tracker.chart_data())?;
                writeln!(out, "{}", json)?;
            }

            Step::Categories => {
                let categories = self.tracker.known_categories();
                let tracker = &self.tracker;
                write!(
                    out,
                    "{}",
                    format_category_list(&categories, |c| tracker.get_budget(c.key()), symbol)
                )?;
            }
        }

        Ok(())
    }

    /// Name as the tracker knows it, or as typed when unknown
    fn display_name(&self, raw: &str) -> String {
        self.tracker
            .category(raw)
            .map(|c| c.to_string())
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_steps(steps: &[&str]) -> (Session, String, String) {
        let mut session = Session::new(&Settings::default());
        let steps: Vec<Step> = steps.iter().map(|s| Step::parse(s).unwrap()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        session.run_all(&steps, &mut out, &mut err).unwrap();
        (
            session,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_budget_then_expenses() {
        let (session, out, err) = run_steps(&["budget 50 Food", "add 40 Food", "add 10 food"]);

        assert!(err.is_empty());
        assert!(out.contains("Weekly budget for Food set to $50.00"));
        assert!(out.contains("Added $40.00 to Food"));
        assert!(out.contains("WARNING: Food at 100% (50.00/50.00)"));
        assert_eq!(session.tracker().total_for("Food"), 50.0);
    }

    #[test]
    fn test_new_category_notice() {
        let (_, out, _) = run_steps(&["add 5 coffee"]);
        assert!(out.contains("New category detected: Coffee (no budget monitoring)"));
        assert!(out.contains("Added $5.00 to Coffee"));
    }

    #[test]
    fn test_over_budget_alert() {
        let (_, out, _) = run_steps(&["budget 20 Fun", "add 25 Fun"]);
        assert!(out.contains("OVERBUDGET! Fun: $25.00 / $20.00"));
    }

    #[test]
    fn test_rejected_input_continues() {
        let (session, out, err) = run_steps(&[
            "budget -5 Food",
            "budget abc Food",
            "add xyz Food",
            "add 3 Food",
        ]);

        assert_eq!(
            err.matches("Invalid budget! Must be a positive number.").count(),
            2
        );
        assert!(err.contains("Invalid amount! Please enter a number."));
        assert!(out.contains("Added $3.00 to Food"));
        assert_eq!(session.tracker().get_budget("Food"), None);
    }

    #[test]
    fn test_summary_and_reset() {
        let (session, out, _) = run_steps(&[
            "budget 100 Food",
            "add 50 Food",
            "summary",
            "reset",
            "reset",
        ]);

        assert!(out.contains("=== Weekly Summary (Week 1) ==="));
        assert!(out.contains("[██████████░░░░░░░░░░] 50%"));
        assert!(out.contains("Weekly totals cleared. Ready for week 2!"));
        assert!(out.contains("Weekly totals are already empty!"));
        assert_eq!(session.tracker().get_budget("Food"), Some(100.0));
    }

    #[test]
    fn test_status_and_clear_budget() {
        let (_, out, _) = run_steps(&[
            "budget 50 Food",
            "add 46 Food",
            "status food",
            "clear-budget Food",
            "status Food",
        ]);

        assert!(out.contains("Food: $46.00 of $50.00 (warning)"));
        assert!(out.contains("WARNING: Food at 92% (46.00/50.00)"));
        assert!(out.contains("Removed $50.00 budget from Food"));
        assert!(out.contains("Food: $46.00 (unmonitored)"));
    }

    #[test]
    fn test_chart_output_is_json() {
        let (_, out, _) = run_steps(&["budget 40 Transport", "add 10 Transport", "add 5 Coffee", "chart"]);

        let start = out.find('[').unwrap();
        let points: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(points[0]["category"], "Coffee");
        assert_eq!(points[0]["budget"], 0.0);
        assert_eq!(points[1]["category"], "Transport");
    }

    #[test]
    fn test_categories_listing() {
        let (_, out, _) = run_steps(&["budget 30 Coffee", "categories"]);
        assert!(out.contains("Food"));
        assert!(out.contains("School supplies"));
        assert!(out.contains("Coffee"));
        assert!(out.contains("$30.00"));
    }

    #[test]
    fn test_load_steps_from_script() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("week.txt");
        std::fs::write(&path, "# groceries\nbudget 50 Food\nadd 10 Food\n").unwrap();

        let args = RunArgs {
            steps: vec!["summary".into()],
            script: Some(path),
        };
        let steps = args.load_steps().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], Step::Summary);
    }

    #[test]
    fn test_missing_script_is_io_error() {
        let args = RunArgs {
            steps: Vec::new(),
            script: Some(PathBuf::from("/nonexistent/week.txt")),
        };
        assert!(matches!(args.load_steps(), Err(TrackerError::Io(_))));
    }
}
