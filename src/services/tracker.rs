//! Expense tracker
//!
//! The owned context that ties the category registry, the spend ledger and
//! the current period together. Every operation a shell can perform goes
//! through [`Tracker`]; there is no global instance.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BudgetStatus, CategoryName, ChartPoint, Period, RecordOutcome, ResetOutcome, SummaryLine,
    DEFAULT_BAR_LENGTH,
};
use crate::services::evaluator;
use crate::services::{CategoryRegistry, Ledger};

/// Weekly expense tracker
#[derive(Debug, Clone)]
pub struct Tracker {
    registry: CategoryRegistry,
    ledger: Ledger,
    period: Period,
    bar_length: usize,
    default_categories: Vec<CategoryName>,
}

impl Tracker {
    /// Create a tracker with default options
    pub fn new() -> Self {
        Self {
            registry: CategoryRegistry::new(),
            ledger: Ledger::new(),
            period: Period::new(),
            bar_length: DEFAULT_BAR_LENGTH,
            default_categories: Vec::new(),
        }
    }

    /// Create a tracker configured from user settings
    ///
    /// Invalid default category names in the settings are skipped.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut tracker = Self::new();
        tracker.bar_length = settings.progress_bar_length.max(1);
        tracker.default_categories = settings
            .default_categories
            .iter()
            .filter_map(|raw| CategoryName::parse(raw).ok())
            .collect();
        tracker
    }

    // === Registry ===

    /// Add a category or set its budget
    ///
    /// See [`CategoryRegistry::register`]; an invalid budget leaves the
    /// tracker untouched.
    pub fn register(&mut self, name: &str, budget: Option<f64>) -> TrackerResult<CategoryName> {
        self.registry.register(name, budget)
    }

    /// Remove a category's budget so it is no longer monitored
    pub fn clear_budget(&mut self, name: &str) -> Option<f64> {
        self.registry.clear_budget(name)
    }

    /// Budget for a category, if any
    pub fn get_budget(&self, name: &str) -> Option<f64> {
        self.registry.get_budget(name)
    }

    /// Check if a category is known
    pub fn has(&self, name: &str) -> bool {
        self.registry.has(name)
    }

    /// The registered spelling of a category, if it is known
    pub fn category(&self, name: &str) -> Option<&CategoryName> {
        self.registry.get(name)
    }

    // === Ledger ===

    /// Record an expense and classify the category afterwards
    ///
    /// Unknown categories are created without a budget first. A non-finite
    /// amount is rejected before anything is created.
    pub fn record(&mut self, name: &str, amount: f64) -> TrackerResult<RecordOutcome> {
        let parsed = CategoryName::parse(name)?;
        if !amount.is_finite() {
            return Err(TrackerError::invalid_amount(parsed.as_str(), amount));
        }

        let created = !self.registry.has(parsed.key());
        let category = self.registry.ensure(&parsed);
        let total = self.ledger.record(&category, amount)?;
        let budget = self.registry.get_budget(category.key());
        let status = evaluator::evaluate(total, budget);

        if let BudgetStatus::OverBudget { spent, budget } = status {
            warn!(category = %category, spent, budget, "category over budget");
        }

        Ok(RecordOutcome {
            category,
            amount,
            total,
            budget,
            status,
            created,
        })
    }

    /// Spend recorded for a category this period
    pub fn total_for(&self, name: &str) -> f64 {
        self.ledger.total_for(name)
    }

    /// Classify a category from its current total and budget
    pub fn evaluate(&self, name: &str) -> BudgetStatus {
        evaluator::evaluate(self.ledger.total_for(name), self.registry.get_budget(name))
    }

    /// Clear every total and open the next week
    ///
    /// Categories and budgets survive. Resetting an empty ledger changes
    /// nothing.
    pub fn reset(&mut self) -> ResetOutcome {
        if self.ledger.is_empty() {
            return ResetOutcome::AlreadyEmpty;
        }

        let categories = self.ledger.reset();
        self.period.advance();
        info!(categories, week = self.period.week, "weekly totals cleared");

        ResetOutcome::Cleared {
            categories,
            week: self.period.week,
        }
    }

    // === Reporting ===

    /// One summary row per category with spend, in first-use order
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        self.ledger
            .categories()
            .iter()
            .map(|category| {
                let spent = self.ledger.total_for(category.key());
                let budget = self.registry.get_budget(category.key());
                SummaryLine {
                    category: category.clone(),
                    spent,
                    budget,
                    status: evaluator::evaluate(spent, budget),
                    progress: evaluator::progress_bar(spent, budget, self.bar_length),
                }
            })
            .collect()
    }

    /// Spend and budget per category, sorted by name, for charting
    pub fn chart_data(&self) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = self
            .ledger
            .categories()
            .iter()
            .map(|category| ChartPoint {
                category: category.clone(),
                spent: self.ledger.total_for(category.key()),
                budget: self.registry.get_budget(category.key()).unwrap_or(0.0),
            })
            .collect();
        points.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));
        points
    }

    /// Category suggestions: configured defaults, then everything in use
    pub fn known_categories(&self) -> Vec<CategoryName> {
        let registered = self.registry.categories();
        let mut seen = HashSet::new();
        self.default_categories
            .iter()
            .chain(registered.iter())
            .chain(self.ledger.categories().iter())
            .filter(|category| seen.insert(category.key().to_string()))
            .cloned()
            .collect()
    }

    /// Sum of spend across all categories
    pub fn grand_total(&self) -> f64 {
        self.ledger.grand_total()
    }

    /// The current period
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Check if no expense has been recorded this period
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
