//! Spend ledger
//!
//! Owns the running spend total of every category for the current period.
//! Categories are remembered in the order they were first used, which is the
//! order summaries are shown in.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::CategoryName;

/// Per-category spend totals for the current period
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    totals: HashMap<String, f64>,
    order: Vec<CategoryName>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expense to a category and return the new running total
    ///
    /// The amount and the resulting total must both be finite; otherwise the
    /// ledger is left as it was. Zero and negative amounts are accepted.
    pub fn record(&mut self, category: &CategoryName, amount: f64) -> TrackerResult<f64> {
        if !amount.is_finite() {
            return Err(TrackerError::invalid_amount(category.as_str(), amount));
        }

        let total = self.total_for(category.key()) + amount;
        if !total.is_finite() {
            return Err(TrackerError::invalid_amount(category.as_str(), amount));
        }

        if self
            .totals
            .insert(category.key().to_string(), total)
            .is_none()
        {
            self.order.push(category.clone());
        }

        debug!(category = %category, amount, total, "expense recorded");
        Ok(total)
    }

    /// Spend recorded for a category, or zero if it has none
    pub fn total_for(&self, name: &str) -> f64 {
        self.totals
            .get(&CategoryName::key_for(name))
            .copied()
            .unwrap_or(0.0)
    }

    /// Check if a category has entries this period
    pub fn contains(&self, name: &str) -> bool {
        self.totals.contains_key(&CategoryName::key_for(name))
    }

    /// Drop every total, returning how many categories were cleared
    pub fn reset(&mut self) -> usize {
        let cleared = self.order.len();
        self.totals.clear();
        self.order.clear();
        cleared
    }

    /// Categories in first-insertion order
    pub fn categories(&self) -> &[CategoryName] {
        &self.order
    }

    /// Sum of all category totals
    pub fn grand_total(&self) -> f64 {
        self.order
            .iter()
            .map(|category| self.total_for(category.key()))
            .sum()
    }

    /// Number of categories with entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
