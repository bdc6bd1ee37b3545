//! Category registry
//!
//! Owns the mapping from category to optional budget ceiling. Lookups are
//! total: unknown categories simply have no budget.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, CategoryName};

#[derive(Debug, Clone)]
struct RegistryEntry {
    name: CategoryName,
    budget: Option<Budget>,
}

/// Registry of known categories and their budgets
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    entries: HashMap<String, RegistryEntry>,
    order: Vec<String>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category or set its budget
    ///
    /// A provided budget must be positive and finite, otherwise nothing
    /// changes and `InvalidBudget` is returned. Passing `None` only makes sure
    /// the category exists; an existing budget is kept.
    pub fn register(&mut self, name: &str, budget: Option<f64>) -> TrackerResult<CategoryName> {
        let category = CategoryName::parse(name)?;

        let budget = match budget {
            Some(value) => Some(
                Budget::new(value)
                    .ok_or_else(|| TrackerError::invalid_budget(category.as_str(), value))?,
            ),
            None => None,
        };

        let category = self.ensure(&category);
        if let Some(budget) = budget {
            if let Some(entry) = self.entries.get_mut(category.key()) {
                entry.budget = Some(budget);
            }
            debug!(category = %category, budget = budget.amount(), "budget set");
        }

        Ok(category)
    }

    /// Insert a category without a budget if it is not known yet
    ///
    /// Returns the registered name, which keeps the spelling of the first
    /// registration.
    pub fn ensure(&mut self, name: &CategoryName) -> CategoryName {
        if let Some(entry) = self.entries.get(name.key()) {
            return entry.name.clone();
        }

        debug!(category = %name, "category created");
        self.order.push(name.key().to_string());
        self.entries.insert(
            name.key().to_string(),
            RegistryEntry {
                name: name.clone(),
                budget: None,
            },
        );
        name.clone()
    }

    /// Remove the budget from a category, returning the old one
    pub fn clear_budget(&mut self, name: &str) -> Option<f64> {
        let entry = self.entries.get_mut(&CategoryName::key_for(name))?;
        let previous = entry.budget.take();
        if previous.is_some() {
            debug!(category = %entry.name, "budget cleared");
        }
        previous.map(|b| b.amount())
    }

    /// Get the budget for a category, if any
    pub fn get_budget(&self, name: &str) -> Option<f64> {
        self.entries
            .get(&CategoryName::key_for(name))
            .and_then(|entry| entry.budget)
            .map(|budget| budget.amount())
    }

    /// Check if a category is registered
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&CategoryName::key_for(name))
    }

    /// Get the registered name for a raw name
    pub fn get(&self, name: &str) -> Option<&CategoryName> {
        self.entries
            .get(&CategoryName::key_for(name))
            .map(|entry| &entry.name)
    }

    /// Registered categories in first-registration order
    pub fn categories(&self) -> Vec<CategoryName> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no category is registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
