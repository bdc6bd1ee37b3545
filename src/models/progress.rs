//! Progress bar model
//!
//! A fixed-length bar showing how much of a budget has been spent. The bar
//! and its percentage label both stop at 100%, even though the spend ratio
//! itself is not capped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of segments in a progress bar
pub const DEFAULT_BAR_LENGTH: usize = 20;

const FILLED: char = '█';
const EMPTY: char = '░';

/// A budget progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    /// Filled segments, at most `length`
    pub filled: usize,

    /// Total segments
    pub length: usize,

    /// Percentage shown next to the bar, capped at 100
    pub percent: f64,
}

impl ProgressBar {
    /// Build a bar for a spend ratio (`spent / budget`)
    pub fn new(progress: f64, length: usize) -> Self {
        let segments = (progress * length as f64).floor();
        let filled = if segments > 0.0 {
            (segments as usize).min(length)
        } else {
            0
        };

        Self {
            filled,
            length,
            percent: (progress * 100.0).min(100.0),
        }
    }

    /// Empty segments
    pub fn empty(&self) -> usize {
        self.length - self.filled
    }

    /// The percentage label, rounded to a whole number
    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: String = std::iter::repeat(FILLED).take(self.filled).collect();
        let empty: String = std::iter::repeat(EMPTY).take(self.empty()).collect();
        write!(f, "[{}{}] {}", filled, empty, self.label())
    }
}
