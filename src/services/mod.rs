//! Service layer for the weekly tracker
//!
//! The service layer holds the tracking logic: the category registry, the
//! spend ledger, budget evaluation, and the [`Tracker`] that owns them.

pub mod evaluator;
pub mod ledger;
pub mod registry;
pub mod tracker;

pub use ledger::Ledger;
pub use registry::CategoryRegistry;
pub use tracker::Tracker;
