//! Display formatting for terminal output
//!
//! Turns tracker results into the text a shell prints: summaries with
//! progress bars, budget alerts and confirmations.

pub mod category;
pub mod messages;
pub mod report;
pub mod summary;

pub use category::format_category_list;
pub use messages::{
    format_alert, format_budget_set, format_new_category, format_record_alert,
    format_record_confirmation, format_reset,
};
pub use report::format_money;
pub use summary::{format_summary, format_summary_line};
