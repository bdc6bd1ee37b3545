//! CLI command handlers
//!
//! This module bridges clap argument parsing with the tracker: it turns raw
//! text into numbers and names, runs the steps, and prints the results.

pub mod session;
pub mod step;

pub use session::{RunArgs, Session};
pub use step::{parse_amount, Step};

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::TrackerResult;

/// Handle `tracker run`
pub fn handle_run_command(settings: &Settings, args: &RunArgs) -> TrackerResult<()> {
    let steps = args.load_steps()?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if steps.is_empty() {
        writeln!(out, "No steps given. Try: tracker run \"budget 50 Food\" \"add 12.50 Food\" summary")?;
        return Ok(());
    }

    let mut session = Session::new(settings);
    session.run_all(&steps, &mut out, &mut err)?;
    out.flush()?;
    Ok(())
}
