use anyhow::Result;
use clap::{Parser, Subcommand};

use weekly_tracker::cli::{handle_run_command, RunArgs};
use weekly_tracker::config::{paths::TrackerPaths, settings::Settings};
use weekly_tracker::logging::{init_tracing, LOG_ENV};

#[derive(Parser)]
#[command(
    name = "tracker",
    author = "Kaylee Beyene",
    version,
    about = "Weekly expense tracker with per-category budgets",
    long_about = "Records category-tagged expenses for the current week, keeps \
                  running totals against optional budgets, and warns as soon \
                  as a category reaches 90% of its budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of steps against a fresh week
    #[command(
        alias = "session",
        after_help = "Quote each step so its words stay together:\n  \
                      tracker run \"budget 50 Food\" \"add 12.50 Food\" summary\n\
                      Unquoted words are read as separate steps."
    )]
    Run(RunArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => {
            handle_run_command(&settings, &args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!(
                    "Default settings written to: {}",
                    paths.settings_file().display()
                );
            }
        }
        Some(Commands::Config) => {
            println!("Weekly Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log filter env:   {}", LOG_ENV);
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Progress bar length: {}", settings.progress_bar_length);
            println!(
                "  Default categories:  {}",
                settings.default_categories.join(", ")
            );
        }
        None => {
            println!("Weekly Tracker - expenses and budgets for the current week");
            println!();
            println!("Run 'tracker --help' for usage information.");
            println!("Run 'tracker run \"budget 50 Food\" \"add 12.50 Food\" summary' to try it.");
        }
    }

    Ok(())
}
