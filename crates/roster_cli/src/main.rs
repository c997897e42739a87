//! Roster CLI.
//!
//! # Responsibility
//! - Open (and migrate) a roster database from the command line.
//! - Expose a few read/seed operations for local sanity checks.
//! - Compute salary slips.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - employee, student and location records", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "ROSTER_DB", default_value = "roster.db")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error); needs --log-dir
    #[arg(long, global = true, env = "ROSTER_LOG_LEVEL", requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "ROSTER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print core health-check and version
    Ping,
    /// Open the database and apply pending migrations
    Migrate,
    /// Location hierarchy operations
    Location(commands::location::LocationArgs),
    /// Student operations
    Students(commands::students::StudentsArgs),
    /// Salary computations (no database access)
    Payroll(commands::payroll::PayrollArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(roster_core::default_log_level());
        if let Err(err) = roster_core::init_logging(level, log_dir) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Ping => {
            println!("roster_core ping={}", roster_core::ping());
            println!("roster_core version={}", roster_core::core_version());
            Ok(())
        }
        Commands::Migrate => commands::migrate(&cli.db),
        Commands::Location(args) => commands::location::execute(&cli.db, args),
        Commands::Students(args) => commands::students::execute(&cli.db, args),
        Commands::Payroll(args) => commands::payroll::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
