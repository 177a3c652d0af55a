//! Roster CLI
//!
//! Command-line interface for Roster

use clap::{Parser, Subcommand, ValueEnum};
use roster_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - validated persons and person lists", long_about = None)]
struct Cli {
    /// Logging profile (RUST_LOG overrides the filter)
    #[arg(long, value_enum, global = true, default_value_t = LogProfile::Development)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay the scripted list walkthrough
    Demo(commands::demo::DemoArgs),
    /// Validate and render a single person
    Person(commands::person::PersonArgs),
    /// Generate random persons
    Random(commands::random::RandomArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::Person(args) => commands::person::execute(args),
        Commands::Random(args) => commands::random::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
