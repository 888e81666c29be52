pub mod analytics;
pub mod commands;
pub mod context;

use brewguide_core::config::{AppConfig, LoadOptions, LogFormat};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::analytics::TracingAnalyticsSink;
use crate::commands::community::CommunityAction;
use crate::commands::prefs::{PreferenceArgs, PrefsAction};

#[derive(Debug, Parser)]
#[command(
    name = "brewguide",
    about = "BrewGuide coffee recommendation CLI",
    long_about = "Recommend coffees, recipes, and equipment from your taste preferences, \
                  rank catalogs, and share brews with the community.",
    after_help = "Examples:\n  \
                  brewguide recommend --experience beginner --flavor chocolatey --save\n  \
                  brewguide explain coffee kenya-aa\n  \
                  brewguide doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend up to three coffees, recipes, and equipment plus brewing tips")]
    Recommend {
        #[command(flatten)]
        preferences: PreferenceArgs,
        #[arg(long, help = "Save the resulting preferences")]
        save: bool,
    },
    #[command(about = "Order a catalog (coffees, recipes, equipment) by personalization score")]
    Rank { kind: String },
    #[command(about = "Show which filter rules admit or reject one catalog item")]
    Explain { kind: String, id: String },
    #[command(about = "Show, edit, or reset saved preferences")]
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    #[command(about = "Summarize the loaded catalog and its fingerprint")]
    Catalog {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Share brews, comment, rate, and browse the community board")]
    Community {
        #[command(subcommand)]
        action: CommunityAction,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, catalog, storage, and recommendation determinism")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    let analytics = TracingAnalyticsSink;
    let result = match &cli.command {
        Command::Recommend { preferences, save } => {
            commands::recommend::run(preferences, *save, &analytics)
        }
        Command::Rank { kind } => commands::rank::run(kind),
        Command::Explain { kind, id } => commands::explain::run(kind, id),
        Command::Prefs { action } => commands::prefs::run(action, &analytics),
        Command::Catalog { json } => commands::catalog::run(*json),
        Command::Community { action } => commands::community::run(action),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(*json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so stdout carries only the command payload. `RUST_LOG`
/// overrides the configured level.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.trim().to_ascii_lowercase()));
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let initialized = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if initialized.is_err() {
        tracing::debug!(event_name = "cli.logging.already_initialized", "subscriber already set");
    }
}
