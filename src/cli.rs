//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use elfproef::output::OutputMode;

/// elfproef - eleven-test validation and generation of BSN identifiers
#[derive(Parser, Debug)]
#[command(
    name = "elfproef",
    version,
    about = "Eleven-test validation and generation of BSN identifiers",
    long_about = "Validate and generate identifiers under the eleven-test (elfproef).\n\n\
                  Candidates of 7 to 9 digits are weighted n..2 and -1 for the last digit;\n\
                  the weighted sum must be divisible by 11."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check candidates against the eleven-test (exit code 1 if any fails)
    Validate {
        /// Candidate identifiers, 7 to 9 digits each
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Generate valid 9-digit identifiers for test data
    Generate {
        /// How many identifiers to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render a log template with positional arguments ({0}, {1}, ...)
    Format {
        /// Message template
        template: String,

        /// Values for the positional placeholders
        args: Vec<String>,

        /// Caller name shown in the prefix
        #[arg(long, default_value = "cli")]
        caller: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate { candidates }) => commands::validate(&candidates, output_mode),
        Some(Command::Generate { count, seed }) => commands::generate(count, seed, output_mode),
        Some(Command::Format {
            template,
            args,
            caller,
        }) => commands::format(&template, &args, &caller, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("elfproef v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("elfproef v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'elfproef --help' for usage");
                println!("Run 'elfproef generate' for a test identifier");
            }
            Ok(())
        },
    }
}
