//! Batting Order CLI
//!
//! Interactive form, one-shot order generation and the JSON API.

use anyhow::{Context, Result};
use bo_cli::commands::{read_request, run_api, run_generate, validate_names};
use bo_cli::config::{RunConfig, SEED_ENV};
use bo_cli::logging::init_tracing;
use bo_cli::FormSession;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batting-order", version)]
#[command(about = "Generate random batting orders for your cricket team", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one order from a comma-separated name list
    Generate {
        /// Player names in slot order, e.g. "Alice,Bob,Carol"
        #[arg(long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Seed for a reproducible order
        #[arg(long, env = SEED_ENV)]
        seed: Option<u64>,

        /// Print the order as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Fill in the form line by line
    Interactive {
        /// Seed for reproducible orders
        #[arg(long, env = SEED_ENV)]
        seed: Option<u64>,
    },

    /// Answer an OrderRequest JSON document
    Api {
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { names, seed, json } => {
            if let Err(message) = validate_names(&names) {
                Cli::command()
                    .error(ErrorKind::ValueValidation, message)
                    .exit();
            }
            let config = RunConfig::new(seed, json);
            run_generate(&names, &config, &mut io::stdout())?;
        }

        Commands::Interactive { seed } => {
            let config = RunConfig::new(seed, false);
            let mut session = FormSession::new(config.draw());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session
                .run(stdin.lock(), &mut stdout)
                .context("Form session failed")?;
        }

        Commands::Api { input } => {
            let request = read_request(input.as_deref())?;
            run_api(&request, &mut io::stdout())?;
        }
    }

    Ok(())
}
