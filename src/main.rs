use clap::Parser;
use colored::*;
use pokevo::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging: POKEVO_LOG overrides the level implied by -v flags
    let log_level = std::env::var("POKEVO_LOG").unwrap_or_else(|_| cli.log_level().to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<pokevo::PokevoError>() {
            Some(pokevo::PokevoError::EmptyInput) => 2,
            Some(pokevo::PokevoError::Unresolved(_)) => 3,
            Some(pokevo::PokevoError::Upstream(_)) => 4,
            Some(pokevo::PokevoError::MalformedChain(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Search(args) => pokevo::cli::commands::search::run(args),
        Commands::Chain(args) => pokevo::cli::commands::chain::run(args),
        Commands::Names(args) => pokevo::cli::commands::names::run(args),
    }
}
