pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pokevo",
    version,
    about = "Fuzzy Pokémon lookup and evolution chain explorer",
    long_about = "Pokevo resolves a typed Pokémon name against the PokéAPI catalog, tolerating \
                  typos via edit-distance matching, then walks the species' evolution chain to \
                  show where it came from and what it can become."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Default log level implied by repeated -v flags; the POKEVO_LOG
    /// environment variable takes precedence over this
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a Pokémon and its previous/next evolutions
    Search(commands::search::SearchArgs),

    /// Print a species' whole evolution family as a tree
    Chain(commands::chain::ChainArgs),

    /// List the name catalog used for fuzzy matching
    Names(commands::names::NamesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flags_raise_default_log_level() {
        let cli = Cli::try_parse_from(["pokevo", "search", "eevee"]).unwrap();
        assert_eq!(cli.log_level(), "info");

        let cli = Cli::try_parse_from(["pokevo", "-v", "search", "eevee"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["pokevo", "-vv", "search", "eevee"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }
}
