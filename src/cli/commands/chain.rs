use clap::Args;
use colored::*;

use crate::api::PokeApiClient;
use crate::chain::{describe, title_case, ChainNode, Direction};
use crate::session::Session;
use crate::PokevoError;

#[derive(Args)]
pub struct ChainArgs {
    /// Pokémon name whose evolution family to print
    pub name: String,

    /// PokéAPI endpoint (for testing/mirrors)
    #[arg(long, default_value = crate::api::pokeapi::DEFAULT_BASE_URL, hide = true)]
    pub api: String,
}

pub fn run(args: ChainArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let session = Session::new(PokeApiClient::new(&args.api)?);
    let (canonical, tree) = runtime.block_on(async {
        let resolution = session.resolve_name(&args.name).await?;
        let canonical = resolution
            .canonical()
            .ok_or_else(|| PokevoError::Unresolved(args.name.trim().to_lowercase()))?
            .to_string();
        let tree = session.chain_for(&canonical).await?;
        Ok::<_, PokevoError>((canonical, tree))
    })?;

    print_tree(&tree, &canonical, 0);
    Ok(())
}

fn print_tree(node: &ChainNode, highlight: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = title_case(&node.species);
    let label = if node.species == highlight {
        name.bold().cyan().to_string()
    } else {
        name.normal().to_string()
    };

    if depth == 0 {
        println!("{}{}", indent, label);
    } else {
        let method = describe(node.primary_condition(), Direction::Forward);
        println!("{}└─ {} {}", indent, label, format!("[{}]", method).dimmed());
    }

    for child in &node.evolves_to {
        print_tree(child, highlight, depth + 1);
    }
}
