use clap::Args;
use colored::*;

use crate::api::PokeApiClient;
use crate::matcher::resolver::Resolution;
use crate::session::{Lookup, Session};

#[derive(Args)]
pub struct SearchArgs {
    /// Pokémon name to look up (typos within edit distance 3 are corrected)
    pub name: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// PokéAPI endpoint (for testing/mirrors)
    #[arg(long, default_value = crate::api::pokeapi::DEFAULT_BASE_URL, hide = true)]
    pub api: String,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let session = Session::new(PokeApiClient::new(&args.api)?);
    let lookup = runtime.block_on(session.resolve_and_enrich(&args.name))?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&lookup)?),
        _ => print_text(&lookup),
    }

    Ok(())
}

fn print_text(lookup: &Lookup) {
    if let Resolution::Corrected { matched, .. } = &lookup.resolution {
        println!(
            "{}",
            format!("Did you mean {}?", crate::chain::title_case(matched)).yellow()
        );
    }

    println!("\n{}", lookup.focal.name.bold().cyan());
    if let Some(sprite) = &lookup.focal.sprite {
        println!("  {} {}", "sprite:".dimmed(), sprite);
    }
    for stat in &lookup.focal.stats {
        println!("  {}: {}", crate::chain::title_case(&stat.name), stat.base);
    }

    if !lookup.previous.is_empty() {
        println!("\n{}", "Previous Evolutions:".bold());
        for option in &lookup.previous {
            print_option(option);
        }
    }

    if !lookup.next.is_empty() {
        println!("\n{}", "Possible Evolutions:".bold());
        for option in &lookup.next {
            print_option(option);
        }
    }

    if lookup.previous.is_empty() && lookup.next.is_empty() {
        println!("\n{}", "This species neither evolves from nor into anything.".dimmed());
    }
}

fn print_option(option: &crate::chain::EvolutionOption) {
    let sprite = option
        .sprite
        .as_deref()
        .unwrap_or("(no sprite)");
    println!(
        "  {} {} {}",
        option.name.green(),
        format!("[{}]", option.method).italic(),
        sprite.dimmed()
    );
}
