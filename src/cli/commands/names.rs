use clap::Args;
use colored::*;

use crate::api::PokeApiClient;
use crate::session::Session;

#[derive(Args)]
pub struct NamesArgs {
    /// Only show names containing this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Maximum number of names to print (0 = all)
    #[arg(long, default_value = "0")]
    pub limit: usize,

    /// PokéAPI endpoint (for testing/mirrors)
    #[arg(long, default_value = crate::api::pokeapi::DEFAULT_BASE_URL, hide = true)]
    pub api: String,
}

pub fn run(args: NamesArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let session = Session::new(PokeApiClient::new(&args.api)?);
    let catalog: Vec<String> = runtime.block_on(async {
        session.catalog().await.map(|names| names.to_vec())
    })?;

    let filter = args.filter.as_deref().unwrap_or("").to_lowercase();
    let matching: Vec<&String> = catalog
        .iter()
        .filter(|name| filter.is_empty() || name.contains(&filter))
        .collect();

    let shown = if args.limit > 0 {
        &matching[..args.limit.min(matching.len())]
    } else {
        &matching[..]
    };

    for name in shown {
        println!("{}", name);
    }
    eprintln!(
        "{}",
        format!("{} of {} names", shown.len(), catalog.len()).dimmed()
    );

    Ok(())
}
