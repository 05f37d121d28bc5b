/// Request-scoped orchestration: resolve a typed name, then enrich its
/// position in the evolution chain
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::api::{DataSource, PokemonRecord};
use crate::chain::{enrich, title_case, ChainNode, EvolutionOption};
use crate::matcher::resolver::{resolve, Resolution};
use crate::{PokevoError, Result};

/// Focal species summary shown alongside the evolution lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesSummary {
    pub name: String,
    pub sprite: Option<String>,
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatValue {
    pub name: String,
    pub base: u32,
}

impl SpeciesSummary {
    fn from_record(record: &PokemonRecord) -> Self {
        Self {
            name: title_case(&record.name),
            sprite: record.sprites.front_default.clone(),
            stats: record
                .stats
                .iter()
                .map(|s| StatValue {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                })
                .collect(),
        }
    }
}

/// The full result of one resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub resolution: Resolution,
    pub focal: SpeciesSummary,
    pub previous: Vec<EvolutionOption>,
    pub next: Vec<EvolutionOption>,
}

/// A session over one DataSource. The name catalog is fetched on the first
/// resolution and shared read-only by everything after it; concurrent
/// resolutions on the same session never re-fetch it.
pub struct Session<S: DataSource> {
    source: S,
    catalog: OnceCell<Vec<String>>,
}

impl<S: DataSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The canonical name catalog, loaded once per session
    pub async fn catalog(&self) -> Result<&[String]> {
        let names = self
            .catalog
            .get_or_try_init(|| self.source.fetch_name_catalog())
            .await?;
        Ok(names.as_slice())
    }

    /// Resolve a typed name without fetching anything downstream
    pub async fn resolve_name(&self, input: &str) -> Result<Resolution> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PokevoError::EmptyInput);
        }
        let catalog = self.catalog().await?;
        Ok(resolve(trimmed, catalog))
    }

    /// Resolve a typed name and build the full lookup: focal summary plus
    /// ordered previous/next evolution options with sprites.
    pub async fn resolve_and_enrich(&self, input: &str) -> Result<Lookup> {
        let resolution = self.resolve_name(input).await?;
        let canonical = match resolution.canonical() {
            Some(name) => name.to_string(),
            None => return Err(PokevoError::Unresolved(input.trim().to_lowercase())),
        };

        let record = self.source.fetch_pokemon(&canonical).await?;
        let species = self.source.fetch_species(&record.species.url).await?;
        let document = self
            .source
            .fetch_evolution_chain(&species.evolution_chain.url)
            .await?;

        let tree = ChainNode::from_document(&document);
        let (previous, next) = enrich(&tree, &canonical, &self.source)
            .await
            .ok_or_else(|| {
                PokevoError::MalformedChain(format!(
                    "species '{}' missing from its own evolution chain",
                    canonical
                ))
            })?;

        Ok(Lookup {
            resolution,
            focal: SpeciesSummary::from_record(&record),
            previous,
            next,
        })
    }

    /// Fetch the evolution tree for a resolved name, without sprites
    pub async fn chain_for(&self, canonical: &str) -> Result<ChainNode> {
        let record = self.source.fetch_pokemon(canonical).await?;
        let species = self.source.fetch_species(&record.species.url).await?;
        let document = self
            .source
            .fetch_evolution_chain(&species.evolution_chain.url)
            .await?;
        Ok(ChainNode::from_document(&document))
    }
}
