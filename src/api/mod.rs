/// PokéAPI wire records and the DataSource capability the core consumes
pub mod pokeapi;

use async_trait::async_trait;
use serde::Deserialize;

use crate::Result;

pub use pokeapi::PokeApiClient;

/// A named entry inside a larger record (stat, species, trigger, item)
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// A record that only carries a follow-up URL
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

/// Paged name index returned by `/pokemon?limit=N`
#[derive(Debug, Deserialize)]
pub struct NameIndex {
    pub results: Vec<NamedEntry>,
}

/// The subset of a Pokémon record the explorer needs
#[derive(Debug, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub stats: Vec<StatEntry>,
    pub sprites: SpriteSet,
    pub species: ResourceRef,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedEntry,
}

#[derive(Debug, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

/// Species record; only the evolution-chain reference matters here
#[derive(Debug, Deserialize)]
pub struct SpeciesRecord {
    pub evolution_chain: ResourceRef,
}

/// Top-level evolution chain document
#[derive(Debug, Deserialize)]
pub struct ChainDocument {
    pub chain: ChainLink,
}

/// One nested link of the chain document. `evolution_details` describe how the
/// parent link reaches this one; the root link has none.
#[derive(Debug, Deserialize)]
pub struct ChainLink {
    pub species: NamedEntry,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetailRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EvolutionDetailRecord {
    pub min_level: Option<u32>,
    pub trigger: NamedEntry,
    pub item: Option<NamedEntry>,
}

/// Upstream data access. The core orchestrates against this trait; the
/// concrete PokéAPI client lives in `pokeapi` and tests substitute stubs.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full list of canonical species names, lower-cased
    async fn fetch_name_catalog(&self) -> Result<Vec<String>>;

    /// Pokémon record for a canonical name (focal summary + species ref)
    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonRecord>;

    /// Species record holding the evolution-chain reference
    async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord>;

    /// The nested chain document for an evolution-chain reference
    async fn fetch_evolution_chain(&self, url: &str) -> Result<ChainDocument>;

    /// Best-effort front sprite lookup; absence is not an error
    async fn fetch_sprite(&self, name: &str) -> Option<String>;
}
