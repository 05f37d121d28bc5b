/// PokéAPI client for name catalog, species, chain, and sprite fetches
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ChainDocument, DataSource, NameIndex, PokemonRecord, SpeciesRecord};
use crate::{PokevoError, Result};

/// Default public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Catalog page size; large enough to cover the full species list in one call
const CATALOG_LIMIT: usize = 10000;

/// PokéAPI client
pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    /// Create a new client against a base URL (override for testing/mirrors)
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| PokevoError::Upstream(format!("invalid API base URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Pokevo/1.0")
            .build()
            .map_err(|e| PokevoError::Upstream(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch and decode a JSON document. Network and decode failures are both
    /// reported as upstream unavailability.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PokevoError::Upstream(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(PokevoError::Upstream(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PokevoError::Upstream(format!("decoding {} failed: {}", url, e)))
    }

    fn spinner(message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[async_trait::async_trait]
impl DataSource for PokeApiClient {
    async fn fetch_name_catalog(&self) -> Result<Vec<String>> {
        let url = format!("{}/pokemon?limit={}", self.base_url, CATALOG_LIMIT);

        let pb = Self::spinner("Loading name catalog...".to_string());
        let index: NameIndex = self.get_json(&url).await?;
        pb.finish_and_clear();

        tracing::debug!(count = index.results.len(), "catalog loaded");
        Ok(index
            .results
            .into_iter()
            .map(|e| e.name.to_lowercase())
            .collect())
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonRecord> {
        let name = name.to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let pb = Self::spinner(format!("Loading {}...", name));
        let record = self.get_json(&url).await;
        pb.finish_and_clear();
        record
    }

    async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord> {
        let pb = Self::spinner("Loading species record...".to_string());
        let record = self.get_json(url).await;
        pb.finish_and_clear();
        record
    }

    async fn fetch_evolution_chain(&self, url: &str) -> Result<ChainDocument> {
        let pb = Self::spinner("Loading evolution chain...".to_string());
        let document = self.get_json(url).await;
        pb.finish_and_clear();
        document
    }

    // No spinner here: sprite lookups fan out concurrently and would fight
    // over the terminal
    async fn fetch_sprite(&self, name: &str) -> Option<String> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());
        match self.get_json::<PokemonRecord>(&url).await {
            Ok(record) => record.sprites.front_default,
            Err(e) => {
                tracing::debug!(name, error = %e, "sprite lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_carries_its_message() {
        let pb = PokeApiClient::spinner("Loading eevee...".to_string());
        assert_eq!(pb.message(), "Loading eevee...");
        pb.finish_and_clear();
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(PokeApiClient::new("not a url").is_err());
        assert!(PokeApiClient::new("https://pokeapi.co/api/v2").is_ok());
    }
}
