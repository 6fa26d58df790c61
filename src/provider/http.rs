//! Client for the remote creature REST API.
//!
//! [`PokeApiClient`] is async, like the rest of the crate's HTTP code.
//! [`HttpProvider`] adapts it to the blocking [`DataProvider`] capability by
//! owning a small tokio runtime; it must not be called from inside another
//! tokio runtime.

use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::data::moves::MoveData;
use crate::data::pokeapi::{ListPage, MoveResponse, PokemonIndex, PokemonResponse};
use crate::data::species::CreatureData;
use crate::error::{ProviderError, ResourceKind};
use crate::provider::DataProvider;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub struct PokeApiClient {
    base_url: String,
    index_limit: u32,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration, index_limit: u32) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::failure(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            index_limit: index_limit.max(1),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn fetch_pokemon(&self, name: &str) -> Result<PokemonResponse, ProviderError> {
        let url = self.endpoint(&format!("pokemon/{}", name.to_lowercase()));
        self.get_json(&url, Some((ResourceKind::Creature, name))).await
    }

    pub async fn fetch_move(&self, name: &str) -> Result<MoveResponse, ProviderError> {
        let url = self.endpoint(&format!("move/{}", name.to_lowercase()));
        self.get_json(&url, Some((ResourceKind::Move, name))).await
    }

    /// Walks the paginated listing and collects every name -> URL pair.
    pub async fn fetch_index(&self) -> Result<PokemonIndex, ProviderError> {
        let mut index = PokemonIndex::new();
        let mut next = Some(self.endpoint(&format!("pokemon?offset=0&limit={}", self.index_limit)));
        while let Some(url) = next {
            let page: ListPage = self.get_json(&url, None).await?;
            next = page.next.clone();
            index.extend(page);
        }
        tracing::info!("indexed {} creatures from {}", index.len(), self.base_url);
        Ok(index)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Option<(ResourceKind, &str)>,
    ) -> Result<T, ProviderError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                format!("API request failed: {}", e)
            };
            ProviderError::Failure {
                message,
                url: Some(url.to_string()),
                status: None,
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some((kind, name)) = resource {
                return Err(ProviderError::not_found(kind, name.to_lowercase()));
            }
        }
        if !status.is_success() {
            return Err(ProviderError::Failure {
                message: format!("API request failed with status {}", status),
                url: Some(url.to_string()),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| ProviderError::Failure {
            message: format!("failed to read response body: {}", e),
            url: Some(url.to_string()),
            status: Some(status.as_u16()),
        })?;
        let label = resource.map(|(_, name)| name).unwrap_or(url);
        serde_json::from_str(&body).map_err(|e| ProviderError::invalid_data(label, e.to_string()))
    }
}

/// Blocking [`DataProvider`] backed by [`PokeApiClient`].
///
/// The name index is fetched on the first creature lookup and reused after
/// that; unknown names are rejected without a detail request.
pub struct HttpProvider {
    client: PokeApiClient,
    runtime: tokio::runtime::Runtime,
    index: Mutex<Option<Arc<PokemonIndex>>>,
}

impl HttpProvider {
    pub fn new(client: PokeApiClient) -> Result<Self, ProviderError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::failure(format!("failed to start runtime: {}", e)))?;
        Ok(Self {
            client,
            runtime,
            index: Mutex::new(None),
        })
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    fn index(&self) -> Result<Arc<PokemonIndex>, ProviderError> {
        let mut guard = self
            .index
            .lock()
            .map_err(|_| ProviderError::failure("creature index lock poisoned"))?;
        if let Some(index) = guard.as_ref() {
            return Ok(Arc::clone(index));
        }
        let index = Arc::new(self.runtime.block_on(self.client.fetch_index())?);
        *guard = Some(Arc::clone(&index));
        Ok(index)
    }
}

impl DataProvider for HttpProvider {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        let name = name.trim().to_lowercase();
        if !self.index()?.contains(&name) {
            return Err(ProviderError::not_found(ResourceKind::Creature, name));
        }
        let response = self.runtime.block_on(self.client.fetch_pokemon(&name))?;
        response.into_creature_data()
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        let name = name.trim().to_lowercase();
        let response = self.runtime.block_on(self.client.fetch_move(&name))?;
        Ok(response.into_move_data())
    }
}
