//! The data-provider capability and its implementations.
//!
//! - [`memory::InMemoryProvider`] serves bundled or hand-built reference data.
//! - [`http::HttpProvider`] talks to the remote REST API.
//! - [`cached::CachingProvider`] decorates any provider with name-keyed caches.

pub mod cached;
pub mod http;
pub mod memory;

use std::sync::Arc;

use crate::data::moves::MoveData;
use crate::data::species::CreatureData;
use crate::error::ProviderError;

pub use cached::CachingProvider;
pub use http::{HttpProvider, PokeApiClient};
pub use memory::InMemoryProvider;

/// Source of creature and move reference data.
///
/// Implementations return `ProviderError::NotFound` for unknown names and
/// never hand back partially validated payloads.
pub trait DataProvider: Send + Sync {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError>;

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError>;
}

impl<T: DataProvider + ?Sized> DataProvider for Arc<T> {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        (**self).fetch_creature(name)
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        (**self).fetch_move(name)
    }
}

impl<T: DataProvider + ?Sized> DataProvider for &T {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        (**self).fetch_creature(name)
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        (**self).fetch_move(name)
    }
}
