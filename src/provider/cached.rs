use crate::cache::Cache;
use crate::data::moves::MoveData;
use crate::data::species::CreatureData;
use crate::error::ProviderError;
use crate::provider::DataProvider;

/// Wraps a provider and remembers every successful lookup by name.
///
/// Failures are not cached, so a later call retries the inner provider.
#[derive(Debug)]
pub struct CachingProvider<P> {
    inner: P,
    creatures: Cache<CreatureData>,
    moves: Cache<MoveData>,
}

impl<P: DataProvider> CachingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_caches(inner, Cache::new(), Cache::new())
    }

    pub fn with_caches(inner: P, creatures: Cache<CreatureData>, moves: Cache<MoveData>) -> Self {
        Self {
            inner,
            creatures,
            moves,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn creature_cache(&self) -> &Cache<CreatureData> {
        &self.creatures
    }

    pub fn move_cache(&self) -> &Cache<MoveData> {
        &self.moves
    }
}

impl<P: DataProvider> DataProvider for CachingProvider<P> {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        if let Some(hit) = self.creatures.get(name) {
            tracing::debug!("creature cache hit for '{}'", name);
            return Ok(hit);
        }
        let data = self.inner.fetch_creature(name)?;
        self.creatures.set(name, data.clone());
        Ok(data)
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        if let Some(hit) = self.moves.get(name) {
            tracing::debug!("move cache hit for '{}'", name);
            return Ok(hit);
        }
        let data = self.inner.fetch_move(name)?;
        self.moves.set(name, data.clone());
        Ok(data)
    }
}
