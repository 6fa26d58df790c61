//! Provider over in-process reference data, for offline runs and tests.

use crate::data::moves::{MoveData, MoveDatabase};
use crate::data::species::{CreatureData, CreatureDatabase};
use crate::error::{ProviderError, ResourceKind};
use crate::provider::DataProvider;

#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    creatures: CreatureDatabase,
    moves: MoveDatabase,
}

impl InMemoryProvider {
    pub fn new(creatures: CreatureDatabase, moves: MoveDatabase) -> Self {
        Self { creatures, moves }
    }

    /// Loads the creature and move data bundled with the crate.
    pub fn load_default() -> Result<Self, ProviderError> {
        let creatures = CreatureDatabase::load_default()
            .map_err(|e| ProviderError::invalid_data("species.json", e.to_string()))?;
        let moves = MoveDatabase::load_default()
            .map_err(|e| ProviderError::invalid_data("moves.yaml", e.to_string()))?;
        Ok(Self::new(creatures, moves))
    }

    pub fn with_creature(mut self, data: CreatureData) -> Self {
        self.creatures.insert(data);
        self
    }

    pub fn with_move(mut self, data: MoveData) -> Self {
        self.moves.insert(data);
        self
    }

    pub fn creatures(&self) -> &CreatureDatabase {
        &self.creatures
    }

    pub fn moves(&self) -> &MoveDatabase {
        &self.moves
    }
}

impl DataProvider for InMemoryProvider {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        self.creatures
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(ResourceKind::Creature, name.to_lowercase()))
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        self.moves
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(ResourceKind::Move, name.to_lowercase()))
    }
}
