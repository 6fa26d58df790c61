//! Persistence contracts for creature lookups and battle results.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::core::factory::validate_types;
use crate::data::species::{CreatureData, Stats};
use crate::error::StoreError;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Stored view of a creature: identity, types and base stats, no moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureInfo {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub stats: Stats,
}

impl CreatureInfo {
    pub fn from_creature_data(data: &CreatureData) -> Self {
        Self {
            id: data.id,
            name: data.name.to_lowercase(),
            types: data.types.clone(),
            stats: data.stats.clone(),
        }
    }

    /// Lowercases the name and types, rejecting anything other than 1-2 known types.
    pub fn normalized(mut self) -> Result<Self> {
        self.name = self.name.trim().to_lowercase();
        if self.name.is_empty() {
            return Err(StoreError::InvalidRecord("creature name must not be empty".to_string()));
        }
        self.types = validate_types(&self.name, &self.types)
            .map_err(|e| StoreError::InvalidRecord(e.to_string()))?;
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub id: u64,
    pub participant1_id: u32,
    pub participant2_id: u32,
    pub winner: String,
    pub battle_log: Vec<String>,
}

pub(crate) fn check_battle(winner: &str, log: &[String]) -> Result<()> {
    if winner.trim().is_empty() {
        return Err(StoreError::InvalidRecord("battle winner must not be empty".to_string()));
    }
    if log.is_empty() {
        return Err(StoreError::InvalidRecord("battle log must not be empty".to_string()));
    }
    Ok(())
}

pub trait CreatureStore: Send + Sync {
    /// Case-insensitive lookup.
    fn find_by_name(&self, name: &str) -> Result<Option<CreatureInfo>>;

    /// Fails if a creature with the same name is already stored.
    fn create(&self, info: CreatureInfo) -> Result<CreatureInfo>;

    /// Inserts or replaces.
    fn update(&self, info: CreatureInfo) -> Result<CreatureInfo>;
}

pub trait BattleStore: Send + Sync {
    fn save_battle(
        &self,
        participant1_id: u32,
        participant2_id: u32,
        winner: &str,
        battle_log: &[String],
    ) -> Result<BattleRecord>;

    fn get_battle(&self, id: u64) -> Result<Option<BattleRecord>>;

    /// Ordered by id.
    fn list_battles(&self) -> Result<Vec<BattleRecord>>;
}
