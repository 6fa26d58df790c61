//! In-memory stores for tests and offline runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::error::StoreError;
use crate::store::{check_battle, BattleRecord, BattleStore, CreatureInfo, CreatureStore, Result};

pub struct InMemoryStore {
    creatures: RwLock<HashMap<String, CreatureInfo>>,
    battles: RwLock<BTreeMap<u64, BattleRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            creatures: RwLock::new(HashMap::new()),
            battles: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatureStore for InMemoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<CreatureInfo>> {
        let creatures = self.creatures.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(creatures.get(&name.trim().to_lowercase()).cloned())
    }

    fn create(&self, info: CreatureInfo) -> Result<CreatureInfo> {
        let info = info.normalized()?;
        let mut creatures = self.creatures.write().map_err(|_| StoreError::LockPoisoned)?;
        if creatures.contains_key(&info.name) {
            return Err(StoreError::InvalidRecord(format!("creature '{}' already exists", info.name)));
        }
        creatures.insert(info.name.clone(), info.clone());
        Ok(info)
    }

    fn update(&self, info: CreatureInfo) -> Result<CreatureInfo> {
        let info = info.normalized()?;
        let mut creatures = self.creatures.write().map_err(|_| StoreError::LockPoisoned)?;
        creatures.insert(info.name.clone(), info.clone());
        Ok(info)
    }
}

impl BattleStore for InMemoryStore {
    fn save_battle(
        &self,
        participant1_id: u32,
        participant2_id: u32,
        winner: &str,
        battle_log: &[String],
    ) -> Result<BattleRecord> {
        check_battle(winner, battle_log)?;
        let mut battles = self.battles.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = battles.keys().next_back().copied().unwrap_or(0) + 1;
        let record = BattleRecord {
            id,
            participant1_id,
            participant2_id,
            winner: winner.to_string(),
            battle_log: battle_log.to_vec(),
        };
        battles.insert(id, record.clone());
        Ok(record)
    }

    fn get_battle(&self, id: u64) -> Result<Option<BattleRecord>> {
        let battles = self.battles.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(battles.get(&id).cloned())
    }

    fn list_battles(&self) -> Result<Vec<BattleRecord>> {
        let battles = self.battles.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(battles.values().cloned().collect())
    }
}
