//! JSON-file stores.
//!
//! Layout under the base directory:
//! - `creatures/{name}.json`
//! - `battles/{id}.json`
//!
//! Writes go to a temp file first and are renamed into place.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::store::{check_battle, BattleRecord, BattleStore, CreatureInfo, CreatureStore, Result};

pub struct JsonFileStore {
    base_dir: PathBuf,
    // Serialises id allocation and writes.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(base_dir.join("creatures"))?;
        fs::create_dir_all(base_dir.join("battles"))?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn creature_path(&self, name: &str) -> Result<PathBuf> {
        if !is_file_name(name) {
            return Err(StoreError::InvalidRecord(format!("invalid creature name '{}'", name)));
        }
        Ok(self.base_dir.join("creatures").join(format!("{}.json", name)))
    }

    fn battle_path(&self, id: u64) -> PathBuf {
        self.base_dir.join("battles").join(format!("{}.json", id))
    }

    fn battle_ids(&self) -> Result<Vec<u64>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(self.base_dir.join("battles"))? {
            let path = entry?.path();
            let id = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|s| s.strip_suffix(".json"))
                .and_then(|s| s.parse::<u64>().ok());
            if let Some(id) = id {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

/// Names that map to a single file inside `creatures/`.
fn is_file_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(|c: char| c == '/' || c == '\\')
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

impl CreatureStore for JsonFileStore {
    fn find_by_name(&self, name: &str) -> Result<Option<CreatureInfo>> {
        let name = name.trim().to_lowercase();
        if !is_file_name(&name) {
            // Nothing could have been stored under it.
            return Ok(None);
        }
        read_json(&self.creature_path(&name)?)
    }

    fn create(&self, info: CreatureInfo) -> Result<CreatureInfo> {
        let info = info.normalized()?;
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let path = self.creature_path(&info.name)?;
        if path.exists() {
            return Err(StoreError::InvalidRecord(format!("creature '{}' already exists", info.name)));
        }
        write_json(&path, &info)?;
        Ok(info)
    }

    fn update(&self, info: CreatureInfo) -> Result<CreatureInfo> {
        let info = info.normalized()?;
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        write_json(&self.creature_path(&info.name)?, &info)?;
        Ok(info)
    }
}

impl BattleStore for JsonFileStore {
    fn save_battle(
        &self,
        participant1_id: u32,
        participant2_id: u32,
        winner: &str,
        battle_log: &[String],
    ) -> Result<BattleRecord> {
        check_battle(winner, battle_log)?;
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let id = self.battle_ids()?.last().copied().unwrap_or(0) + 1;
        let record = BattleRecord {
            id,
            participant1_id,
            participant2_id,
            winner: winner.to_string(),
            battle_log: battle_log.to_vec(),
        };
        write_json(&self.battle_path(id), &record)?;
        Ok(record)
    }

    fn get_battle(&self, id: u64) -> Result<Option<BattleRecord>> {
        read_json(&self.battle_path(id))
    }

    fn list_battles(&self) -> Result<Vec<BattleRecord>> {
        let mut records = Vec::new();
        for id in self.battle_ids()? {
            if let Some(record) = read_json(&self.battle_path(id))? {
                records.push(record);
            }
        }
        Ok(records)
    }
}
