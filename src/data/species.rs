use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(alias = "special-attack")]
    pub special_attack: u32,
    #[serde(alias = "special-defense")]
    pub special_defense: u32,
    pub speed: u32,
}

/// Hydrated creature attributes as handed out by a data provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub stats: Stats,
    #[serde(default)]
    pub moves: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CreatureDatabase {
    creatures: HashMap<String, CreatureData>,
}

impl CreatureDatabase {
    pub fn new() -> Self {
        Self {
            creatures: HashMap::new(),
        }
    }

    pub fn insert(&mut self, data: CreatureData) {
        self.creatures.insert(data.name.to_lowercase(), data);
    }

    pub fn get(&self, name: &str) -> Option<&CreatureData> {
        self.creatures.get(&name.to_lowercase())
    }

    pub fn as_map(&self) -> &HashMap<String, CreatureData> {
        &self.creatures
    }

    /// Accepts `{"creatures": {...}}`, a bare name-keyed object, or an array.
    pub fn load_from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        let inner = match value.as_object().and_then(|obj| obj.get("creatures")) {
            Some(inner) => inner.clone(),
            None => value,
        };

        let entries: Vec<CreatureData> = if inner.is_array() {
            serde_json::from_value(inner)?
        } else {
            let map: HashMap<String, CreatureData> = serde_json::from_value(inner)?;
            map.into_values().collect()
        };

        let mut db = Self::new();
        for data in entries {
            db.insert(data);
        }
        Ok(db)
    }

    pub fn load_default() -> Result<Self, serde_json::Error> {
        const DEFAULT_SPECIES_JSON: &str = include_str!("../../data/species.json");
        Self::load_from_json_str(DEFAULT_SPECIES_JSON)
    }
}
