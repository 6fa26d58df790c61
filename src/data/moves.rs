use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Which stat pair a move scales with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageCategory {
    #[default]
    Physical,
    Special,
}

impl DamageCategory {
    /// Case-insensitive; anything other than "special" is physical.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("special") => DamageCategory::Special,
            _ => DamageCategory::Physical,
        }
    }
}

impl<'de> Deserialize<'de> for DamageCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(DamageCategory::parse(raw.as_deref()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub power: u32,
    #[serde(rename = "type", default)]
    pub move_type: String,
    #[serde(default)]
    pub category: DamageCategory,
}

impl MoveData {
    pub fn new(name: &str, power: u32, move_type: &str, category: DamageCategory) -> Self {
        Self {
            name: name.to_lowercase(),
            power,
            move_type: move_type.to_lowercase(),
            category,
        }
    }
}

/// Name-keyed move reference data.
#[derive(Clone, Debug, Default)]
pub struct MoveDatabase {
    moves: HashMap<String, MoveData>,
}

impl MoveDatabase {
    pub fn new() -> Self {
        Self {
            moves: HashMap::new(),
        }
    }

    pub fn load_default() -> Result<Self, serde_yaml::Error> {
        const DEFAULT_MOVES_YAML: &str = include_str!("../../data/moves.yaml");
        Self::load_from_yaml_str(DEFAULT_MOVES_YAML)
    }

    pub fn insert(&mut self, mut move_data: MoveData) {
        move_data.name = move_data.name.to_lowercase();
        self.moves.insert(move_data.name.clone(), move_data);
    }

    pub fn get(&self, move_name: &str) -> Option<&MoveData> {
        self.moves.get(&move_name.to_lowercase())
    }

    pub fn as_map(&self) -> &HashMap<String, MoveData> {
        &self.moves
    }

    /// Accepts either a mapping keyed by move name or a plain sequence.
    pub fn load_from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut db = Self::new();
        if let Ok(map) = serde_yaml::from_str::<HashMap<String, MoveData>>(yaml) {
            for (key, mut move_data) in map {
                if move_data.name.is_empty() {
                    move_data.name = key;
                }
                db.insert(move_data);
            }
            return Ok(db);
        }

        let list: Vec<MoveData> = serde_yaml::from_str(yaml)?;
        for move_data in list {
            db.insert(move_data);
        }
        Ok(db)
    }

    pub fn load_from_yaml_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let db = Self::load_from_yaml_str(&content)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_fall_back_to_physical() {
        assert_eq!(DamageCategory::parse(Some("SPECIAL")), DamageCategory::Special);
        assert_eq!(DamageCategory::parse(Some("status")), DamageCategory::Physical);
        assert_eq!(DamageCategory::parse(None), DamageCategory::Physical);
    }

    #[test]
    fn yaml_entries_take_their_name_from_the_key() {
        let yaml = "Flamethrower:\n  power: 90\n  type: fire\n  category: special\nsplash:\n  type: normal\n  category: ~\n";
        let db = MoveDatabase::load_from_yaml_str(yaml).expect("parse moves");
        let flamethrower = db.get("flamethrower").expect("flamethrower");
        assert_eq!(flamethrower.power, 90);
        assert_eq!(flamethrower.category, DamageCategory::Special);
        let splash = db.get("SPLASH").expect("splash");
        assert_eq!(splash.power, 0);
        assert_eq!(splash.category, DamageCategory::Physical);
    }
}
