//! Wire shapes of the remote creature API and their normalisation into
//! [`CreatureData`] / [`MoveData`].
//!
//! Validation happens here, once, so nothing past the provider boundary ever
//! sees an untyped payload.

use serde::Deserialize;
use std::collections::HashMap;

use crate::core::factory::MAX_BATTLE_MOVES;
use crate::data::moves::{DamageCategory, MoveData};
use crate::data::species::{CreatureData, Stats};
use crate::error::ProviderError;

#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

impl PokemonResponse {
    pub fn into_creature_data(self) -> Result<CreatureData, ProviderError> {
        let mut slots = self.types;
        slots.sort_by_key(|slot| slot.slot);
        let types = slots
            .into_iter()
            .map(|slot| slot.type_ref.name.to_lowercase())
            .collect();

        let moves = self
            .moves
            .into_iter()
            .take(MAX_BATTLE_MOVES)
            .map(|entry| entry.move_ref.name.to_lowercase())
            .collect();

        let base: HashMap<String, u32> = self
            .stats
            .into_iter()
            .map(|entry| (entry.stat.name.to_lowercase(), entry.base_stat))
            .collect();
        let stat = |key: &str| {
            base.get(key)
                .copied()
                .ok_or_else(|| ProviderError::invalid_data(&self.name, format!("missing '{}' stat", key)))
        };
        let stats = Stats {
            hp: stat("hp")?,
            attack: stat("attack")?,
            defense: stat("defense")?,
            special_attack: stat("special-attack")?,
            special_defense: stat("special-defense")?,
            speed: stat("speed")?,
        };

        Ok(CreatureData {
            id: self.id,
            name: self.name.to_lowercase(),
            types,
            stats,
            moves,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MoveResponse {
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(rename = "type", default)]
    pub type_ref: Option<NamedResource>,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
}

impl MoveResponse {
    pub fn into_move_data(self) -> MoveData {
        MoveData {
            name: self.name.to_lowercase(),
            power: self.power.unwrap_or(0),
            move_type: self
                .type_ref
                .map(|t| t.name.to_lowercase())
                .unwrap_or_default(),
            category: DamageCategory::parse(self.damage_class.as_ref().map(|c| c.name.as_str())),
        }
    }
}

/// One page of `GET /pokemon?offset=..&limit=..`.
#[derive(Clone, Debug, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Lowercase creature name -> detail URL, built from the paginated listing.
#[derive(Clone, Debug, Default)]
pub struct PokemonIndex {
    urls: HashMap<String, String>,
}

impl PokemonIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, page: ListPage) {
        for resource in page.results {
            self.urls.insert(resource.name.to_lowercase(), resource.url);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.urls.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
