use crate::core::state::Creature;
use crate::data::species::CreatureData;
use crate::data::type_chart::is_known_type;
use crate::error::CreatureError;

/// Moves beyond this many are dropped when a creature enters a battle.
pub const MAX_BATTLE_MOVES: usize = 4;

/// Lowercases the names and checks there are 1 or 2 known types.
pub fn validate_types(name: &str, types: &[String]) -> Result<Vec<String>, CreatureError> {
    if types.is_empty() || types.len() > 2 {
        return Err(CreatureError::TypeCount {
            name: name.to_string(),
            count: types.len(),
        });
    }
    types
        .iter()
        .map(|type_name| {
            let normalized = type_name.trim().to_lowercase();
            if is_known_type(&normalized) {
                Ok(normalized)
            } else {
                Err(CreatureError::UnknownType {
                    name: name.to_string(),
                    type_name: type_name.clone(),
                })
            }
        })
        .collect()
}

/// Builds a fresh battle participant from provider data.
///
/// Defense stats of zero are rejected here so damage never divides by zero.
pub fn create_creature(data: &CreatureData) -> Result<Creature, CreatureError> {
    let name = data.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(CreatureError::EmptyName);
    }
    let types = validate_types(&name, &data.types)?;

    let stats = &data.stats;
    if stats.defense == 0 {
        return Err(CreatureError::ZeroDefense {
            name,
            stat: "defense",
        });
    }
    if stats.special_defense == 0 {
        return Err(CreatureError::ZeroDefense {
            name,
            stat: "special_defense",
        });
    }

    let moves = data
        .moves
        .iter()
        .take(MAX_BATTLE_MOVES)
        .map(|m| m.trim().to_lowercase())
        .collect();

    Ok(Creature {
        id: data.id,
        name,
        types,
        moves,
        hp: stats.hp,
        max_hp: stats.hp,
        attack: stats.attack,
        defense: stats.defense,
        special_attack: stats.special_attack,
        special_defense: stats.special_defense,
        speed: stats.speed,
    })
}
