use serde::{Deserialize, Serialize};

/// A battle participant.
///
/// Built through [`crate::core::factory::create_creature`]; only `hp` changes
/// while a battle runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub moves: Vec<String>,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Creature {
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Subtracts at most the remaining hp and returns the amount applied.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    /// Restores starting hp so the creature can enter another battle.
    pub fn reset_hp(&mut self) {
        self.hp = self.max_hp;
    }
}
