use serde::{Deserialize, Serialize};
use std::fmt;

/// One acting turn: who hit whom, for how much, and what was left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub round: u32,
    pub attacker: String,
    pub defender: String,
    pub move_name: Option<String>,
    pub damage: u32,
    pub remaining_hp: u32,
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dealt {} damage to {}. Remaining HP: {}",
            self.attacker, self.damage, self.defender, self.remaining_hp
        )
    }
}

/// Where a battle stands after a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    Ongoing,
    Finished { winner: String },
}
