use crate::core::damage::resolve_attack;
use crate::core::events::{BattleStatus, TurnRecord};
use crate::core::moves::MoveResolver;
use crate::core::state::Creature;
use crate::data::type_chart::TypeChart;
use crate::error::BattleError;
use crate::provider::DataProvider;

#[derive(Clone, Debug, Default)]
pub struct BattleOptions {
    /// Optional round cap. `None` (the default) runs until a creature
    /// faints, which always happens once the stalemate check has passed.
    pub max_rounds: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BattleOutcome {
    pub winner: String,
    pub log: Vec<String>,
    pub turns: Vec<TurnRecord>,
    pub rounds: u32,
}

#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    pub type_chart: TypeChart,
    pub options: BattleOptions,
}

impl BattleEngine {
    pub fn new(type_chart: TypeChart, options: BattleOptions) -> Self {
        Self { type_chart, options }
    }

    /// Runs rounds until one side reaches 0 hp.
    ///
    /// `first` always acts first. Both creatures are mutated in place and
    /// must not be shared with any other battle. Provider errors abort the
    /// battle and are returned unchanged.
    pub fn simulate_battle(
        &self,
        resolver: &MoveResolver<'_>,
        first: &mut Creature,
        second: &mut Creature,
    ) -> Result<BattleOutcome, BattleError> {
        for creature in [&*first, &*second] {
            if creature.is_fainted() {
                return Err(BattleError::FaintedParticipant {
                    name: creature.name.clone(),
                });
            }
        }
        if MoveResolver::select_move(first).is_none() && MoveResolver::select_move(second).is_none() {
            return Err(BattleError::Stalemate {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        tracing::debug!("battle start: {} ({} hp) vs {} ({} hp)", first.name, first.hp, second.name, second.hp);

        let mut turns = Vec::new();
        let mut round = 0;
        loop {
            if let Some(max_rounds) = self.options.max_rounds {
                if round >= max_rounds {
                    tracing::warn!("battle between {} and {} hit the {} round cap", first.name, second.name, max_rounds);
                    return Err(BattleError::RoundLimit { rounds: max_rounds });
                }
            }
            round += 1;

            if let BattleStatus::Finished { winner } = self.step_round(resolver, first, second, round, &mut turns)? {
                tracing::info!("{} won after {} rounds", winner, round);
                let log = turns.iter().map(ToString::to_string).collect();
                return Ok(BattleOutcome {
                    winner,
                    log,
                    turns,
                    rounds: round,
                });
            }
        }
    }

    /// One full exchange. The second creature does not act if the first
    /// one's hit knocks it out.
    pub fn step_round(
        &self,
        resolver: &MoveResolver<'_>,
        first: &mut Creature,
        second: &mut Creature,
        round: u32,
        turns: &mut Vec<TurnRecord>,
    ) -> Result<BattleStatus, BattleError> {
        turns.push(self.take_turn(resolver, first, second, round)?);
        if second.is_fainted() {
            return Ok(BattleStatus::Finished {
                winner: first.name.clone(),
            });
        }

        turns.push(self.take_turn(resolver, second, first, round)?);
        if first.is_fainted() {
            return Ok(BattleStatus::Finished {
                winner: second.name.clone(),
            });
        }

        Ok(BattleStatus::Ongoing)
    }

    fn take_turn(
        &self,
        resolver: &MoveResolver<'_>,
        attacker: &Creature,
        defender: &mut Creature,
        round: u32,
    ) -> Result<TurnRecord, BattleError> {
        let attack = resolve_attack(resolver, &self.type_chart, attacker, defender)?;
        let applied = defender.take_damage(attack.damage);
        tracing::trace!(
            "round {}: {} used {:?} on {} for {} (x{})",
            round,
            attacker.name,
            attack.move_name,
            defender.name,
            applied,
            attack.multiplier
        );
        Ok(TurnRecord {
            round,
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            move_name: attack.move_name,
            damage: applied,
            remaining_hp: defender.hp,
        })
    }
}

/// Simulates with the standard type chart and default options.
pub fn simulate_battle(
    provider: &dyn DataProvider,
    first: &mut Creature,
    second: &mut Creature,
) -> Result<BattleOutcome, BattleError> {
    BattleEngine::default().simulate_battle(&MoveResolver::new(provider), first, second)
}
