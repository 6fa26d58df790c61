use crate::core::moves::MoveResolver;
use crate::core::state::Creature;
use crate::data::moves::{DamageCategory, MoveData};
use crate::data::type_chart::TypeChart;
use crate::error::ProviderError;

/// What one acting turn resolved to.
#[derive(Clone, Debug, PartialEq)]
pub struct Attack {
    pub move_name: Option<String>,
    pub damage: u32,
    pub multiplier: f32,
}

/// Damage for a resolved move, truncated toward zero and floored at 1.
pub fn compute_damage(move_data: &MoveData, attacker: &Creature, defender: &Creature, multiplier: f32) -> u32 {
    let power = move_data.power as f64;
    let raw = match move_data.category {
        DamageCategory::Special => power * attacker.special_attack as f64 / defender.special_defense as f64,
        DamageCategory::Physical => power * attacker.attack as f64 / defender.defense as f64,
    };
    let damage = (raw * multiplier as f64).trunc() as u32;
    damage.max(1)
}

/// Resolves the attacker's move and the damage it would deal to `defender`.
///
/// An attacker with no moves yields a zero-damage [`Attack`] without
/// touching the provider.
pub fn resolve_attack(
    resolver: &MoveResolver<'_>,
    type_chart: &TypeChart,
    attacker: &Creature,
    defender: &Creature,
) -> Result<Attack, ProviderError> {
    let Some(move_name) = MoveResolver::select_move(attacker) else {
        return Ok(Attack {
            move_name: None,
            damage: 0,
            multiplier: 1.0,
        });
    };

    let move_data = resolver.get_move_data(move_name)?;
    let attacking = [move_data.move_type.clone()];
    let attacking: &[String] = if move_data.move_type.is_empty() { &[] } else { &attacking };
    let multiplier = type_chart.effectiveness(attacking, &defender.types);

    Ok(Attack {
        move_name: Some(move_data.name.clone()),
        damage: compute_damage(&move_data, attacker, defender, multiplier),
        multiplier,
    })
}

pub fn calculate_damage(
    resolver: &MoveResolver<'_>,
    type_chart: &TypeChart,
    attacker: &Creature,
    defender: &Creature,
) -> Result<u32, ProviderError> {
    resolve_attack(resolver, type_chart, attacker, defender).map(|attack| attack.damage)
}
