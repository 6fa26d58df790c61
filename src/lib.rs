pub mod cache;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod provider;
pub mod service;
pub mod store;

pub use cache::Cache;
pub use config::Config;
pub use crate::core::{
    battle::{simulate_battle, BattleEngine, BattleOptions, BattleOutcome},
    damage::{calculate_damage, compute_damage, resolve_attack, Attack},
    events::{BattleStatus, TurnRecord},
    factory::{create_creature, MAX_BATTLE_MOVES},
    moves::MoveResolver,
    state::Creature,
};
pub use crate::data::{
    moves::{DamageCategory, MoveData, MoveDatabase},
    species::{CreatureData, CreatureDatabase, Stats},
    type_chart::TypeChart,
};
pub use error::{BattleError, CreatureError, ProviderError, ResourceKind, ServiceError, StoreError};
pub use provider::DataProvider;
