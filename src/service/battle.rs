use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::battle::BattleEngine;
use crate::core::factory::create_creature;
use crate::core::moves::MoveResolver;
use crate::error::ServiceError;
use crate::provider::DataProvider;
use crate::service::require_name;
use crate::store::BattleStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub id: u64,
    pub winner: String,
    pub battle_log: Vec<String>,
}

pub struct BattleService {
    provider: Arc<dyn DataProvider>,
    store: Arc<dyn BattleStore>,
    engine: BattleEngine,
}

impl BattleService {
    pub fn new(provider: Arc<dyn DataProvider>, store: Arc<dyn BattleStore>, engine: BattleEngine) -> Self {
        Self {
            provider,
            store,
            engine,
        }
    }

    /// Fetches both creatures, battles fresh instances of them and stores the result.
    pub fn create_battle(&self, first_name: &str, second_name: &str) -> Result<BattleResult, ServiceError> {
        let first_name = require_name("pokemon1", first_name)?;
        let second_name = require_name("pokemon2", second_name)?;

        let first_data = self.provider.fetch_creature(&first_name)?;
        let second_data = self.provider.fetch_creature(&second_name)?;
        let mut first = create_creature(&first_data)?;
        let mut second = create_creature(&second_data)?;

        let resolver = MoveResolver::new(self.provider.as_ref());
        let outcome = self.engine.simulate_battle(&resolver, &mut first, &mut second)?;

        let record = self
            .store
            .save_battle(first.id, second.id, &outcome.winner, &outcome.log)?;
        tracing::info!(
            "battle {} stored: {} vs {}, winner {}",
            record.id,
            first.name,
            second.name,
            record.winner
        );

        Ok(BattleResult {
            id: record.id,
            winner: record.winner,
            battle_log: record.battle_log,
        })
    }
}
