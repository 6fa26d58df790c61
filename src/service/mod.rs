//! Request-level orchestration: provider lookups, battle simulation and
//! persistence wired together the way a route handler needs them.

pub mod battle;
pub mod creature;

pub use battle::{BattleResult, BattleService};
pub use creature::CreatureService;

use crate::error::ServiceError;

pub(crate) fn require_name(field: &str, value: &str) -> Result<String, ServiceError> {
    let name = value.trim().to_lowercase();
    if name.is_empty() {
        return Err(ServiceError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(name)
}
