//! Error types shared across the provider, battle core, store and services.
//!
//! Each layer has its own enum; [`ServiceError`] aggregates them for callers
//! that need a single type and an HTTP-equivalent status code.
use std::fmt;

use thiserror::Error;

/// Which kind of remote resource a lookup was about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Creature,
    Move,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Creature => "creature",
            ResourceKind::Move => "move",
        };
        f.write_str(label)
    }
}

/// Failures reported by a [`crate::provider::DataProvider`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error("invalid data for '{name}': {details}")]
    InvalidData { name: String, details: String },

    #[error("data provider failure: {message}")]
    Failure {
        message: String,
        url: Option<String>,
        status: Option<u16>,
    },
}

impl ProviderError {
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        ProviderError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn invalid_data(name: impl Into<String>, details: impl Into<String>) -> Self {
        ProviderError::InvalidData {
            name: name.into(),
            details: details.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ProviderError::Failure {
            message: message.into(),
            url: None,
            status: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}

/// Precondition violations detected while building a battle [`crate::core::state::Creature`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreatureError {
    #[error("creature name must not be empty")]
    EmptyName,

    #[error("creature '{name}' must have 1 or 2 types, got {count}")]
    TypeCount { name: String, count: usize },

    #[error("creature '{name}' has unknown type '{type_name}'")]
    UnknownType { name: String, type_name: String },

    #[error("creature '{name}' has a {stat} stat of zero")]
    ZeroDefense { name: String, stat: &'static str },
}

/// Errors returned by [`crate::core::battle::BattleEngine::simulate_battle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("creature '{name}' has no hp left and cannot battle")]
    FaintedParticipant { name: String },

    #[error("neither '{first}' nor '{second}' has a usable move")]
    Stalemate { first: String, second: String },

    #[error("battle did not finish within {rounds} rounds")]
    RoundLimit { rounds: u32 },
}

/// Errors surfaced by persistence implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Top-level error for the creature and battle services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Creature(#[from] CreatureError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP-equivalent status for route layers.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::InvalidRequest(_) => 400,
            ServiceError::Provider(err) | ServiceError::Battle(BattleError::Provider(err)) => {
                provider_status(err)
            }
            ServiceError::Creature(_) | ServiceError::Battle(_) => 422,
            ServiceError::Store(_) => 500,
        }
    }
}

fn provider_status(err: &ProviderError) -> u16 {
    match err {
        ProviderError::NotFound { .. } => 404,
        ProviderError::InvalidData { .. } => 502,
        ProviderError::Failure { .. } => 503,
    }
}
