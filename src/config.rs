//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::core::battle::BattleOptions;
use crate::provider::http::DEFAULT_BASE_URL;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub pokeapi_base_url: String,
    pub request_timeout: Duration,
    pub index_limit: u32,
    pub data_dir: PathBuf,
    pub max_rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokeapi_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            index_limit: 1302,
            data_dir: PathBuf::from("battle-data"),
            max_rounds: 0,
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - REST API root (default: https://pokeapi.co/api/v2)
    /// - `POKEAPI_TIMEOUT_SECS` - Per-request timeout (default: 10)
    /// - `POKEMON_INDEX_LIMIT` - Page size for the name index (default: 1302)
    /// - `DATA_DIR` - Root of the JSON file store (default: battle-data)
    /// - `BATTLE_MAX_ROUNDS` - Round cap per battle, 0 disables it (default: 0)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEAPI_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.pokeapi_base_url = url.trim().to_string();
        }
        if let Some(secs) = parse::<u64>(&lookup, "POKEAPI_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(limit) = parse::<u32>(&lookup, "POKEMON_INDEX_LIMIT") {
            config.index_limit = limit.max(1);
        }
        if let Some(dir) = lookup("DATA_DIR").filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(rounds) = parse::<u32>(&lookup, "BATTLE_MAX_ROUNDS") {
            config.max_rounds = rounds;
        }

        config
    }

    pub fn battle_options(&self) -> BattleOptions {
        BattleOptions {
            max_rounds: (self.max_rounds > 0).then_some(self.max_rounds),
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparsable {}={}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.battle_options().max_rounds, None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("POKEAPI_BASE_URL", "http://localhost:8080/api/v2/"),
            ("POKEAPI_TIMEOUT_SECS", "3"),
            ("DATA_DIR", "/tmp/battles"),
            ("BATTLE_MAX_ROUNDS", "250"),
            ("POKEMON_INDEX_LIMIT", "not-a-number"),
        ]));
        assert_eq!(config.pokeapi_base_url, "http://localhost:8080/api/v2/");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/battles"));
        assert_eq!(config.index_limit, 1302);
        assert_eq!(config.battle_options().max_rounds, Some(250));
    }
}
