//! Battle CLI
//!
//! Route-equivalent front end for the battle and creature services.
//!
//! Usage:
//!   battle-cli battle charizard venusaur
//!   battle-cli pokemon pikachu
//!   battle-cli --offline battle snorlax gengar
//!   battle-cli battles

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokebattle::core::battle::BattleEngine;
use pokebattle::data::type_chart::TypeChart;
use pokebattle::provider::{CachingProvider, DataProvider, HttpProvider, InMemoryProvider, PokeApiClient};
use pokebattle::service::{BattleService, CreatureService};
use pokebattle::store::{BattleStore, JsonFileStore};
use pokebattle::{Config, ServiceError};
use serde_json::json;

#[derive(Parser)]
#[command(name = "battle-cli")]
#[command(about = "Creature lookups and battles", long_about = None)]
#[command(version)]
struct Cli {
    /// Use the bundled data set instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    /// Override DATA_DIR for persisted records
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Battle two creatures and store the result
    Battle { pokemon1: String, pokemon2: String },

    /// Look up a creature, storing it on first access
    Pokemon { name: String },

    /// List stored battles
    Battles,
}

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokebattle=info".parse().context("invalid log directive")?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let store = Arc::new(
        JsonFileStore::new(&config.data_dir)
            .with_context(|| format!("failed to open store at {}", config.data_dir.display()))?,
    );

    let provider = build_provider(&config, cli.offline)?;
    let outcome = match cli.command {
        Command::Battle { pokemon1, pokemon2 } => {
            let engine = BattleEngine::new(TypeChart::new(), config.battle_options());
            BattleService::new(provider, store, engine)
                .create_battle(&pokemon1, &pokemon2)
                .map(|result| json!(result))
        }
        Command::Pokemon { name } => CreatureService::new(store, provider)
            .get_creature_information(&name)
            .map(|info| json!(info)),
        Command::Battles => store
            .list_battles()
            .map(|battles| json!(battles))
            .map_err(ServiceError::from),
    };

    match outcome {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report(&err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn build_provider(config: &Config, offline: bool) -> Result<Arc<dyn DataProvider>> {
    if offline {
        let provider = InMemoryProvider::load_default().context("failed to load bundled data")?;
        return Ok(Arc::new(provider));
    }
    let client = PokeApiClient::new(&config.pokeapi_base_url, config.request_timeout, config.index_limit)?;
    Ok(Arc::new(CachingProvider::new(HttpProvider::new(client)?)))
}

fn report(err: &ServiceError) -> Result<()> {
    let body = json!({ "error": err.to_string(), "status": err.status_code() });
    eprintln!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
