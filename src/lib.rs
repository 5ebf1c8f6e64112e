pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::cli::convert::ConvertArgs;
use crate::core::config::AppConfig;
use crate::core::{RateStore, RatesProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert(ConvertArgs),
    Swap,
    Rates { refresh: bool },
    Currencies,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?.with_env_overrides(),
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let storage = store::open_storage(&config);
    let provider: Arc<dyn RatesProvider> =
        Arc::new(providers::VatComplyProvider::new(&config.provider.base_url));
    let rate_store = RateStore::new(Arc::clone(&storage), provider, config.cache_ttl());

    match command {
        AppCommand::Convert(args) => {
            cli::convert::run(&rate_store, storage.as_ref(), &config.defaults, &args).await
        }
        AppCommand::Swap => cli::swap::run(storage.as_ref(), &config.defaults).map(|_| ()),
        AppCommand::Rates { refresh } => cli::rates::run(&rate_store, refresh).await,
        AppCommand::Currencies => cli::currencies::run(&rate_store),
    }
}
