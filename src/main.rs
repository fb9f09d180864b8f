//! Entry point: loads configuration, installs logging, opens the collection
//! store and hydrates the core.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use rwa_tokenizer::adapters::{FileCollectionStore, InMemoryCollectionStore};
use rwa_tokenizer::application::TokenizationCore;
use rwa_tokenizer::config::{AppConfig, LogFormat, StorageBackend};
use rwa_tokenizer::ports::CollectionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let store: Arc<dyn CollectionStore> = match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "Using file store");
            Arc::new(FileCollectionStore::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store, nothing will survive a restart");
            Arc::new(InMemoryCollectionStore::new())
        }
    };

    let core = TokenizationCore::from_config(&config, store).await;
    let state = core.state();
    tracing::info!(
        environment = ?config.runtime.environment,
        users = state.users().len(),
        properties = state.properties().len(),
        tokens = state.tokens().len(),
        "RWA tokenizer ready"
    );

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.runtime.log_level));

    let result = match config.runtime.log_format {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).pretty().try_init(),
    };
    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
