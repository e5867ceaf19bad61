//! CLI subcommand implementations.

pub mod seed;
pub mod user;

use smart_pantry_server::config::PantryConfig;
use smart_pantry_server::store::DualStore;

/// Open the record store under the configured data directory.
pub(crate) fn open_store() -> Result<DualStore, Box<dyn std::error::Error>> {
    let config = PantryConfig::from_env()?;
    let store = DualStore::open(&config.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "record store opened");
    Ok(store)
}
