//! Document store adapter and repositories for owners and todos.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod queries;
pub mod repos;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repos::{OwnerRepo, TodoRepo};
pub use store::DocumentStore;

use docket_core::config::StoreConfig;
use std::sync::Arc;

/// Create a document store from configuration.
///
/// For MongoDB the connection is verified with a ping before returning, so
/// an unreachable database fails here rather than on the first request.
pub async fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    config.validate()?;
    tracing::debug!(backend = config.backend_name(), "Opening document store");

    match config {
        StoreConfig::Mongo {
            url,
            database,
            max_pool_size,
            min_pool_size,
        } => {
            let store = MongoStore::connect(url, database, *max_pool_size, *min_pool_size).await?;
            store.health_check().await?;
            tracing::info!(database = %database, "Connected to MongoDB");
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store; data will not be persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
