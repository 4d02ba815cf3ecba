//! MongoDB testcontainer harness.

use docket_store::{DocumentStore, MongoStore, StoreError, StoreResult};
use std::sync::Arc;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::mongo::Mongo;

/// Stable prefix for Docker/container startup failures in MongoDB test setup.
/// Tests use this marker to decide whether to skip due to unavailable Docker.
pub const MONGO_CONTAINER_START_ERR_PREFIX: &str = "mongo-container-start:";

/// MongoDB test store wrapper that manages a testcontainer.
#[allow(dead_code)]
pub struct MongoTestStore {
    pub store: Arc<dyn DocumentStore>,
    pub(crate) mongo_store: Arc<MongoStore>,
    _container: ContainerAsync<Mongo>,
}

impl MongoTestStore {
    /// Start a MongoDB container and connect a store to a fresh database.
    pub async fn new() -> StoreResult<Self> {
        let container = Mongo::default().with_tag("7").start().await.map_err(|e| {
            StoreError::Internal(format!(
                "{MONGO_CONTAINER_START_ERR_PREFIX} Failed to start MongoDB container: {e}"
            ))
        })?;

        let host = container
            .get_host()
            .await
            .map_err(|e| StoreError::Internal(format!("container host: {e}")))?;
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .map_err(|e| StoreError::Internal(format!("container port: {e}")))?;

        let url = format!("mongodb://{host}:{port}/?directConnection=true");
        let store = MongoStore::connect(&url, "todos", Some(5), None).await?;
        store.health_check().await?;
        let arc_store = Arc::new(store);

        Ok(Self {
            store: arc_store.clone(),
            mongo_store: arc_store,
            _container: container,
        })
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.store.clone()
    }

    /// Get the concrete store for raw collection access.
    #[allow(dead_code)]
    pub fn mongo(&self) -> &MongoStore {
        &self.mongo_store
    }
}

/// Try to start a MongoDB test store, skipping if Docker is unavailable
/// or SKIP_MONGO_TESTS is set.
///
/// Only container-start failures cause a skip. Connection errors after the
/// container is up still panic.
#[allow(dead_code)]
pub async fn mongo_or_skip() -> Option<MongoTestStore> {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        return None;
    }
    match MongoTestStore::new().await {
        Ok(store) => Some(store),
        Err(err) => {
            let msg = err.to_string();
            if msg.contains(MONGO_CONTAINER_START_ERR_PREFIX) {
                eprintln!("Skipping MongoDB test (Docker unavailable): {msg}");
                None
            } else {
                panic!("MongoDB test setup failed: {msg}");
            }
        }
    }
}
