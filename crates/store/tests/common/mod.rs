//! Common test utilities for the document store.

pub mod mongo;
pub mod scenarios;

#[allow(unused_imports)]
pub use mongo::*;

use docket_store::{DocumentStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;

/// A fresh in-memory store.
#[allow(dead_code)]
pub fn memory_store() -> Arc<dyn DocumentStore> {
    Arc::new(MemoryStore::new())
}

/// Sleep long enough for the millisecond-precision clock to advance.
#[allow(dead_code)]
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}
