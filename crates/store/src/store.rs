//! Document store trait.

use crate::error::StoreResult;
use crate::repos::{OwnerRepo, TodoRepo};
use async_trait::async_trait;

/// Combined document store trait.
///
/// One value of this trait is built at startup and shared, as
/// `Arc<dyn DocumentStore>`, by every consumer for the life of the process.
#[async_trait]
pub trait DocumentStore: OwnerRepo + TodoRepo + Send + Sync {
    /// Short backend name ("mongo", "memory").
    fn backend(&self) -> &'static str;

    /// Check database connectivity.
    async fn health_check(&self) -> StoreResult<()>;
}
