//! Owner repository trait.

use crate::error::StoreResult;
use async_trait::async_trait;
use docket_core::Owner;

/// Repository for the `owners` collection.
///
/// Writes against an id that does not exist succeed without effect.
#[async_trait]
pub trait OwnerRepo: Send + Sync {
    /// List all owners in store order. An empty or absent collection yields an empty list.
    async fn list_owners(&self) -> StoreResult<Vec<Owner>>;

    /// Get an owner by ID, or `StoreError::NotFound`.
    async fn get_owner(&self, id: &str) -> StoreResult<Owner>;

    /// Create a new owner keyed by its caller-supplied ID.
    /// Fails with `StoreError::AlreadyExists` on a duplicate ID.
    async fn create_owner(&self, owner: &Owner) -> StoreResult<()>;

    /// Replace the name of the owner with `owner.id`.
    async fn update_owner(&self, owner: &Owner) -> StoreResult<()>;

    /// Delete an owner by ID. Todos referencing it are left untouched.
    async fn delete_owner(&self, id: &str) -> StoreResult<()>;
}
