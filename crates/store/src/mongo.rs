//! MongoDB-backed document store.

use crate::error::{StoreError, StoreResult};
use crate::queries;
use crate::repos::{OwnerRepo, TodoRepo};
use crate::store::DocumentStore;
use async_trait::async_trait;
use bson::{Document, doc};
use docket_core::{NewTodo, OWNERS_COLLECTION, Owner, TODOS_COLLECTION, Todo, TodoPatch};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Document store over a MongoDB database holding the `owners` and `todos`
/// collections. The database handle shares the driver's pooled client.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to MongoDB. The driver connects lazily, so this does not
    /// contact the server; call `health_check` to verify connectivity.
    pub async fn connect(
        url: &str,
        database: &str,
        max_pool_size: Option<u32>,
        min_pool_size: Option<u32>,
    ) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url).await?;
        if max_pool_size.is_some() {
            options.max_pool_size = max_pool_size;
        }
        if min_pool_size.is_some() {
            options.min_pool_size = min_pool_size;
        }
        options.app_name = Some("docket".to_string());

        let client = Client::with_options(options)?;
        let database = client.database(database);
        tracing::debug!(database = %database.name(), "MongoDB client created");

        Ok(Self { database })
    }

    /// Get the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn owners(&self) -> Collection<Document> {
        self.database.collection(OWNERS_COLLECTION)
    }

    fn todos(&self) -> Collection<Document> {
        self.database.collection(TODOS_COLLECTION)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// Map an insert failure, surfacing unique index violations as `AlreadyExists`.
fn insert_error(err: mongodb::error::Error, what: String) -> StoreError {
    if is_duplicate_key(&err) {
        StoreError::AlreadyExists(what)
    } else {
        StoreError::Database(err)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongo"
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

mod mongo_impl {
    use super::*;

    #[async_trait]
    impl OwnerRepo for MongoStore {
        async fn list_owners(&self) -> StoreResult<Vec<Owner>> {
            let docs: Vec<Document> = self.owners().find(doc! {}).await?.try_collect().await?;
            docs.iter().map(queries::decode_owner).collect()
        }

        async fn get_owner(&self, id: &str) -> StoreResult<Owner> {
            let doc = self
                .owners()
                .find_one(queries::by_id(id))
                .await?
                .ok_or_else(|| StoreError::NotFound(format!("owner {id}")))?;
            queries::decode_owner(&doc)
        }

        async fn create_owner(&self, owner: &Owner) -> StoreResult<()> {
            self.owners()
                .insert_one(queries::owner_document(owner))
                .await
                .map_err(|e| insert_error(e, format!("owner {}", owner.id)))?;
            tracing::debug!(owner_id = %owner.id, "Owner created");
            Ok(())
        }

        async fn update_owner(&self, owner: &Owner) -> StoreResult<()> {
            let result = self
                .owners()
                .update_one(queries::by_id(&owner.id), queries::owner_update(owner))
                .await?;
            if result.matched_count == 0 {
                tracing::debug!(owner_id = %owner.id, "Owner update matched no document");
            }
            Ok(())
        }

        async fn delete_owner(&self, id: &str) -> StoreResult<()> {
            let result = self.owners().delete_one(queries::by_id(id)).await?;
            if result.deleted_count == 0 {
                tracing::debug!(owner_id = %id, "Owner delete matched no document");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TodoRepo for MongoStore {
        async fn list_todos(&self) -> StoreResult<Vec<Todo>> {
            let docs: Vec<Document> = self
                .todos()
                .aggregate(queries::list_todos_pipeline())
                .await?
                .try_collect()
                .await?;
            docs.iter().map(queries::decode_todo).collect()
        }

        async fn get_todo(&self, id: &str) -> StoreResult<Todo> {
            let docs: Vec<Document> = self
                .todos()
                .aggregate(queries::get_todo_pipeline(id))
                .await?
                .try_collect()
                .await?;
            let doc = docs
                .first()
                .ok_or_else(|| StoreError::NotFound(format!("todo {id}")))?;
            queries::decode_todo(doc)
        }

        async fn create_todo(&self, todo: &NewTodo) -> StoreResult<Todo> {
            let id = docket_core::generate_id();
            let now = queries::now();
            self.todos()
                .insert_one(queries::todo_document(&id, todo, now))
                .await
                .map_err(|e| insert_error(e, format!("todo {id}")))?;
            tracing::debug!(todo_id = %id, owner_id = %todo.owner_id, "Todo created");

            Ok(Todo {
                id,
                title: todo.title.clone(),
                completed: todo.completed,
                created_at: now,
                updated_at: now,
                owner_id: todo.owner_id.clone(),
                owner: Owner::default(),
            })
        }

        async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<()> {
            let result = self
                .todos()
                .update_one(queries::by_id(id), queries::todo_update(patch, queries::now()))
                .await?;
            if result.matched_count == 0 {
                tracing::debug!(todo_id = %id, "Todo update matched no document");
            }
            Ok(())
        }

        async fn delete_todo(&self, id: &str) -> StoreResult<()> {
            let result = self.todos().delete_one(queries::by_id(id)).await?;
            if result.deleted_count == 0 {
                tracing::debug!(todo_id = %id, "Todo delete matched no document");
            }
            Ok(())
        }

        async fn mark_done(&self, id: &str) -> StoreResult<()> {
            let result = self
                .todos()
                .update_one(queries::by_id(id), queries::todo_done(queries::now()))
                .await?;
            if result.matched_count == 0 {
                tracing::debug!(todo_id = %id, "Todo done matched no document");
            }
            Ok(())
        }
    }
}
