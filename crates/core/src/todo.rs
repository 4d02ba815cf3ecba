//! Todo entity and its write shapes.

use crate::owner::Owner;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A task item owned by exactly one owner, by reference.
///
/// `owner` is only populated on reads, through a left-outer join on
/// `owner_id`. When no owner matches it is left as `Owner::default()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub owner_id: String,
    #[serde(default)]
    pub owner: Owner,
}

/// Input for creating a todo. The id and timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub owner_id: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            owner_id: owner_id.into(),
        }
    }
}

/// Replacement values for a todo update. `owner_id` is never touched by updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
