//! Owner entity.

use serde::{Deserialize, Serialize};

/// A person who owns zero or more todos.
///
/// The `id` is supplied by the caller and is the primary key of the
/// `owners` collection. `Owner::default()` is the empty owner attached to
/// todos whose `owner_id` does not resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Owner {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether this is the empty owner left by an unmatched join.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }
}
