//! Core domain types for the docket todo service.
//!
//! This crate defines the canonical data model shared by the store, the
//! HTTP server and the interactive shell:
//! - Owners and todos, plus the write shapes used to create and patch todos
//! - The id generation policy
//! - Application configuration

pub mod config;
pub mod error;
pub mod id;
pub mod owner;
pub mod todo;

pub use error::{Error, Result};
pub use id::generate_id;
pub use owner::Owner;
pub use todo::{NewTodo, Todo, TodoPatch};

/// Default database name holding the `owners` and `todos` collections.
pub const DEFAULT_DATABASE: &str = "todos";

/// Collection holding owner documents.
pub const OWNERS_COLLECTION: &str = "owners";

/// Collection holding todo documents.
pub const TODOS_COLLECTION: &str = "todos";
