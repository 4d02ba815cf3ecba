//! Repository traits for document store operations.

pub mod owners;
pub mod todos;

pub use owners::OwnerRepo;
pub use todos::TodoRepo;
