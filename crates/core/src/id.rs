//! Identifier generation.

use uuid::Uuid;

/// Generate a new random identifier.
///
/// Used for every todo id, and for owner ids when the caller does not
/// supply one. The value is a hyphenated UUID v4.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
