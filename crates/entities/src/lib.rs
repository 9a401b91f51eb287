//! Core entity definitions for ClinicDesk.
//!
//! This crate defines the records shared across the ClinicDesk data layer:
//! login identities, patient records, and appointments, serialized in the
//! persisted camelCase document layout.

mod appointment;
mod patient;
mod user;

pub use appointment::*;
pub use patient::*;
pub use user::*;

use uuid::Uuid;

/// Generates a random opaque record identifier.
///
/// Uniqueness rests on the generator's entropy alone; there is no
/// persistence or collision checking behind it.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(generate_id(), generate_id());
    }
}
