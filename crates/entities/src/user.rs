//! User-related entity definitions.

use serde::{Deserialize, Serialize};

use crate::generate_id;

/// Role attached to a login identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Clinic staff: manages patients and appointments.
    Admin,
    /// A patient: sees only their own appointment history.
    Patient,
}

/// A login identity.
///
/// Users are fixed at seeding time; there is no user-management surface.
/// The password is stored and compared in the clear, preserving the demo
/// contract of the seeded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Role of this user.
    pub role: Role,
    /// Login email, matched case-sensitively.
    pub email: String,
    /// Login password, matched case-sensitively.
    pub password: String,
    /// Linked patient record; present iff the role is Patient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

impl User {
    /// Creates a new user with a generated id.
    pub fn new(role: Role, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            role,
            email: email.into(),
            password: password.into(),
            patient_id: None,
        }
    }

    /// Sets a fixed id (seed fixtures use stable short ids).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Links this user to a patient record.
    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    /// Whether this user holds the Admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
