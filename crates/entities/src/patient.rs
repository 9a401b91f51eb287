//! Patient-related entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generate_id;

/// A patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier, assigned at creation and never reused or mutated.
    pub id: String,
    /// Full name; unique among patients, compared trimmed and
    /// case-insensitively.
    pub name: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Contact number, ten digits.
    pub contact: String,
    /// Free-text health notes.
    #[serde(default)]
    pub health_info: String,
    /// Optional inline-encoded profile photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Patient {
    /// Creates a new patient with a generated id.
    pub fn new(name: impl Into<String>, dob: NaiveDate, contact: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            dob,
            contact: contact.into(),
            health_info: String::new(),
            photo: None,
        }
    }

    /// Sets a fixed id (seed fixtures use stable short ids).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the health notes.
    pub fn with_health_info(mut self, health_info: impl Into<String>) -> Self {
        self.health_info = health_info.into();
        self
    }

    /// Sets the profile photo.
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Raw fields of a patient form submission.
///
/// A form becomes a [`Patient`] only after validation passes; until then
/// every field is the string the caller collected, including the date of
/// birth in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientForm {
    /// Full name.
    pub name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Contact number.
    pub contact: String,
    /// Free-text health notes.
    #[serde(default)]
    pub health_info: String,
    /// Inline-encoded profile photo; empty means none.
    #[serde(default)]
    pub photo: String,
}
