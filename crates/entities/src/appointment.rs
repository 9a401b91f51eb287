//! Appointment-related entity definitions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::generate_id;

/// Status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Booked but not yet carried out.
    Scheduled,
    /// Treatment done.
    Completed,
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => write!(f, "Scheduled"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A named file attached to an appointment, with inline-encoded content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentFile {
    /// Original file name.
    pub name: String,
    /// Data URL holding the encoded content.
    pub url: String,
}

/// An appointment for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier.
    pub id: String,
    /// Referenced patient. The reference is not enforced at write time;
    /// lookups that fail resolve to a fallback at query time.
    pub patient_id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// When the appointment takes place.
    pub appointment_date: DateTime<Utc>,
    /// Current status.
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Treatment cost. Reads leniently: legacy documents may carry the cost
    /// as a string, and anything non-numeric reads as absent.
    #[serde(
        default,
        deserialize_with = "de_cost",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<f64>,
    /// Treatment performed.
    #[serde(default)]
    pub treatment: String,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
    /// Attached files, in upload order.
    #[serde(default)]
    pub files: Vec<AttachmentFile>,
}

impl Appointment {
    /// Creates a new scheduled appointment with a generated id.
    pub fn new(
        patient_id: impl Into<String>,
        title: impl Into<String>,
        appointment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_id(),
            patient_id: patient_id.into(),
            title: title.into(),
            description: String::new(),
            appointment_date,
            status: AppointmentStatus::default(),
            cost: None,
            treatment: String::new(),
            comments: String::new(),
            files: Vec::new(),
        }
    }

    /// Sets a fixed id (seed fixtures use stable short ids).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the treatment.
    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Sets the attached files.
    pub fn with_files(mut self, files: Vec<AttachmentFile>) -> Self {
        self.files = files;
        self
    }
}

fn de_cost<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Some(n),
        Raw::Text(s) => s.trim().parse().ok(),
        Raw::Other(_) => None,
    })
}
