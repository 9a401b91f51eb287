//! Record store over the three persisted collections.

use std::sync::Arc;

use entities::{generate_id, Appointment, Patient, PatientForm, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::{validate_patient, KeyValueStore, StoreError, StoreResult};

/// Storage key for the users collection.
pub const USERS_KEY: &str = "users";
/// Storage key for the patients collection.
pub const PATIENTS_KEY: &str = "patients";
/// Storage key for the appointments collection.
pub const APPOINTMENTS_KEY: &str = "appointments";
/// Storage key for the login session.
pub const SESSION_KEY: &str = "session";

/// Ordered collections of users, patients and appointments over a
/// [`KeyValueStore`].
///
/// There is no partial-update primitive: every mutation reads the full
/// collection, transforms it in memory and writes the full collection
/// back in a single adapter `set`. Last-writer-wins is accepted; the
/// system targets one active session per store. Insertion order is
/// preserved, since the collection order is the display order.
#[derive(Clone)]
pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    /// Creates a record store over the given adapter.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Whether any seeding has occurred (the users key exists).
    pub fn is_initialized(&self) -> StoreResult<bool> {
        Ok(self.kv.get(USERS_KEY)?.is_some())
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(key, error = %e, "stored collection is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(records)?;
        self.kv.set(key, &raw)
    }

    // ========== Users ==========

    /// Lists all users; an absent or unreadable key lists as empty.
    pub fn list_users(&self) -> StoreResult<Vec<User>> {
        self.read_collection(USERS_KEY)
    }

    /// Replaces the users collection.
    pub fn replace_users(&self, users: &[User]) -> StoreResult<()> {
        self.write_collection(USERS_KEY, users)
    }

    // ========== Patients ==========

    /// Lists all patients; an absent or unreadable key lists as empty.
    pub fn list_patients(&self) -> StoreResult<Vec<Patient>> {
        self.read_collection(PATIENTS_KEY)
    }

    /// Replaces the patients collection.
    pub fn replace_patients(&self, patients: &[Patient]) -> StoreResult<()> {
        self.write_collection(PATIENTS_KEY, patients)
    }

    /// Validates a form and appends it as a new patient.
    pub fn add_patient(&self, form: &PatientForm) -> StoreResult<Patient> {
        let mut patients = self.list_patients()?;
        let errors = validate_patient(form, &patients, None);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }
        let patient = patient_from_form(form, generate_id())?;
        patients.push(patient.clone());
        self.replace_patients(&patients)?;
        Ok(patient)
    }

    /// Validates a form and replaces the patient with this id in place,
    /// keeping its position in the collection.
    pub fn update_patient(&self, id: &str, form: &PatientForm) -> StoreResult<Patient> {
        let mut patients = self.list_patients()?;
        let errors = validate_patient(form, &patients, Some(id));
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }
        let patient = patient_from_form(form, id.to_string())?;
        let Some(slot) = patients.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::not_found("Patient", id));
        };
        *slot = patient.clone();
        self.replace_patients(&patients)?;
        Ok(patient)
    }

    /// Deletes a patient by id.
    ///
    /// Appointments referencing the patient are left in place; their
    /// reference dangles and resolves to a fallback at query time.
    pub fn delete_patient(&self, id: &str) -> StoreResult<()> {
        let mut patients = self.list_patients()?;
        let before = patients.len();
        patients.retain(|p| p.id != id);
        if patients.len() == before {
            return Err(StoreError::not_found("Patient", id));
        }
        self.replace_patients(&patients)
    }

    // ========== Appointments ==========

    /// Lists all appointments; an absent or unreadable key lists as empty.
    pub fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        self.read_collection(APPOINTMENTS_KEY)
    }

    /// Replaces the appointments collection.
    pub fn replace_appointments(&self, appointments: &[Appointment]) -> StoreResult<()> {
        self.write_collection(APPOINTMENTS_KEY, appointments)
    }

    /// Appends a new appointment.
    ///
    /// The patient reference is not checked at write time.
    pub fn add_appointment(&self, appointment: Appointment) -> StoreResult<Appointment> {
        let mut appointments = self.list_appointments()?;
        appointments.push(appointment.clone());
        self.replace_appointments(&appointments)?;
        Ok(appointment)
    }
}

fn patient_from_form(form: &PatientForm, id: String) -> StoreResult<Patient> {
    // Validation has already run; a parse failure here still refuses the
    // write rather than storing a bad date.
    let dob = crate::validate::parse_dob(&form.dob)
        .ok_or_else(|| StoreError::Validation(vec![crate::validate::MSG_DOB_INVALID.to_string()]))?;
    Ok(Patient {
        id,
        name: form.name.clone(),
        dob,
        contact: form.contact.clone(),
        health_info: form.health_info.clone(),
        photo: if form.photo.is_empty() {
            None
        } else {
            Some(form.photo.clone())
        },
    })
}
