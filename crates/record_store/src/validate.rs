//! Patient form validation.

use chrono::{NaiveDate, Utc};
use entities::{Patient, PatientForm};

const MSG_NAME_REQUIRED: &str = "Name is required.";
const MSG_DOB_REQUIRED: &str = "Date of birth is required.";
pub(crate) const MSG_DOB_INVALID: &str = "Date of birth must be a valid date.";
const MSG_DOB_FUTURE: &str = "DOB cannot be in the future.";
const MSG_CONTACT_REQUIRED: &str = "Contact number is required.";
const MSG_CONTACT_FORMAT: &str = "Contact number must be exactly 10 digits.";
const MSG_NAME_DUPLICATE: &str = "A patient with this name already exists.";

/// Parses a form date of birth (`YYYY-MM-DD`).
pub(crate) fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Checks a patient form against every rule and returns all violated
/// messages, in rule order; an empty result means the form is valid.
///
/// Rules are evaluated independently, not short-circuited: every failing
/// rule contributes its message. `editing_id` excludes the record being
/// edited from the uniqueness check.
pub fn validate_patient(
    form: &PatientForm,
    existing: &[Patient],
    editing_id: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(MSG_NAME_REQUIRED.to_string());
    }

    if form.dob.trim().is_empty() {
        errors.push(MSG_DOB_REQUIRED.to_string());
    } else {
        match parse_dob(&form.dob) {
            None => errors.push(MSG_DOB_INVALID.to_string()),
            Some(dob) if dob > Utc::now().date_naive() => {
                errors.push(MSG_DOB_FUTURE.to_string());
            }
            Some(_) => {}
        }
    }

    if form.contact.trim().is_empty() {
        errors.push(MSG_CONTACT_REQUIRED.to_string());
    } else if !is_ten_digits(&form.contact) {
        errors.push(MSG_CONTACT_FORMAT.to_string());
    }

    let name = form.name.trim().to_lowercase();
    let duplicate = existing
        .iter()
        .any(|p| p.name.trim().to_lowercase() == name && Some(p.id.as_str()) != editing_id);
    if duplicate {
        errors.push(MSG_NAME_DUPLICATE.to_string());
    }

    errors
}

fn is_ten_digits(contact: &str) -> bool {
    contact.len() == 10 && contact.chars().all(|c| c.is_ascii_digit())
}
