//! CSV projection of appointment lists.

use std::path::{Path, PathBuf};

use entities::{Appointment, Patient};
use tracing::info;

use crate::patient_name;

/// Fixed CSV column header.
pub const CSV_HEADER: &str =
    "Patient,Date,Title,Description,Treatment,Cost,Status,Comments,FileCount";
/// Export file name.
pub const CSV_FILE_NAME: &str = "appointments.csv";
/// Export MIME type, for callers that serve the file.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Serializes appointments to CSV in the given order, header first.
///
/// Fields are comma-joined with no quoting or escaping, so a free-text
/// field containing a comma or newline shifts columns; kept as-is for
/// output compatibility. An unresolved patient renders as an empty name.
/// An empty input yields the header line alone.
pub fn appointments_to_csv(appointments: &[Appointment], patients: &[Patient]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(appointments.iter().map(|a| csv_row(a, patients)));
    lines.join("\n")
}

/// Writes the CSV document as `appointments.csv` under `dir` and returns
/// the path.
pub fn export_csv(
    dir: &Path,
    appointments: &[Appointment],
    patients: &[Patient],
) -> std::io::Result<PathBuf> {
    let path = dir.join(CSV_FILE_NAME);
    std::fs::write(&path, appointments_to_csv(appointments, patients))?;
    info!(rows = appointments.len(), path = %path.display(), "exported appointments");
    Ok(path)
}

fn csv_row(appointment: &Appointment, patients: &[Patient]) -> String {
    [
        patient_name(patients, &appointment.patient_id)
            .unwrap_or("")
            .to_string(),
        appointment
            .appointment_date
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        appointment.title.clone(),
        appointment.description.clone(),
        appointment.treatment.clone(),
        fmt_cost(appointment.cost),
        appointment.status.to_string(),
        appointment.comments.clone(),
        appointment.files.len().to_string(),
    ]
    .join(",")
}

fn fmt_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) if c.fract() == 0.0 => format!("{}", c as i64),
        Some(c) => format!("{}", c),
        None => "0".to_string(),
    }
}
