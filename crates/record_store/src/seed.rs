//! One-time bootstrap dataset.

use chrono::{NaiveDate, TimeZone, Utc};
use entities::{Appointment, AppointmentStatus, AttachmentFile, Patient, Role, User};
use tracing::info;

use crate::{RecordStore, StoreResult};

/// Populates the three collections with the fixed sample dataset if no
/// seeding has occurred yet.
///
/// Idempotent: once the users key exists the call is a no-op and never
/// resets data. Run this before any other component reads the store.
pub fn ensure_seeded(store: &RecordStore) -> StoreResult<()> {
    if store.is_initialized()? {
        return Ok(());
    }

    let users = vec![
        User::new(Role::Admin, "admin@entnt.in", "admin123").with_id("1"),
        User::new(Role::Patient, "john@entnt.in", "patient123")
            .with_id("2")
            .with_patient_id("p1"),
    ];

    let dob = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();
    let patients = vec![Patient::new("John Doe", dob, "1234567890")
        .with_id("p1")
        .with_health_info("No allergies")];

    let appointments = vec![
        Appointment::new(
            "p1",
            "Toothache",
            Utc.with_ymd_and_hms(2025, 7, 12, 10, 0, 0).unwrap(),
        )
        .with_id("i1")
        .with_description("Upper molar pain")
        .with_comments("Sensitive to cold")
        .with_status(AppointmentStatus::Completed)
        .with_cost(80.0)
        .with_treatment("Filling")
        .with_files(vec![
            AttachmentFile {
                name: "invoice.pdf".to_string(),
                url: "data:application/pdf;base64,dummyInvoiceBase64==".to_string(),
            },
            AttachmentFile {
                name: "xray.png".to_string(),
                url: "data:image/png;base64,dummyXrayBase64==".to_string(),
            },
        ]),
        Appointment::new(
            "p1",
            "Routine Checkup",
            Utc.with_ymd_and_hms(2025, 7, 20, 15, 30, 0).unwrap(),
        )
        .with_id("i2")
        .with_description("Regular cleaning")
        .with_status(AppointmentStatus::Scheduled)
        .with_cost(50.0)
        .with_treatment("Cleaning"),
    ];

    store.replace_users(&users)?;
    store.replace_patients(&patients)?;
    store.replace_appointments(&appointments)?;
    info!("seeded sample users, patients and appointments");
    Ok(())
}
