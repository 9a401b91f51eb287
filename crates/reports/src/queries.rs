//! Pure queries over patient and appointment snapshots.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use entities::{Appointment, AppointmentStatus, Patient};

/// Looks up a patient's name by id.
pub fn patient_name<'a>(patients: &'a [Patient], patient_id: &str) -> Option<&'a str> {
    patients
        .iter()
        .find(|p| p.id == patient_id)
        .map(|p| p.name.as_str())
}

/// Filters appointments by patient-name substring and optional status.
///
/// The search term matches case-insensitively against the referenced
/// patient's name. An appointment whose patient reference does not
/// resolve never matches the name test, so it is excluded even for an
/// empty term.
pub fn filter_appointments(
    appointments: &[Appointment],
    patients: &[Patient],
    search: &str,
    status: Option<AppointmentStatus>,
) -> Vec<Appointment> {
    let term = search.to_lowercase();
    appointments
        .iter()
        .filter(|a| {
            let matches_patient = patient_name(patients, &a.patient_id)
                .map(|name| name.to_lowercase().contains(&term))
                .unwrap_or(false);
            let matches_status = status.map_or(true, |s| a.status == s);
            matches_patient && matches_status
        })
        .cloned()
        .collect()
}

/// Buckets appointments by the calendar date of their timestamp,
/// ascending by date; ties within a day keep the collection order.
pub fn group_by_day(appointments: &[Appointment]) -> Vec<(NaiveDate, Vec<Appointment>)> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Appointment>> = BTreeMap::new();
    for appointment in appointments {
        buckets
            .entry(appointment.appointment_date.date_naive())
            .or_default()
            .push(appointment.clone());
    }
    buckets.into_iter().collect()
}

/// Splits appointments into `(upcoming, past)` around `now`.
///
/// Upcoming is strictly future; everything else, `now` itself included,
/// is past. The caller supplies `now` once per query.
pub fn partition_by_time(
    appointments: &[Appointment],
    now: DateTime<Utc>,
) -> (Vec<Appointment>, Vec<Appointment>) {
    appointments
        .iter()
        .cloned()
        .partition(|a| a.appointment_date > now)
}

/// Returns the appointments referencing one patient, in collection order.
pub fn appointments_for_patient(
    appointments: &[Appointment],
    patient_id: &str,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| a.patient_id == patient_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use entities::generate_id;

    use super::*;

    fn patient(id: &str, name: &str) -> Patient {
        let dob = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();
        Patient::new(name, dob, "1234567890").with_id(id)
    }

    fn appointment(patient_id: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Appointment {
        let date = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
        Appointment::new(patient_id, "Visit", date).with_id(generate_id())
    }

    #[test]
    fn test_filter_matches_name_substring_case_insensitively() {
        let patients = vec![patient("p1", "John Doe"), patient("p2", "Jane Roe")];
        let appointments = vec![appointment("p1", 2025, 7, 12, 10, 0), appointment("p2", 2025, 7, 12, 11, 0)];

        let hits = filter_appointments(&appointments, &patients, "JOHN", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].patient_id, "p1");

        // The empty term matches every resolvable appointment.
        assert_eq!(filter_appointments(&appointments, &patients, "", None).len(), 2);
    }

    #[test]
    fn test_filter_combines_name_and_status() {
        let patients = vec![patient("p1", "John Doe")];
        let appointments = vec![
            appointment("p1", 2025, 7, 12, 10, 0).with_status(AppointmentStatus::Completed),
            appointment("p1", 2025, 7, 13, 10, 0),
        ];

        let hits = filter_appointments(
            &appointments,
            &patients,
            "doe",
            Some(AppointmentStatus::Completed),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_filter_excludes_dangling_references() {
        let patients = vec![patient("p1", "John Doe")];
        let appointments = vec![appointment("p1", 2025, 7, 12, 10, 0), appointment("ghost", 2025, 7, 12, 11, 0)];

        // The unresolved reference is dropped even with an empty term.
        let hits = filter_appointments(&appointments, &patients, "", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].patient_id, "p1");
    }

    #[test]
    fn test_group_by_day_buckets_and_sorts() {
        let appointments = vec![
            appointment("p1", 2025, 7, 13, 0, 1),
            appointment("p1", 2025, 7, 12, 10, 0),
            appointment("p1", 2025, 7, 12, 23, 0),
        ];

        let grouped = group_by_day(&appointments);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, NaiveDate::from_ymd_opt(2025, 7, 12).unwrap());
        assert_eq!(grouped[0].1.len(), 2);
        // Ties within a day keep the collection order.
        assert_eq!(grouped[0].1[0].appointment_date.format("%H").to_string(), "10");
        assert_eq!(grouped[1].0, NaiveDate::from_ymd_opt(2025, 7, 13).unwrap());
        assert_eq!(grouped[1].1.len(), 1);
    }

    #[test]
    fn test_partition_is_strictly_future() {
        let now = Utc.with_ymd_and_hms(2025, 7, 12, 10, 0, 0).unwrap();
        let appointments = vec![
            appointment("p1", 2025, 7, 12, 9, 0),
            appointment("p1", 2025, 7, 12, 10, 0),
            appointment("p1", 2025, 7, 12, 11, 0),
        ];

        let (upcoming, past) = partition_by_time(&appointments, now);
        // An appointment at exactly `now` counts as past.
        assert_eq!(upcoming.len(), 1);
        assert_eq!(past.len(), 2);
    }

    #[test]
    fn test_appointments_for_patient() {
        let appointments = vec![
            appointment("p1", 2025, 7, 12, 10, 0),
            appointment("p2", 2025, 7, 12, 11, 0),
            appointment("p1", 2025, 7, 14, 10, 0),
        ];
        let own = appointments_for_patient(&appointments, "p1");
        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|a| a.patient_id == "p1"));
    }
}
