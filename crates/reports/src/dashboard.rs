//! Dashboard aggregates.

use chrono::{DateTime, Utc};
use entities::{Appointment, AppointmentStatus, Patient};

/// How many upcoming appointments the dashboard lists.
pub const UPCOMING_LIMIT: usize = 10;
/// How many top patients the dashboard lists.
pub const TOP_PATIENTS_LIMIT: usize = 3;

/// A patient together with their visit count.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientVisits {
    /// The patient.
    pub patient: Patient,
    /// Number of appointments referencing them.
    pub visits: usize,
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    /// Total number of patients.
    pub total_patients: usize,
    /// Appointments marked Completed.
    pub completed: usize,
    /// Everything not Completed.
    pub pending: usize,
    /// Sum of appointment costs; an absent cost counts as zero.
    pub total_revenue: f64,
    /// Next appointments, ascending by date, capped at [`UPCOMING_LIMIT`].
    pub upcoming: Vec<Appointment>,
    /// Most-visiting patients, capped at [`TOP_PATIENTS_LIMIT`].
    pub top_patients: Vec<PatientVisits>,
}

/// Counts appointments marked Completed.
pub fn completed_count(appointments: &[Appointment]) -> usize {
    appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count()
}

/// Counts everything not Completed.
pub fn pending_count(appointments: &[Appointment]) -> usize {
    appointments.len() - completed_count(appointments)
}

/// Sums appointment costs, counting an absent cost as zero.
pub fn total_revenue(appointments: &[Appointment]) -> f64 {
    appointments.iter().map(|a| a.cost.unwrap_or(0.0)).sum()
}

/// Returns the strictly-future appointments ascending by date, capped at
/// `limit`.
pub fn upcoming_appointments(
    appointments: &[Appointment],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.appointment_date > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|a| a.appointment_date);
    upcoming.truncate(limit);
    upcoming
}

/// Ranks patients by how many appointments reference them, descending;
/// ties keep the patient collection order. Capped at `limit`.
pub fn top_patients_by_visits(
    patients: &[Patient],
    appointments: &[Appointment],
    limit: usize,
) -> Vec<PatientVisits> {
    let mut ranked: Vec<PatientVisits> = patients
        .iter()
        .map(|p| PatientVisits {
            visits: appointments.iter().filter(|a| a.patient_id == p.id).count(),
            patient: p.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.visits.cmp(&a.visits));
    ranked.truncate(limit);
    ranked
}

/// Computes every dashboard aggregate from one pair of snapshots.
pub fn dashboard_stats(
    patients: &[Patient],
    appointments: &[Appointment],
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        total_patients: patients.len(),
        completed: completed_count(appointments),
        pending: pending_count(appointments),
        total_revenue: total_revenue(appointments),
        upcoming: upcoming_appointments(appointments, now, UPCOMING_LIMIT),
        top_patients: top_patients_by_visits(patients, appointments, TOP_PATIENTS_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use entities::generate_id;

    use super::*;

    fn patient(id: &str, name: &str) -> Patient {
        let dob = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();
        Patient::new(name, dob, "1234567890").with_id(id)
    }

    fn appointment(patient_id: &str, day: u32, hour: u32) -> Appointment {
        let date = Utc.with_ymd_and_hms(2025, 7, day, hour, 0, 0).unwrap();
        Appointment::new(patient_id, "Visit", date).with_id(generate_id())
    }

    #[test]
    fn test_counts_split_on_completed() {
        let appointments = vec![
            appointment("p1", 12, 10).with_status(AppointmentStatus::Completed),
            appointment("p1", 13, 10),
            appointment("p1", 14, 10),
        ];
        assert_eq!(completed_count(&appointments), 1);
        assert_eq!(pending_count(&appointments), 2);
    }

    #[test]
    fn test_revenue_counts_absent_cost_as_zero() {
        let appointments = vec![
            appointment("p1", 12, 10).with_cost(80.0),
            appointment("p1", 13, 10).with_cost(50.0),
            appointment("p1", 14, 10),
        ];
        assert_eq!(total_revenue(&appointments), 130.0);
    }

    #[test]
    fn test_upcoming_is_sorted_and_capped() {
        let now = Utc.with_ymd_and_hms(2025, 7, 12, 0, 0, 0).unwrap();
        let appointments = vec![
            appointment("p1", 20, 10),
            appointment("p1", 11, 10),
            appointment("p1", 14, 10),
            appointment("p1", 13, 10),
        ];

        let upcoming = upcoming_appointments(&appointments, now, 2);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].appointment_date.format("%d").to_string(), "13");
        assert_eq!(upcoming[1].appointment_date.format("%d").to_string(), "14");
    }

    #[test]
    fn test_top_patients_ranked_with_stable_ties() {
        let patients = vec![
            patient("p1", "John Doe"),
            patient("p2", "Jane Roe"),
            patient("p3", "Mary Major"),
            patient("p4", "Rick Roll"),
        ];
        let appointments = vec![
            appointment("p2", 12, 10),
            appointment("p2", 13, 10),
            appointment("p3", 12, 11),
            appointment("p4", 12, 12),
        ];

        let top = top_patients_by_visits(&patients, &appointments, 3);
        assert_eq!(top[0].patient.id, "p2");
        assert_eq!(top[0].visits, 2);
        // p3 and p4 tie on one visit and keep the collection order; p1 with
        // zero visits falls off the capped list.
        assert_eq!(top[1].patient.id, "p3");
        assert_eq!(top[2].patient.id, "p4");
    }

    #[test]
    fn test_dashboard_stats_bundles_everything() {
        let now = Utc.with_ymd_and_hms(2025, 7, 12, 0, 0, 0).unwrap();
        let patients = vec![patient("p1", "John Doe")];
        let appointments = vec![
            appointment("p1", 11, 10)
                .with_status(AppointmentStatus::Completed)
                .with_cost(80.0),
            appointment("p1", 20, 15).with_cost(50.0),
        ];

        let stats = dashboard_stats(&patients, &appointments, now);
        assert_eq!(stats.total_patients, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total_revenue, 130.0);
        assert_eq!(stats.upcoming.len(), 1);
        assert_eq!(stats.top_patients.len(), 1);
    }
}
