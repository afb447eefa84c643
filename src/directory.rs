//! The doctor directory: listing with search, adding and editing.

use anyhow::Result;
use tracing::{info, warn};

use crate::db::{self, Store};
use crate::models::{Doctor, DoctorInput};

/// All doctors in store order, optionally narrowed to those whose name or
/// specialty contains `filter` (case-insensitive).
pub fn list_doctors(store: &Store, filter: Option<&str>) -> Result<Vec<Doctor>> {
    let conn = store.connect()?;
    let mut doctors = db::fetch_doctors(&conn)?;
    if let Some(query) = filter.filter(|query| !query.is_empty()) {
        doctors.retain(|doctor| doctor.matches(query));
    }
    Ok(doctors)
}

pub fn find_doctor(store: &Store, id: i64) -> Result<Option<Doctor>> {
    let conn = store.connect()?;
    db::fetch_doctor(&conn, id)
}

/// Store a new doctor, substituting the placeholder portrait for a blank URL.
pub fn add_doctor(store: &Store, input: &DoctorInput) -> Result<Doctor> {
    let conn = store.connect()?;
    let doctor = db::create_doctor(
        &conn,
        &input.name,
        input.specialty,
        input.rating,
        input.resolved_image_url(),
    )?;
    info!(doctor_id = doctor.id, name = %doctor.name, "added doctor");
    Ok(doctor)
}

/// Overwrite every field of doctor `id`. Returns `false`, leaving the store
/// untouched, when no such doctor exists.
pub fn update_doctor(store: &Store, id: i64, input: &DoctorInput) -> Result<bool> {
    let conn = store.connect()?;
    let updated = db::update_doctor(
        &conn,
        id,
        &input.name,
        input.specialty,
        input.rating,
        input.resolved_image_url(),
    )?;

    if updated == 0 {
        warn!(doctor_id = id, "update skipped: doctor not found");
        Ok(false)
    } else {
        info!(doctor_id = id, "updated doctor");
        Ok(true)
    }
}
