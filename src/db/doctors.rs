use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::warn;

use crate::models::{Doctor, Specialty};

/// Retrieve every doctor in insertion order. Rows whose specialty is not one
/// of the known values are logged and left out.
pub fn fetch_doctors(conn: &Connection) -> Result<Vec<Doctor>> {
    let mut stmt = conn
        .prepare("SELECT id, name, specialty, rating, image_url FROM doctors ORDER BY id")
        .context("failed to prepare doctor query")?;

    let rows = stmt
        .query_map([], doctor_from_row)
        .context("failed to load doctors")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect doctors")?;

    Ok(rows.into_iter().filter_map(known_specialty).collect())
}

/// Fetch a single doctor by primary key. A row with an unknown specialty is
/// reported as missing, matching its absence from [`fetch_doctors`].
pub fn fetch_doctor(conn: &Connection, id: i64) -> Result<Option<Doctor>> {
    let row = conn
        .query_row(
            "SELECT id, name, specialty, rating, image_url FROM doctors WHERE id = ?1",
            params![id],
            doctor_from_row,
        )
        .optional()
        .context("failed to load doctor")?;

    Ok(row.and_then(known_specialty))
}

/// Insert a doctor row and hand back the hydrated struct.
pub fn create_doctor(
    conn: &Connection,
    name: &str,
    specialty: Specialty,
    rating: f64,
    image_url: &str,
) -> Result<Doctor> {
    conn.execute(
        "INSERT INTO doctors (name, specialty, rating, image_url) VALUES (?1, ?2, ?3, ?4)",
        params![name, specialty, rating, image_url],
    )
    .context("failed to insert doctor")?;

    Ok(Doctor {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        specialty,
        rating,
        image_url: image_url.to_string(),
    })
}

/// Overwrite every column of a doctor. Returns the number of rows touched,
/// which is zero when the id does not exist.
pub fn update_doctor(
    conn: &Connection,
    id: i64,
    name: &str,
    specialty: Specialty,
    rating: f64,
    image_url: &str,
) -> Result<usize> {
    conn.execute(
        "UPDATE doctors SET name = ?1, specialty = ?2, rating = ?3, image_url = ?4 WHERE id = ?5",
        params![name, specialty, rating, image_url, id],
    )
    .context("failed to update doctor")
}

/// A row as stored, before the specialty text is checked.
struct DoctorRow {
    id: i64,
    name: String,
    specialty: String,
    rating: f64,
    image_url: String,
}

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<DoctorRow> {
    Ok(DoctorRow {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
        rating: row.get(3)?,
        image_url: row.get(4)?,
    })
}

fn known_specialty(row: DoctorRow) -> Option<Doctor> {
    match row.specialty.parse::<Specialty>() {
        Ok(specialty) => Some(Doctor {
            id: row.id,
            name: row.name,
            specialty,
            rating: row.rating,
            image_url: row.image_url,
        }),
        Err(err) => {
            warn!(doctor_id = row.id, error = %err, "skipping doctor with unknown specialty");
            None
        }
    }
}
