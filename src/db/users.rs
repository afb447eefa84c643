use anyhow::{Context, Result};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, OptionalExtension};

use crate::models::User;

/// Insert a user row. `Ok(None)` means the email is already taken; any other
/// failure is returned as an error.
pub fn create_user(conn: &Connection, email: &str, password_hash: &str) -> Result<Option<User>> {
    let inserted = conn.execute(
        "INSERT INTO users (email, password) VALUES (?1, ?2)",
        params![email, password_hash],
    );

    match inserted {
        Ok(_) => Ok(Some(User {
            id: conn.last_insert_rowid(),
            email: email.to_string(),
            password: password_hash.to_string(),
        })),
        Err(err) if is_constraint_violation(&err) => Ok(None),
        Err(err) => Err(err).context("failed to insert user"),
    }
}

/// Look up the stored password hash for an email.
pub fn fetch_password_hash(conn: &Connection, email: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT password FROM users WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )
    .optional()
    .context("failed to query user")
}

/// The only constraint on `users` is the unique email, so any constraint
/// violation on insert means a duplicate.
fn is_constraint_violation(err: &SqlError) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    )
}
