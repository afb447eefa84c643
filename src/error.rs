//! Typed errors for input the user can fix. Anything else (I/O, SQLite,
//! hashing) travels as `anyhow::Error` with context attached.

use thiserror::Error;

/// Raised when stored or typed text does not name a known specialty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown specialty: {0}")]
pub struct ParseSpecialtyError(pub String);

/// Form validation failures, phrased for the footer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required.")]
    MissingEmail,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Password must be at most 72 bytes.")]
    PasswordTooLong,
    #[error("Date must be in YYYY-MM-DD format.")]
    InvalidDate,
    #[error("Time must be in HH:MM format.")]
    InvalidTime,
}
