//! Registration and login on top of bcrypt.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::db::{create_user, fetch_password_hash, Store};
use crate::error::ValidationError;
use crate::session::Session;

/// bcrypt only reads this many bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash the password and create the account. Returns `false` when the email is
/// already registered, and a [`ValidationError::PasswordTooLong`] error when
/// the password would be truncated by bcrypt.
pub fn register(store: &Store, email: &str, password: &str) -> Result<bool> {
    if password.len() > MAX_PASSWORD_BYTES {
        info!(%email, "registration rejected: password too long");
        return Err(ValidationError::PasswordTooLong.into());
    }
    let hashed = bcrypt::hash(password, store.hash_cost()).context("failed to hash password")?;

    let conn = store.connect()?;
    match create_user(&conn, email, &hashed)? {
        Some(user) => {
            info!(user_id = user.id, %email, "registered user");
            Ok(true)
        }
        None => {
            info!(%email, "registration rejected: email already exists");
            Ok(false)
        }
    }
}

/// Check the credentials and, on success, mark the session as logged in.
/// Unknown emails and wrong passwords both return `false`.
pub fn login(store: &Store, session: &mut Session, email: &str, password: &str) -> Result<bool> {
    // Never registered, and bcrypt would compare only its prefix.
    if password.len() > MAX_PASSWORD_BYTES {
        info!(%email, "login failed: password too long");
        return Ok(false);
    }

    let stored = {
        let conn = store.connect()?;
        fetch_password_hash(&conn, email)?
    };

    let Some(hash) = stored else {
        info!(%email, "login failed");
        return Ok(false);
    };

    let verified = match bcrypt::verify(password, &hash) {
        Ok(verified) => verified,
        Err(err) => {
            warn!(%email, error = %err, "stored password hash could not be read");
            false
        }
    };

    if verified {
        session.sign_in(email);
        info!(%email, "login succeeded");
    } else {
        info!(%email, "login failed");
    }
    Ok(verified)
}

/// Forget everything about the current session.
pub fn logout(session: &mut Session) {
    if let Some(email) = session.user() {
        info!(%email, "logged out");
    }
    *session = Session::new();
}
