//! Persistence module split across logical submodules.

mod connection;
mod doctors;
mod users;

pub use connection::{ensure_schema, Store};
pub use doctors::{create_doctor, fetch_doctor, fetch_doctors, update_doctor};
pub use users::{create_user, fetch_password_hash};
