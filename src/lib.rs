//! Core library surface for the medical appointment booking application.
//!
//! The persistence layer (`db`) stores users and doctors in SQLite. The service
//! modules (`auth`, `directory`, `booking`) implement the user-facing
//! operations. `session` and `handlers` turn user actions into state
//! transitions and view models, and `ui` draws those views in the terminal.
pub mod auth;
pub mod booking;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod session;
pub mod ui;

pub use auth::{login, logout, register};
pub use db::Store;
pub use directory::{add_doctor, find_doctor, list_doctors, update_doctor};
pub use handlers::{dispatch, Action, Notice, NoticeKind, Transition, View};
pub use models::{Doctor, DoctorInput, Specialty, User, DEFAULT_IMAGE_URL};
pub use session::{Page, Session};
pub use ui::{run_app, App};
