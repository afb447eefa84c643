//! Ratatui front-end. It keeps only widget state (form buffers, list cursor,
//! focused field) and routes every user action through
//! [`crate::handlers::dispatch`].

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
