//! Binary entry point: resolve the data directory, start file logging, open
//! the SQLite store, and drive the Ratatui event loop until the user exits.
use medical_booking::config::Settings;
use medical_booking::{logging, run_app, App, Session, Store};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    settings.ensure_dirs()?;
    let _log_guard = logging::init(&settings.log_dir)?;

    let store = Store::open(&settings.db_path)?.with_hash_cost(settings.hash_cost);
    info!(db = %store.path().display(), "store ready");

    let mut app = App::new(store, Session::new())?;
    let result = run_app(&mut app);
    if let Err(err) = &result {
        tracing::error!(error = %err, "application terminated with an error");
    }
    result
}
