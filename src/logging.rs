//! Log sink setup
//!
//! The TUI owns the terminal, so events go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn default_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    // Library events and the `todo` binary's own events
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={level},todo={level}", crate::config::APP_NAME))
    })
}

/// Installs the global subscriber writing to `path`. Returns false (and logs
/// nothing) when the file cannot be opened.
pub fn init(path: &Path, debug: bool) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(default_filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
