//! todocli - keyboard-driven terminal task tracker

use anyhow::Result;
use clap::Parser;
use todocli::cli::Cli;
use todocli::config::Config;
use todocli::logging;
use todocli::store::TaskStore;
use todocli::tui;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    // A broken config file still gets logged, to the flag/default log path
    let log_file = match &config {
        Ok(config) => config.resolve_log_file(&cli),
        Err(_) => Config::default().resolve_log_file(&cli),
    };
    logging::init(&log_file, cli.debug);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {:#}", e);
            return Err(e);
        }
    };

    let db_path = config.resolve_db_path(&cli);
    info!(path = %db_path.display(), "Starting");

    let store = match TaskStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let result = tui::run(&store);
    if let Err(e) = &result {
        error!("Terminal session failed: {}", e);
    }

    // Close failures are logged by the store and do not change the exit status
    let _ = store.close();

    result
}
