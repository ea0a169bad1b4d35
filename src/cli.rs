//! Command-line flags

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "todo")]
#[command(about = "Keyboard-driven terminal task tracker")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database [default: ~/.todocli.db]
    #[arg(long, env = "TODOCLI_DB_PATH", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Path to the log file [default: ~/.todocli.log]
    #[arg(long, env = "TODOCLI_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
