//! todocli library - task store and terminal interface for the `todo` binary

pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod tui;
