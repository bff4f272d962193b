//! hangar TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use hangar_core::{config::Config, Storage};
use std::path::PathBuf;

/// Start the TUI.
///
/// `data_dir` overrides the default roster storage location (used by the
/// `--data-dir` flag and by tests that must not touch real state).
pub fn run(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let theme = theme::Theme::load_default();
    let storage = match data_dir {
        Some(dir) => Storage::new(dir),
        None => Storage::open_default(),
    };
    App::new(config, theme, storage)?.run()
}
