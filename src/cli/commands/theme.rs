//! Theme command handler

use super::apply_or_exit;
use crate::args::ThemeMode;
use grade_tracker::core::session::{Command, Session};
use grade_tracker::core::store::JsonFileStore;

/// Switch, or explicitly set, the persisted display theme
pub fn run(session: &mut Session<JsonFileStore>, mode: ThemeMode) {
    let command = match mode {
        ThemeMode::Toggle => Command::ToggleTheme,
        ThemeMode::Dark => Command::SetDarkMode(true),
        ThemeMode::Light => Command::SetDarkMode(false),
    };
    apply_or_exit(session, command, "change theme");
}
