use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::GlobalFlags;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Spinners draw on stderr, so they are only shown when stderr is a terminal.
pub fn init(flags: &GlobalFlags) {
    let progress = std::io::stderr().is_terminal() && !flags.quiet;
    let _ = UI_PREFS.set(UiPrefs { progress });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
