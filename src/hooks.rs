//! Lifecycle callbacks the host invokes at fixed points.
//!
//! * [`on_screen_change`] runs whenever the output topology changes and
//!   always restarts the window manager.  Re-laying out bars incrementally
//!   is not attempted.
//! * [`Autostart`] runs once per session and launches the user's
//!   autostart script if there is one.

use crate::traits::{Host, Spawner};
use log::{debug, info};
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Directory under `~/.config` holding user files.
pub const APP_DIR: &str = "altile";

/// File name of the autostart script.
pub const AUTOSTART_SCRIPT: &str = "autostart.sh";

/// React to a monitor being plugged or unplugged.
pub fn on_screen_change<H: Host>(host: &H) -> Result<(), H::Error> {
    info!("screen configuration changed, restarting");
    host.restart()
}

/// The startup-once callback.
///
/// One value corresponds to one window-manager session: [`run`](Self::run)
/// does its work the first time and is a no-op afterwards.
#[derive(Debug)]
pub struct Autostart {
    script: PathBuf,
    fired: Cell<bool>,
}

impl Autostart {
    /// Autostart for the given home directory.
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            script: autostart_path(home.as_ref()),
            fired: Cell::new(false),
        }
    }

    /// Autostart for `$HOME`.  Returns `None` when `HOME` is unset.
    pub fn from_env() -> Option<Self> {
        std::env::var_os("HOME").map(Self::new)
    }

    /// Path of the script this hook looks for.
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Launch the script if it exists.
    ///
    /// Returns `true` if the script was started.  A missing script and a
    /// failed spawn both return `false` and are otherwise silent.
    pub fn run<S: Spawner>(&self, spawner: &S) -> bool {
        if self.fired.replace(true) {
            debug!("autostart already ran this session");
            return false;
        }
        if !self.script.exists() {
            debug!("no autostart script at {}", self.script.display());
            return false;
        }
        debug!("running {}", self.script.display());
        spawner.spawn_detached(&self.script, &[]).is_ok()
    }
}

/// `<home>/.config/altile`, the directory holding every user file.
pub fn config_dir(home: &Path) -> PathBuf {
    home.join(".config").join(APP_DIR)
}

/// `<home>/.config/altile/autostart.sh`.
pub fn autostart_path(home: &Path) -> PathBuf {
    config_dir(home).join(AUTOSTART_SCRIPT)
}

//  Tests
