//! Behaviour flags passed to the host as plain scalars.

use serde::{Deserialize, Serialize};

/// How the host reacts when a client asks for focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnWindowActivation {
    /// Focus only if the window is on the current group, otherwise mark urgent.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Let clients that request fullscreen have it.
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnWindowActivation,
    /// Raise floating windows when clicked.
    pub bring_front_click: bool,
    /// Move the pointer along with focus.
    pub cursor_warp: bool,
    /// Window-manager name reported to clients.  `LG3D` keeps older Java
    /// toolkits from drawing blank windows.
    pub wmname: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnWindowActivation::Smart,
            bring_front_click: true,
            cursor_warp: false,
            wmname: "LG3D".into(),
        }
    }
}
