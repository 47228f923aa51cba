//! Mouse bindings for floating windows.

use crate::command::Command;
use crate::keys::{Modifier, Modifiers};
use serde::{Deserialize, Serialize};

/// X pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left.
    Button1,
    /// Middle.
    Button2,
    /// Right.
    Button3,
}

/// What happens when the button is pressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    /// `start` runs on press, `command` on every motion event until release.
    Drag { command: Command, start: Command },
    Click { command: Command },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MouseBinding {
    pub modifiers: Modifiers,
    pub button: MouseButton,
    pub action: MouseAction,
}

/// Move with the left button, resize with the right, raise with the middle.
pub fn default_mouse(m: Modifier) -> Vec<MouseBinding> {
    let modifiers = Modifiers::new(&[m]);
    vec![
        MouseBinding {
            modifiers,
            button: MouseButton::Button1,
            action: MouseAction::Drag {
                command: Command::SetPositionFloating,
                start: Command::GetPosition,
            },
        },
        MouseBinding {
            modifiers,
            button: MouseButton::Button3,
            action: MouseAction::Drag {
                command: Command::SetSizeFloating,
                start: Command::GetSize,
            },
        },
        MouseBinding {
            modifiers,
            button: MouseButton::Button2,
            action: MouseAction::Click {
                command: Command::BringToFront,
            },
        },
    ]
}
