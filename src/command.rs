//! Commands and types used throughout altile.
//!
//! This module defines the vocabulary every table shares: [`Command`]
//! describes every action the host window manager can be asked to perform
//! from a key or mouse binding, and [`Direction`] / [`BarPosition`] provide
//! the supporting data types.
//!
//! Commands are plain data, serialized for the host.  The host interprets
//! them; nothing here touches a window or a process.

use serde::Serialize;
use std::fmt;

/// Direction for focus, shuffle and grow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in vim key order (`h`, `l`, `j`, `k`).
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Screen edge a bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for BarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarPosition::Top => write!(f, "top"),
            BarPosition::Bottom => write!(f, "bottom"),
            BarPosition::Left => write!(f, "left"),
            BarPosition::Right => write!(f, "right"),
        }
    }
}

/// Every action a binding can hand to the host.
///
/// Commands are produced by the key and mouse tables and consumed by the
/// host's own engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Command {
    /// Launch a command line, resolved on the host `PATH`.
    Spawn(String),

    /// Open the bar's command prompt.
    SpawnCommandPrompt,

    //  Layout

    /// Move focus to the neighbouring window.
    Focus(Direction),
    /// Swap the focused window with its neighbour.
    Shuffle(Direction),
    /// Grow the focused window towards the given side.
    Grow(Direction),
    /// Reset all window sizes in the current layout.
    Normalize,
    /// Cycle to the next layout of the current group.
    NextLayout,

    //  Window

    ToggleFullscreen,
    ToggleFloating,
    Kill,
    ToggleMinimize,
    /// Move a floating window while dragging.
    SetPositionFloating,
    /// Resize a floating window while dragging.
    SetSizeFloating,
    /// Starting point for a position drag.
    GetPosition,
    /// Starting point for a size drag.
    GetSize,
    BringToFront,

    //  Screens

    PrevScreen,
    NextScreen,
    /// Hide or show the bar on the given edge.
    HideShowBar(BarPosition),

    //  Session

    ReloadConfig,
    Restart,
    Shutdown,

    //  Groups

    /// Show the named group on the current screen.
    ToScreen(String),
    /// Move the focused window to `group`; follow it when `switch_group`.
    ToGroup { group: String, switch_group: bool },
    /// Show or hide a scratchpad drop-down.
    DropdownToggle { scratchpad: String, name: String },
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn direction_serializes_as_variant_name() {
        let json = serde_json::to_string(&Command::Grow(Direction::Down)).unwrap();
        assert_eq!(json, r#"{"Grow":"Down"}"#);
    }

    #[test]
    fn vim_order() {
        assert_eq!(
            Direction::ALL,
            [Direction::Left, Direction::Right, Direction::Down, Direction::Up]
        );
    }

    #[test]
    fn bar_position_serializes_lowercase() {
        let json = serde_json::to_string(&Command::HideShowBar(BarPosition::Top)).unwrap();
        assert_eq!(json, r#"{"HideShowBar":"top"}"#);
    }

    #[test]
    fn group_command_wire_format() {
        let cmd = Command::ToGroup {
            group: "3".into(),
            switch_group: true,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"ToGroup":{"group":"3","switch_group":true}}"#);
    }

    #[test]
    fn command_equality() {
        assert_eq!(Command::Focus(Direction::Left), Command::Focus(Direction::Left));
        assert_ne!(Command::Focus(Direction::Left), Command::Shuffle(Direction::Left));
        assert_ne!(
            Command::Spawn("alacritty".into()),
            Command::Spawn("firefox".into())
        );
    }
}
