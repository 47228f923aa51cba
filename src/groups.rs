//! Groups (workspaces) and the scratchpad.
//!
//! Groups are declared in a fixed order.  That order is part of the
//! contract: a new window goes to the *first* group whose predicates match
//! it (see [`assign_group`]), so reordering the list changes where windows
//! land.

use crate::config::ConfigError;
use crate::rules::{Match, WindowInfo};
use serde::{Deserialize, Serialize};

/// Name of the scratchpad group.
pub const SCRATCHPAD: &str = "scratch";

/// A named workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Identifier used by commands (`ToScreen`, `ToGroup`).
    pub name: String,
    /// Text shown in the bar's group box.
    pub label: String,
    /// Windows matching any of these are placed here on creation.
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Group {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            matches: Vec::new(),
        }
    }

    /// Attach window-matching predicates.
    pub fn with_matches(mut self, matches: impl IntoIterator<Item = Match>) -> Self {
        self.matches.extend(matches);
        self
    }

    /// Whether this group claims `window`.
    pub fn claims(&self, window: &WindowInfo) -> bool {
        self.matches.iter().any(|m| m.matches(window))
    }
}

/// The nine workspaces, in declaration order.
///
/// Labels are Nerd Font glyphs.
pub fn default_groups() -> Vec<Group> {
    vec![
        Group::new("1", "\u{f120}").with_matches([Match::class("Alacritty")]),
        Group::new("2", "\u{f269}").with_matches([Match::class("firefox")]),
        Group::new("3", "\u{f121}"),
        Group::new("4", "\u{f2c6}").with_matches([Match::class("TelegramDesktop")]),
        Group::new("5", "\u{f07b}"),
        Group::new("6", "\u{f001}"),
        Group::new("7", "\u{f03d}"),
        Group::new("8", "\u{f1b6}"),
        Group::new("9", "\u{f013}"),
    ]
}

/// Pick the group a newly created window belongs to.
///
/// Groups are tried in order and the first one whose predicates match wins.
/// `None` means the window stays in whatever group is currently active.
pub fn assign_group<'a>(groups: &'a [Group], window: &WindowInfo) -> Option<&'a Group> {
    groups.iter().find(|g| g.claims(window))
}

//  Scratchpad

/// A toggleable drop-down window.
///
/// The program is spawned lazily on the first toggle; later toggles only
/// show or hide the existing window.  Geometry is given as fractions of the
/// containing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDown {
    pub name: String,
    /// Command line to launch.
    pub command: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// Window alpha, `0.0` transparent to `1.0` opaque.
    pub opacity: f64,
}

impl DropDown {
    /// Check that all fractions are in `(0, 1]` and opacity in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("width", self.width),
            ("height", self.height),
            ("x", self.x),
            ("y", self.y),
        ];
        for (field, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidDropDown {
                    name: self.name.clone(),
                    reason: format!("{} = {} is outside (0, 1]", field, value),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidDropDown {
                name: self.name.clone(),
                reason: format!("opacity = {} is outside [0, 1]", self.opacity),
            });
        }
        Ok(())
    }
}

/// A special group holding drop-downs.  It is never shown by group
/// switching, only through [`Command::DropdownToggle`](crate::command::Command::DropdownToggle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchPad {
    pub name: String,
    pub dropdowns: Vec<DropDown>,
}

impl ScratchPad {
    /// Look up a drop-down by name.
    pub fn dropdown(&self, name: &str) -> Option<&DropDown> {
        self.dropdowns.iter().find(|d| d.name == name)
    }
}

/// The quake-style terminal and the audio mixer.
pub fn default_scratchpad(terminal: &str, mixer: &str) -> ScratchPad {
    ScratchPad {
        name: SCRATCHPAD.into(),
        dropdowns: vec![
            DropDown {
                name: "term".into(),
                command: terminal.into(),
                width: 0.9,
                height: 0.5,
                x: 0.05,
                y: 0.1,
                opacity: 0.95,
            },
            DropDown {
                name: "mixer".into(),
                command: mixer.into(),
                width: 0.5,
                height: 0.6,
                x: 0.25,
                y: 0.2,
                opacity: 0.95,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_groups_named_by_index() {
        let groups = default_groups();
        assert_eq!(groups.len(), 9);
        for (i, g) in groups.iter().enumerate() {
            assert_eq!(g.name, (i + 1).to_string());
            assert!(!g.label.is_empty());
        }
    }

    #[test]
    fn windows_go_to_first_matching_group() {
        let groups = default_groups();
        let term = WindowInfo::with_class("Alacritty");
        assert_eq!(assign_group(&groups, &term).map(|g| g.name.as_str()), Some("1"));
        let tg = WindowInfo::with_class("TelegramDesktop");
        assert_eq!(assign_group(&groups, &tg).map(|g| g.name.as_str()), Some("4"));
    }

    #[test]
    fn unmatched_window_stays_in_active_group() {
        let groups = default_groups();
        assert!(assign_group(&groups, &WindowInfo::with_class("gimp")).is_none());
    }

    #[test]
    fn group_order_decides_overlapping_matches() {
        let a = Group::new("a", "A").with_matches([Match::class("x")]);
        let b = Group::new("b", "B").with_matches([Match::class("x")]);
        let w = WindowInfo::with_class("x");

        let forward = vec![a.clone(), b.clone()];
        assert_eq!(assign_group(&forward, &w).unwrap().name, "a");

        let reversed = vec![b, a];
        assert_eq!(assign_group(&reversed, &w).unwrap().name, "b");
    }

    #[test]
    fn default_dropdowns_are_valid() {
        let pad = default_scratchpad("alacritty", "pavucontrol");
        assert_eq!(pad.name, SCRATCHPAD);
        assert_eq!(pad.dropdowns.len(), 2);
        for d in &pad.dropdowns {
            d.validate().unwrap();
        }
        assert_eq!(pad.dropdown("term").unwrap().command, "alacritty");
        assert_eq!(pad.dropdown("mixer").unwrap().command, "pavucontrol");
        assert!(pad.dropdown("missing").is_none());
    }

    #[test]
    fn zero_width_is_rejected() {
        let mut d = default_scratchpad("t", "m").dropdowns.remove(0);
        d.width = 0.0;
        assert!(matches!(d.validate(), Err(ConfigError::InvalidDropDown { .. })));
    }

    #[test]
    fn full_screen_fraction_is_allowed() {
        let mut d = default_scratchpad("t", "m").dropdowns.remove(0);
        d.width = 1.0;
        d.height = 1.0;
        d.validate().unwrap();
    }

    #[test]
    fn opacity_bounds() {
        let mut d = default_scratchpad("t", "m").dropdowns.remove(0);
        d.opacity = 0.0;
        d.validate().unwrap();
        d.opacity = 1.2;
        assert!(d.validate().is_err());
    }

    #[test]
    fn nan_fraction_is_rejected() {
        let mut d = default_scratchpad("t", "m").dropdowns.remove(0);
        d.y = f64::NAN;
        assert!(d.validate().is_err());
    }
}
