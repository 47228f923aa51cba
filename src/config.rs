//! User settings and the assembled configuration.
//!
//! [`Settings`] holds the handful of scalars a user may override from a
//! JSON file (which modifier is primary, which programs to launch).
//! [`Config::build`] evaluates the whole configuration from them into the
//! tables handed to the host.  A reload is simply another `build`; the
//! host swaps the old value for the new one.
//!
//! # Example
//!
//! ```json
//! {
//!   "modifier": "mod4",
//!   "terminal": "foot",
//!   "launcher": "fuzzel"
//! }
//! ```

use crate::bar::{screens, Screen, Widget, WidgetDefaults};
use crate::groups::{default_groups, default_scratchpad, Group, ScratchPad};
use crate::hooks::config_dir;
use crate::keys::{group_bindings, literal_bindings, scratchpad_bindings, KeyTable, Modifier, Programs};
use crate::layout::{default_layouts, FloatingLayout, Layout, LayoutTheme};
use crate::mouse::{default_mouse, MouseBinding};
use crate::policy::Policy;
use crate::rules::Match;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the user settings.
pub const SETTINGS_FILE: &str = "settings.json";

/// `<home>/.config/altile/settings.json`, next to the autostart script.
pub fn settings_path(home: &Path) -> PathBuf {
    config_dir(home).join(SETTINGS_FILE)
}

/// User-overridable settings.
///
/// Every field is optional; a minimal `{}` file is valid and unknown keys
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Primary chord prefix for every binding.
    pub modifier: Modifier,
    pub terminal: String,
    pub launcher: String,
    pub browser: String,
    pub file_manager: String,
    /// Program shown in the mixer drop-down.
    pub mixer: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modifier: Modifier::Mod1,
            terminal: "alacritty".into(),
            launcher: "rofi -show drun".into(),
            browser: "firefox".into(),
            file_manager: "thunar".into(),
            mixer: "pavucontrol".into(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let settings: Self = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(settings)
    }
}

/// Error from loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("key chord {0} is bound more than once")]
    DuplicateChord(String),
    #[error("drop-down {name:?}: {reason}")]
    InvalidDropDown { name: String, reason: String },
    #[error("empty {kind} match in {context}")]
    EmptyMatch { kind: &'static str, context: String },
    #[error("{field}: {value:?} is not a #rgb / #rrggbb colour")]
    InvalidColor { field: String, value: String },
}

/// Every table the host consumes.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub modifier: Modifier,
    pub keys: KeyTable,
    /// Normal groups in assignment order.  The scratchpad is kept apart.
    pub groups: Vec<Group>,
    pub scratchpad: ScratchPad,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub policy: Policy,
}

impl Config {
    /// Evaluate the configuration.
    pub fn build(settings: &Settings) -> Self {
        let m = settings.modifier;
        let groups = default_groups();

        let mut keys = literal_bindings(
            m,
            Programs {
                terminal: &settings.terminal,
                launcher: &settings.launcher,
                browser: &settings.browser,
                file_manager: &settings.file_manager,
            },
        );
        keys.extend(group_bindings(m, &groups));
        keys.extend(scratchpad_bindings(m));

        let widget_defaults = WidgetDefaults::default();
        Self {
            modifier: m,
            keys: KeyTable::new(keys),
            scratchpad: default_scratchpad(&settings.terminal, &settings.mixer),
            groups,
            layouts: default_layouts(&LayoutTheme::default()),
            floating_layout: FloatingLayout::default(),
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: screens(1),
            mouse: default_mouse(m),
            policy: Policy::default(),
        }
    }

    /// Check the invariants the host does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(chord) = self.keys.duplicates().first() {
            return Err(ConfigError::DuplicateChord(chord.to_string()));
        }

        for d in &self.scratchpad.dropdowns {
            d.validate()?;
        }

        for g in &self.groups {
            check_matches(&g.matches, &format!("group {}", g.name))?;
        }
        check_matches(&self.floating_layout.float_rules, "float rules")?;

        for layout in &self.layouts {
            if let Some(theme) = layout.theme() {
                check_color(&format!("{}.border_focus", layout.name()), &theme.border_focus)?;
                check_color(&format!("{}.border_normal", layout.name()), &theme.border_normal)?;
            }
        }
        check_color("floating.border_focus", &self.floating_layout.border_focus)?;

        for bar in self.screens.iter().filter_map(|s| s.top.as_ref()) {
            for w in &bar.widgets {
                if let Widget::GroupBox {
                    this_current_screen_border,
                    this_screen_border,
                    inactive,
                    active,
                    ..
                } = w
                {
                    check_color("groupbox.this_current_screen_border", this_current_screen_border)?;
                    check_color("groupbox.this_screen_border", this_screen_border)?;
                    check_color("groupbox.inactive", inactive)?;
                    check_color("groupbox.active", active)?;
                }
            }
        }
        Ok(())
    }
}

fn check_matches(matches: &[Match], context: &str) -> Result<(), ConfigError> {
    match matches.iter().find(|m| m.value().is_empty()) {
        Some(m) => Err(ConfigError::EmptyMatch {
            kind: m.kind(),
            context: context.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_color(field: &str, value: &str) -> Result<(), ConfigError> {
    let ok = value
        .strip_prefix('#')
        .map(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
