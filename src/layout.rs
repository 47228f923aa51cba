//! Tiling layouts and the floating rule set.

use crate::rules::{any_match, Match, WindowInfo};
use serde::{Deserialize, Serialize};

/// Visual parameters shared by the themed layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTheme {
    /// Gap around each window, in pixels.
    pub margin: u32,
    pub border_width: u32,
    pub border_focus: String,
    pub border_normal: String,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            margin: 8,
            border_width: 2,
            border_focus: "#8bd5ca".into(),
            border_normal: "#444444".into(),
        }
    }
}

/// A tiling strategy.  The host implements the arrangement itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// One large master pane plus a stack.
    MonadTall { theme: LayoutTheme },
    /// Vertical columns, each holding a stack.
    Columns { theme: LayoutTheme },
    /// One window at a time, maximised, undecorated.
    Max,
    /// No tiling.
    Floating { theme: LayoutTheme },
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::MonadTall { .. } => "monadtall",
            Layout::Columns { .. } => "columns",
            Layout::Max => "max",
            Layout::Floating { .. } => "floating",
        }
    }

    pub fn theme(&self) -> Option<&LayoutTheme> {
        match self {
            Layout::MonadTall { theme } | Layout::Columns { theme } | Layout::Floating { theme } => {
                Some(theme)
            }
            Layout::Max => None,
        }
    }
}

/// Layouts available in every group, cycled by `NextLayout`.
pub fn default_layouts(theme: &LayoutTheme) -> Vec<Layout> {
    vec![
        Layout::MonadTall {
            theme: theme.clone(),
        },
        Layout::Columns {
            theme: theme.clone(),
        },
        Layout::Max,
        Layout::Floating {
            theme: theme.clone(),
        },
    ]
}

/// Transient window classes that should never be tiled.
pub fn default_float_rules() -> Vec<Match> {
    [
        "confirm",
        "dialog",
        "download",
        "error",
        "file_progress",
        "notification",
        "splash",
        "toolbar",
    ]
    .into_iter()
    .map(Match::class)
    .collect()
}

/// Layout applied to windows exempted from tiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
    pub border_focus: String,
}

impl FloatingLayout {
    /// Whether `window` floats.  Rules are OR-ed, so their order is
    /// irrelevant, and group assignment is not consulted.
    pub fn should_float(&self, window: &WindowInfo) -> bool {
        any_match(&self.float_rules, window)
    }
}

impl Default for FloatingLayout {
    fn default() -> Self {
        let mut float_rules = default_float_rules();
        float_rules.extend([
            Match::class("pavucontrol"),
            Match::class("blueman-manager"),
            Match::class("nm-connection-editor"),
            Match::class("Lxappearance"),
            Match::title("Confirmation"),
            Match::title("Qalculate!"),
            Match::role("pop-up"),
        ]);
        Self {
            float_rules,
            border_focus: LayoutTheme::default().border_focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_order() {
        let names: Vec<_> = default_layouts(&LayoutTheme::default())
            .iter()
            .map(Layout::name)
            .collect();
        assert_eq!(names, ["monadtall", "columns", "max", "floating"]);
    }

    #[test]
    fn max_is_unthemed() {
        let layouts = default_layouts(&LayoutTheme::default());
        assert!(layouts[2].theme().is_none());
        assert_eq!(layouts[0].theme().unwrap().margin, 8);
        assert_eq!(layouts[3].theme().unwrap().border_width, 2);
    }

    #[test]
    fn float_rules_have_non_empty_values() {
        for rule in FloatingLayout::default().float_rules {
            assert!(!rule.value().is_empty(), "{:?}", rule);
        }
    }

    #[test]
    fn mixer_floats() {
        let fl = FloatingLayout::default();
        assert!(fl.should_float(&WindowInfo::with_class("pavucontrol")));
        assert!(fl.should_float(&WindowInfo::with_class("dialog")));
        assert!(!fl.should_float(&WindowInfo::with_class("Alacritty")));
    }

    #[test]
    fn title_and_role_rules() {
        let fl = FloatingLayout::default();
        let calc = WindowInfo {
            title: "Qalculate!".into(),
            ..WindowInfo::default()
        };
        assert!(fl.should_float(&calc));
        let popup = WindowInfo {
            classes: vec!["firefox".into()],
            title: "Extension".into(),
            role: Some("pop-up".into()),
        };
        assert!(fl.should_float(&popup));
    }

    #[test]
    fn rule_order_does_not_change_outcome() {
        let mut fl = FloatingLayout::default();
        let w = WindowInfo {
            classes: vec!["blueman-manager".into()],
            title: "Confirmation".into(),
            role: None,
        };
        let before = fl.should_float(&w);
        fl.float_rules.reverse();
        assert_eq!(fl.should_float(&w), before);
        assert!(before);
    }

    #[test]
    fn layout_wire_format() {
        let json = serde_json::to_value(Layout::Max).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "max" }));
    }
}
