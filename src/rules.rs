//! Window-matching predicates.
//!
//! A [`Match`] is evaluated against the properties of a newly mapped
//! window ([`WindowInfo`]).  Groups use matches to claim windows, and the
//! floating layout uses them to exempt windows from tiling.

use serde::{Deserialize, Serialize};

/// The window properties a predicate can inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Every string of the `WM_CLASS` property (instance and class).
    pub classes: Vec<String>,
    /// Window title.
    pub title: String,
    /// `WM_WINDOW_ROLE`, if the client sets one.
    pub role: Option<String>,
}

impl WindowInfo {
    /// Window with a single `WM_CLASS` value and an empty title.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Self::default()
        }
    }
}

/// A single predicate over one window property.
///
/// All comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// Any `WM_CLASS` string equals the value.
    Class(String),
    /// The title equals the value.
    Title(String),
    /// The window role equals the value.
    Role(String),
}

impl Match {
    pub fn class(value: impl Into<String>) -> Self {
        Match::Class(value.into())
    }

    pub fn title(value: impl Into<String>) -> Self {
        Match::Title(value.into())
    }

    pub fn role(value: impl Into<String>) -> Self {
        Match::Role(value.into())
    }

    /// The string this predicate compares against.
    pub fn value(&self) -> &str {
        match self {
            Match::Class(v) | Match::Title(v) | Match::Role(v) => v,
        }
    }

    /// Name of the inspected property, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Match::Class(_) => "class",
            Match::Title(_) => "title",
            Match::Role(_) => "role",
        }
    }

    /// Whether `window` satisfies this predicate.
    pub fn matches(&self, window: &WindowInfo) -> bool {
        match self {
            Match::Class(v) => window.classes.iter().any(|c| c == v),
            Match::Title(v) => window.title == *v,
            Match::Role(v) => window.role.as_deref() == Some(v.as_str()),
        }
    }
}

/// Whether any predicate in `rules` matches `window`.
pub fn any_match(rules: &[Match], window: &WindowInfo) -> bool {
    rules.iter().any(|m| m.matches(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matches_any_wm_class_string() {
        let w = WindowInfo {
            classes: vec!["Navigator".into(), "firefox".into()],
            ..WindowInfo::default()
        };
        assert!(Match::class("firefox").matches(&w));
        assert!(Match::class("Navigator").matches(&w));
        assert!(!Match::class("Firefox").matches(&w));
    }

    #[test]
    fn title_is_exact() {
        let w = WindowInfo {
            title: "Confirmation".into(),
            ..WindowInfo::default()
        };
        assert!(Match::title("Confirmation").matches(&w));
        assert!(!Match::title("Confirm").matches(&w));
    }

    #[test]
    fn role_requires_role_property() {
        let mut w = WindowInfo::with_class("gimp");
        assert!(!Match::role("pop-up").matches(&w));
        w.role = Some("pop-up".into());
        assert!(Match::role("pop-up").matches(&w));
    }

    #[test]
    fn any_match_is_or() {
        let rules = vec![Match::class("a"), Match::title("b")];
        assert!(any_match(&rules, &WindowInfo::with_class("a")));
        let titled = WindowInfo {
            title: "b".into(),
            ..WindowInfo::default()
        };
        assert!(any_match(&rules, &titled));
        assert!(!any_match(&rules, &WindowInfo::with_class("c")));
        assert!(!any_match(&[], &WindowInfo::with_class("a")));
    }

    #[test]
    fn wire_format() {
        let json = serde_json::to_string(&Match::role("pop-up")).unwrap();
        assert_eq!(json, r#"{"role":"pop-up"}"#);
    }
}
