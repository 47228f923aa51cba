//! Status bars and screens.
//!
//! [`top_bar`] is the one parametrised builder in the configuration: the
//! `primary` flag decides whether the bar carries the systray.  The tray is
//! inserted *before* the last widget (the clock), not appended, so the
//! clock stays in the corner.

use serde::{Deserialize, Serialize};

/// Font settings applied to every widget unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "JetBrainsMono Nerd Font".into(),
            fontsize: 12,
            padding: 6,
        }
    }
}

/// A bar element and its display parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    CurrentLayoutIcon {
        scale: f64,
    },
    GroupBox {
        highlight_method: String,
        rounded: bool,
        this_current_screen_border: String,
        this_screen_border: String,
        inactive: String,
        active: String,
    },
    Prompt,
    WindowName {
        max_chars: usize,
        fmt: String,
    },
    /// Flexible gap that pushes the following widgets to the right.
    Spacer,
    Net {
        format: String,
        /// `None` aggregates every interface.
        interface: Option<String>,
        /// Seconds between samples.
        update_interval: u32,
    },
    Cpu {
        format: String,
    },
    Memory {
        /// Unit letter, e.g. `"G"`.
        measure_mem: String,
        format: String,
    },
    Systray,
    Clock {
        /// strftime pattern.
        format: String,
    },
}

impl Widget {
    pub fn is_systray(&self) -> bool {
        matches!(self, Widget::Systray)
    }
}

/// A bar: ordered widgets, thickness and outer margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Thickness in pixels.
    pub size: u32,
    /// `[top, right, bottom, left]`.
    pub margin: [u32; 4],
}

impl Bar {
    pub fn systray_count(&self) -> usize {
        self.widgets.iter().filter(|w| w.is_systray()).count()
    }
}

/// One physical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub top: Option<Bar>,
}

/// Build the top bar.  Only the primary screen's bar gets a systray.
pub fn top_bar(primary: bool) -> Bar {
    let mut widgets = vec![
        Widget::CurrentLayoutIcon { scale: 0.7 },
        Widget::GroupBox {
            highlight_method: "block".into(),
            rounded: false,
            this_current_screen_border: "#8bd5ca".into(),
            this_screen_border: "#555555".into(),
            inactive: "#777777".into(),
            active: "#dddddd".into(),
        },
        Widget::Prompt,
        Widget::WindowName {
            max_chars: 60,
            fmt: "{}".into(),
        },
        Widget::Spacer,
        Widget::Net {
            format: "{down} ↓↑ {up}".into(),
            interface: None,
            update_interval: 2,
        },
        Widget::Cpu {
            format: "CPU {load_percent}%".into(),
        },
        Widget::Memory {
            measure_mem: "G".into(),
            format: "MEM {MemUsed:.1f}/{MemTotal:.0f}G".into(),
        },
        Widget::Clock {
            format: "%Y-%m-%d %H:%M".into(),
        },
    ];
    if primary {
        let before_clock = widgets.len() - 1;
        widgets.insert(before_clock, Widget::Systray);
    }
    Bar {
        widgets,
        size: 28,
        margin: [0, 0, 0, 0],
    }
}

/// Screens for `count` outputs; the first one is primary.
///
/// A `count` of zero still yields one screen.
pub fn screens(count: usize) -> Vec<Screen> {
    (0..count.max(1))
        .map(|i| Screen {
            top: Some(top_bar(i == 0)),
        })
        .collect()
}
