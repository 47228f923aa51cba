//! Key bindings.
//!
//! The key table is a literal list plus a generated suffix: two bindings
//! per workspace group (see [`group_bindings`]).  A chord is the pair
//! `(modifier set, key symbol)`; the host lets a later binding shadow an
//! earlier one with the same chord, so [`KeyTable::duplicates`] exists to
//! catch that before the table is handed over.

use crate::command::{BarPosition, Command, Direction};
use crate::groups::{Group, SCRATCHPAD};
use log::warn;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

const MOD_MOD1: u8 = 0b0001;
const MOD_MOD4: u8 = 0b0010;
const MOD_SHIFT: u8 = 0b0100;
const MOD_CONTROL: u8 = 0b1000;

/// A single X11 modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Alt.
    Mod1,
    /// Super / Windows key.
    Mod4,
    Shift,
    Control,
}

impl Modifier {
    fn bit(self) -> u8 {
        match self {
            Modifier::Mod1 => MOD_MOD1,
            Modifier::Mod4 => MOD_MOD4,
            Modifier::Shift => MOD_SHIFT,
            Modifier::Control => MOD_CONTROL,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Modifier::Mod1 => "mod1",
            Modifier::Mod4 => "mod4",
            Modifier::Shift => "shift",
            Modifier::Control => "control",
        }
    }
}

/// A set of modifiers.
///
/// Stored as a bitmask so declaration order does not matter:
/// `[mod1, shift]` and `[shift, mod1]` are the same chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    /// Canonical order used for display and serialization.
    const ORDER: [Modifier; 4] = [
        Modifier::Mod1,
        Modifier::Mod4,
        Modifier::Shift,
        Modifier::Control,
    ];

    pub fn new(mods: &[Modifier]) -> Self {
        Self(mods.iter().fold(0, |acc, m| acc | m.bit()))
    }

    pub fn contains(self, m: Modifier) -> bool {
        self.0 & m.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Self::ORDER.into_iter().filter(move |m| self.contains(*m))
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for m in self.iter() {
            seq.serialize_element(&m)?;
        }
        seq.end()
    }
}

/// `(modifier set, key symbol)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    /// X keysym name, e.g. `"Return"`, `"comma"`, `"h"`.
    pub key: String,
}

impl KeyChord {
    pub fn new(mods: &[Modifier], key: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::new(mods),
            key: key.into(),
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.modifiers.iter() {
            write!(f, "{}+", m.name())?;
        }
        write!(f, "{}", self.key)
    }
}

/// A chord bound to a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyBinding {
    pub chord: KeyChord,
    pub command: Command,
    /// Human-readable description for cheat sheets.
    pub desc: String,
}

impl KeyBinding {
    pub fn new(
        mods: &[Modifier],
        key: impl Into<String>,
        command: Command,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            chord: KeyChord::new(mods, key),
            command,
            desc: desc.into(),
        }
    }

    /// One cheat-sheet line: `mod1+shift+h  Move left`.
    pub fn describe(&self) -> String {
        format!("{:<20} {}", self.chord.to_string(), self.desc)
    }
}

/// Commands launched from the key table.
#[derive(Debug, Clone, Copy)]
pub struct Programs<'a> {
    pub terminal: &'a str,
    pub launcher: &'a str,
    pub browser: &'a str,
    pub file_manager: &'a str,
}

/// The hand-written part of the key table.
pub fn literal_bindings(m: Modifier, programs: Programs<'_>) -> Vec<KeyBinding> {
    use Modifier::{Control, Shift};

    let spawn = |cmd: &str| Command::Spawn(cmd.to_string());
    let mut keys = vec![
        KeyBinding::new(&[m], "Return", spawn(programs.terminal), "Terminal"),
        KeyBinding::new(&[m], "d", spawn(programs.launcher), "Launcher"),
        KeyBinding::new(&[m], "b", spawn(programs.browser), "Browser"),
        KeyBinding::new(&[m], "e", spawn(programs.file_manager), "File manager"),
    ];

    // vim keys: focus, shuffle, grow
    for (key, dir) in ["h", "l", "j", "k"].into_iter().zip(Direction::ALL) {
        keys.push(KeyBinding::new(
            &[m],
            key,
            Command::Focus(dir),
            format!("Focus {}", dir),
        ));
    }
    for (key, dir) in ["h", "l", "j", "k"].into_iter().zip(Direction::ALL) {
        keys.push(KeyBinding::new(
            &[m, Shift],
            key,
            Command::Shuffle(dir),
            format!("Move {}", dir),
        ));
    }
    for (key, dir) in ["h", "l", "j", "k"].into_iter().zip(Direction::ALL) {
        keys.push(KeyBinding::new(
            &[m, Control],
            key,
            Command::Grow(dir),
            format!("Grow {}", dir),
        ));
    }

    keys.extend([
        KeyBinding::new(&[m], "equal", Command::Normalize, "Normalize sizes"),
        KeyBinding::new(&[m], "Tab", Command::NextLayout, "Next layout"),
        KeyBinding::new(&[m], "f", Command::ToggleFullscreen, "Fullscreen"),
        KeyBinding::new(&[m], "space", Command::ToggleFloating, "Toggle float"),
        KeyBinding::new(&[m], "w", Command::Kill, "Kill"),
        KeyBinding::new(&[m], "y", Command::ToggleMinimize, "Minimize"),
        KeyBinding::new(&[m], "comma", Command::PrevScreen, "Prev screen"),
        KeyBinding::new(&[m], "period", Command::NextScreen, "Next screen"),
        KeyBinding::new(
            &[m],
            "minus",
            Command::HideShowBar(BarPosition::Top),
            "Toggle bar",
        ),
        KeyBinding::new(&[m, Control], "r", Command::ReloadConfig, "Reload config"),
        KeyBinding::new(&[m, Shift], "q", Command::Shutdown, "Logout Qtile"),
        KeyBinding::new(&[m], "p", Command::SpawnCommandPrompt, "Spawn command"),
    ]);
    keys
}

/// Bindings that toggle the scratchpad drop-downs.
pub fn scratchpad_bindings(m: Modifier) -> Vec<KeyBinding> {
    let toggle = |name: &str| Command::DropdownToggle {
        scratchpad: SCRATCHPAD.into(),
        name: name.into(),
    };
    vec![
        KeyBinding::new(&[m], "s", toggle("term"), "Scratch terminal"),
        KeyBinding::new(&[m, Modifier::Shift], "s", toggle("mixer"), "Audio mixer"),
    ]
}

/// Digit keysym for the `i`-th group (0-based): `1`..`9`, then `0`.
fn group_key(i: usize) -> Option<String> {
    match i {
        0..=8 => Some((i + 1).to_string()),
        9 => Some("0".to_string()),
        _ => None,
    }
}

/// Generate the switch / move-and-follow pair for each group.
///
/// Groups are bound to the digit row in order, `1` to `9` and then `0`.
/// For up to ten groups exactly `2 * groups.len()` bindings are returned,
/// in group order; groups past the tenth get no key.
pub fn group_bindings(m: Modifier, groups: &[Group]) -> Vec<KeyBinding> {
    if groups.len() > 10 {
        warn!("only the first 10 of {} groups get digit keys", groups.len());
    }
    groups
        .iter()
        .enumerate()
        .filter_map(|(i, g)| group_key(i).map(|key| (key, g)))
        .flat_map(|(key, g)| {
            [
                KeyBinding::new(
                    &[m],
                    key.clone(),
                    Command::ToScreen(g.name.clone()),
                    format!("Switch to group {}", g.name),
                ),
                KeyBinding::new(
                    &[m, Modifier::Shift],
                    key,
                    Command::ToGroup {
                        group: g.name.clone(),
                        switch_group: true,
                    },
                    format!("Move focused window to group {}", g.name),
                ),
            ]
        })
        .collect()
}

/// Ordered key table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyTable {
    bindings: Vec<KeyBinding>,
}

impl KeyTable {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The binding the host would fire for `chord`.  A later declaration
    /// shadows an earlier one.
    pub fn lookup(&self, chord: &KeyChord) -> Option<&KeyBinding> {
        self.bindings.iter().rev().find(|b| b.chord == *chord)
    }

    /// Chords declared more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<&KeyChord> {
        let mut counts: HashMap<&KeyChord, usize> = HashMap::new();
        let mut order = Vec::new();
        for b in &self.bindings {
            let n = counts.entry(&b.chord).or_insert(0);
            *n += 1;
            if *n == 2 {
                order.push(&b.chord);
            }
        }
        order
    }
}
