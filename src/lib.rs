//! **altile** — an Alt-centric tiling window manager configuration.
//!
//! The crate declares, as typed and immutable data, everything a tiling
//! window manager needs from a user configuration: key and mouse bindings,
//! nine workspace groups plus a scratchpad, layouts, status bars, floating
//! rules and behaviour flags.  Tiling, focus handling and rendering belong
//! to the host window manager.
//!
//! # Architecture
//!
//! [`config::Config::build`] evaluates every table in one go from a small
//! set of user [`config::Settings`].  Two lifecycle callbacks live in
//! [`hooks`] and reach the outside world only through the traits in
//! [`traits`]:
//!
//! * [`traits::Host`] — the window manager itself (restart on screen change).
//! * [`traits::Spawner`] — fire-and-forget process launch (autostart script),
//!   implemented for real by [`process::ProcessSpawner`].

pub mod bar;
pub mod command;
pub mod config;
pub mod groups;
pub mod hooks;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod policy;
pub mod process;
pub mod rules;
pub mod traits;
