//! Traits that decouple the lifecycle callbacks from the host window
//! manager and from the operating system.
//!
//! The callbacks in [`hooks`](crate::hooks) only depend on these
//! abstractions, so they can run against the real host, a process spawner,
//! or a test double.

use std::path::Path;

/// The window-manager process this configuration is loaded into.
pub trait Host {
    /// The error type produced by the host.
    type Error: std::error::Error + Send + 'static;

    /// Restart the whole window manager, re-reading the configuration.
    fn restart(&self) -> Result<(), Self::Error>;
}

/// Launches programs without waiting for them.
///
/// # Contract
///
/// * [`spawn_detached`](Spawner::spawn_detached) returns as soon as the
///   child has been started.
/// * The caller never learns the child's exit status.
pub trait Spawner {
    /// The error type produced when a program cannot be started.
    type Error: std::error::Error + Send + 'static;

    /// Start `program` with `args` in the background.
    fn spawn_detached(&self, program: &Path, args: &[&str]) -> Result<(), Self::Error>;
}
