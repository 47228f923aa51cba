//! [`Spawner`] backed by `std::process`.

use crate::traits::Spawner;
use std::path::Path;
use std::process::{Command, Stdio};

/// Starts children with all standard streams closed and forgets them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

/// A program could not be started.
#[derive(Debug, thiserror::Error)]
#[error("failed to spawn {program}: {source}")]
pub struct SpawnError {
    program: String,
    #[source]
    source: std::io::Error,
}

impl Spawner for ProcessSpawner {
    type Error = SpawnError;

    fn spawn_detached(&self, program: &Path, args: &[&str]) -> Result<(), SpawnError> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| SpawnError {
                program: program.display().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_shell() {
        ProcessSpawner
            .spawn_detached(Path::new("/bin/sh"), &["-c", "exit 0"])
            .unwrap();
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = ProcessSpawner
            .spawn_detached(Path::new("/nonexistent/altile-test-binary"), &[])
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/altile-test-binary"));
    }
}
