//! [`Spawner`] implementation backed by [`std::process::Command`].
//!
//! Children are started with null stdio and are never waited on; their exit
//! status is not observed.

use crate::traits::Spawner;
use log::{debug, warn};
use std::process::{Command, Stdio};

/// Fire-and-forget process launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

/// Errors that can occur when starting a child process.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("empty command line")]
    Empty,
    #[error("failed to spawn {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl Spawner for ProcessSpawner {
    type Error = SpawnError;

    fn spawn(&self, argv: &[String]) -> Result<(), SpawnError> {
        let (program, args) = argv.split_first().ok_or(SpawnError::Empty)?;
        debug!("spawning {:?}", argv);
        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                debug!("started {} (pid {})", program, child.id());
                Ok(())
            }
            Err(source) => {
                warn!("could not start {}: {}", program, source);
                Err(SpawnError::Io {
                    program: program.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_is_rejected() {
        assert!(matches!(ProcessSpawner::new().spawn(&[]), Err(SpawnError::Empty)));
    }

    #[test]
    fn missing_program_reports_io_error() {
        let r = ProcessSpawner::new().spawn(&["/nonexistent/tilerc-test-binary".to_string()]);
        match r {
            Err(SpawnError::Io { program, .. }) => {
                assert_eq!(program, "/nonexistent/tilerc-test-binary")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn existing_program_starts() {
        ProcessSpawner::new().spawn(&["true".to_string()]).unwrap();
    }
}
