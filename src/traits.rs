//! Seams between the configuration document and the host runtime.
//!
//! The document only *declares* behaviour.  Anything that actually happens
//! (a process starting, a window moving) goes through one of these traits, so
//! the document can be exercised against a test double as easily as against
//! a real window manager.

use crate::command::LazyCommand;

/// Something that can start external programs.
///
/// # Contract
///
/// * [`spawn`](Spawner::spawn) must **not** wait for the child to exit.
/// * `argv[0]` is the program; an empty `argv` is an error.
pub trait Spawner {
    /// The error type produced by this spawner.
    type Error: std::error::Error + Send + 'static;

    /// Start `argv` as a detached child process.
    fn spawn(&self, argv: &[String]) -> Result<(), Self::Error>;
}

/// A window-manager runtime able to evaluate lazy commands.
///
/// [`Spawn`](LazyCommand::Spawn) commands never reach
/// [`execute`](Host::execute); dispatch routes them through
/// [`Spawner::spawn`] instead.
pub trait Host: Spawner {
    /// Evaluate a non-spawn command against the current window state.
    fn execute(&self, command: &LazyCommand) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;

    /// A test double that records every call made to it.
    #[derive(Debug, Default)]
    pub struct MockHost {
        pub spawned: RefCell<Vec<Vec<String>>>,
        pub executed: RefCell<Vec<LazyCommand>>,
        /// When set, every call fails.
        pub broken: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    pub struct MockError;

    impl Spawner for MockHost {
        type Error = MockError;

        fn spawn(&self, argv: &[String]) -> Result<(), MockError> {
            if self.broken {
                return Err(MockError);
            }
            self.spawned.borrow_mut().push(argv.to_vec());
            Ok(())
        }
    }

    impl Host for MockHost {
        fn execute(&self, command: &LazyCommand) -> Result<(), MockError> {
            if self.broken {
                return Err(MockError);
            }
            self.executed.borrow_mut().push(command.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockHost;
    use super::*;

    #[test]
    fn mock_host_records_calls() {
        let host = MockHost::default();
        host.spawn(&["scrot".to_string()]).unwrap();
        host.execute(&LazyCommand::NextLayout).unwrap();
        assert_eq!(host.spawned.borrow().len(), 1);
        assert_eq!(host.executed.borrow()[0], LazyCommand::NextLayout);
    }

    #[test]
    fn broken_mock_fails() {
        let host = MockHost {
            broken: true,
            ..MockHost::default()
        };
        assert!(host.execute(&LazyCommand::Shutdown).is_err());
        assert!(host.executed.borrow().is_empty());
    }
}
