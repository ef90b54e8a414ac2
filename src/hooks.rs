//! Lifecycle hooks and the shell scripts they launch.
//!
//! Scripts live next to the configuration (`~/.config/<app>/`).  They are
//! started without waiting; whether they exist or are executable is only
//! discovered by the [`Spawner`] when the hook fires.

use crate::traits::Spawner;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Points in the host's lifecycle an action can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookEvent {
    /// First start of the session only; not repeated on reload.
    StartupOnce,
    /// Every start, including after a reload.
    Startup,
}

/// What a hook does when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookAction {
    /// Run an executable script with no arguments.
    SpawnScript(PathBuf),
}

impl HookAction {
    fn argv(&self) -> Vec<String> {
        match self {
            HookAction::SpawnScript(path) => vec![path.to_string_lossy().into_owned()],
        }
    }
}

/// An action subscribed to a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub event: HookEvent,
    pub action: HookAction,
}

/// Session autostart script.
pub fn autostart(config_dir: &Path) -> HookAction {
    HookAction::SpawnScript(config_dir.join("autostart.sh"))
}

/// Audio setup script.  Not subscribed to any event.
pub fn pulseaudio(config_dir: &Path) -> HookAction {
    HookAction::SpawnScript(config_dir.join("pulseaudio.sh"))
}

/// The hooks the document subscribes.
pub fn default_hooks(config_dir: &Path) -> Vec<Hook> {
    vec![Hook {
        event: HookEvent::StartupOnce,
        action: autostart(config_dir),
    }]
}

/// Run every action subscribed to `event`, in declaration order.
///
/// Returns the number of actions started.  The first spawn failure aborts
/// the remaining actions.
pub fn fire<S: Spawner>(hooks: &[Hook], event: HookEvent, spawner: &S) -> Result<usize, S::Error> {
    let mut started = 0;
    for hook in hooks.iter().filter(|h| h.event == event) {
        info!("{:?}: {:?}", event, hook.action);
        spawner.spawn(&hook.action.argv())?;
        started += 1;
    }
    Ok(started)
}
