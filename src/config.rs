//! User-tunable settings.
//!
//! The document itself is fixed code; the few values that differ between
//! machines (home directory, terminal, network interface, group labels) are
//! read from a JSON file at `$XDG_CONFIG_HOME/tilerc/settings.json`.
//!
//! # Example
//!
//! ```json
//! {
//!   "terminal": "foot",
//!   "groups": ["web", "dev", "chat"],
//!   "net_interface": "enp5s0"
//! }
//! ```

use crate::command::Modifier;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Terminals tried, in order, by [`guess_terminal`] when `$TERMINAL` names
/// nothing usable.
const KNOWN_TERMINALS: &[&str] = &[
    "roxterm",
    "sakura",
    "hyper",
    "alacritty",
    "terminator",
    "termite",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "lxterminal",
    "mate-terminal",
    "kitty",
    "yakuake",
    "tilix",
    "guake",
    "eterm",
    "st",
    "urxvt",
    "wezterm",
    "foot",
    "xterm",
    "x-terminal-emulator",
];

/// Bound to `mod+Return` unless the settings name another terminal.
pub const FALLBACK_TERMINAL: &str = "alacritty";

/// `terminal` value that asks for [`guess_terminal`].
pub const AUTO_TERMINAL: &str = "auto";

/// Home directory used when `$HOME` is unset.
const HOME_FALLBACK: &str = "/tmp";

/// Machine-specific settings.
///
/// Every field is optional; a minimal `{}` file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory name under `~/.config` holding scripts and bar images.
    pub app_name: String,
    /// Home directory.  `None` reads `$HOME`.
    pub home: Option<PathBuf>,
    /// Modifier that prefixes every binding.
    pub modifier: Modifier,
    /// Terminal launched by `mod+Return`.  `None` means [`FALLBACK_TERMINAL`];
    /// `"auto"` searches `$TERMINAL` and `PATH`.
    pub terminal: Option<String>,
    /// Group labels, in key order.  At most nine get reachable digit keys.
    pub groups: Vec<String>,
    pub net_interface: String,
    pub clock_format: String,
    /// Seconds between update checks.
    pub check_updates_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "qtile".into(),
            home: None,
            modifier: Modifier::Mod4,
            terminal: None,
            groups: ["1", "2", "3", "4", "5"].iter().map(|s| s.to_string()).collect(),
            net_interface: "wlp3s0".into(),
            clock_format: "%d/%m/%Y - %H:%M ".into(),
            check_updates_interval: 1800,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(settings)
    }

    /// Effective home directory.
    pub fn home_dir(&self) -> PathBuf {
        self.home.clone().unwrap_or_else(env_home)
    }

    /// `~/.config/<app_name>`.
    pub fn config_dir(&self) -> PathBuf {
        self.home_dir().join(".config").join(&self.app_name)
    }

    /// Directory of the bar segment images.
    pub fn img_dir(&self) -> PathBuf {
        self.config_dir().join("img")
    }

    /// Terminal command bound to `mod+Return`.
    ///
    /// Only an explicit `"auto"` looks at the environment, so default
    /// settings always produce the same binding.
    pub fn terminal_command(&self) -> String {
        match self.terminal.as_deref() {
            None => FALLBACK_TERMINAL.into(),
            Some(AUTO_TERMINAL) => guess_terminal().unwrap_or_else(|| FALLBACK_TERMINAL.into()),
            Some(t) => t.into(),
        }
    }
}

/// `$HOME`, or `/tmp` when it is unset.
pub fn env_home() -> PathBuf {
    home_or_fallback(std::env::var("HOME").ok())
}

fn home_or_fallback(home: Option<String>) -> PathBuf {
    PathBuf::from(home.unwrap_or_else(|| HOME_FALLBACK.into()))
}

/// Find a terminal emulator: `$TERMINAL` first, then well-known terminals on
/// `PATH`.
pub fn guess_terminal() -> Option<String> {
    if let Ok(terminal) = std::env::var("TERMINAL") {
        if which::which(&terminal).is_ok() {
            debug!("using $TERMINAL={}", terminal);
            return Some(terminal);
        }
    }
    KNOWN_TERMINALS
        .iter()
        .find(|t| which::which(t).is_ok())
        .map(|t| {
            debug!("found terminal {}", t);
            t.to_string()
        })
}

/// Error from loading or parsing a settings file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
