//! Key and mouse bindings.
//!
//! The key list is built in two passes: [`base_keys`] declares the fixed
//! navigation, session and launcher bindings, then [`group_keys`] appends a
//! switch-to / move-to pair for every group.

use crate::command::{same_modifiers, Direction, LazyCommand, Modifier, MouseButton};
use crate::group::{position_key, Group, MAX_DIGIT_GROUPS};
use log::warn;
use serde::{Deserialize, Serialize};

/// A hotkey: modifier set + key symbol → lazy command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub modifiers: Vec<Modifier>,
    /// X keysym name (`"h"`, `"Return"`, `"Tab"`, `"1"`, …).
    pub key: String,
    pub command: LazyCommand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl KeyBinding {
    pub fn new(modifiers: &[Modifier], key: impl Into<String>, command: LazyCommand) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            key: key.into(),
            command,
            desc: None,
        }
    }

    /// Attach a human-readable description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Whether this binding fires for `modifiers` + `key`.
    pub fn matches(&self, modifiers: &[Modifier], key: &str) -> bool {
        self.key == key && same_modifiers(&self.modifiers, modifiers)
    }
}

/// A pointer binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// Press-and-move.  `start` runs on press, `command` on every motion.
    Drag {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        command: LazyCommand,
        start: LazyCommand,
    },
    Click {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        command: LazyCommand,
    },
}

/// Fixed bindings: layout navigation, window movement and resizing, session
/// control and application launchers.
pub fn base_keys(m: Modifier, terminal: &str) -> Vec<KeyBinding> {
    use Direction::*;
    use LazyCommand as C;

    let shift = [m, Modifier::Shift];
    let ctrl = [m, Modifier::Control];

    vec![
        // Switch between windows
        KeyBinding::new(&[m], "h", C::Focus(Left)).desc("Move focus to left"),
        KeyBinding::new(&[m], "l", C::Focus(Right)).desc("Move focus to right"),
        KeyBinding::new(&[m], "j", C::Focus(Down)).desc("Move focus down"),
        KeyBinding::new(&[m], "k", C::Focus(Up)).desc("Move focus up"),
        KeyBinding::new(&[m], "space", C::FocusNext).desc("Move window focus to other window"),
        // Moving out of range in the columns layout creates a new column.
        KeyBinding::new(&shift, "h", C::Shuffle(Left)).desc("Move window to the left"),
        KeyBinding::new(&shift, "l", C::Shuffle(Right)).desc("Move window to the right"),
        KeyBinding::new(&shift, "j", C::Shuffle(Down)).desc("Move window down"),
        KeyBinding::new(&shift, "k", C::Shuffle(Up)).desc("Move window up"),
        // Growing towards a screen edge shrinks a window already on it.
        KeyBinding::new(&ctrl, "h", C::Grow(Left)).desc("Grow window to the left"),
        KeyBinding::new(&ctrl, "l", C::Grow(Right)).desc("Grow window to the right"),
        KeyBinding::new(&ctrl, "j", C::Grow(Down)).desc("Grow window down"),
        KeyBinding::new(&ctrl, "k", C::Grow(Up)).desc("Grow window up"),
        KeyBinding::new(&[m], "n", C::Normalize).desc("Reset all window sizes"),
        KeyBinding::new(&shift, "Return", C::ToggleSplit)
            .desc("Toggle between split and unsplit sides of stack"),
        KeyBinding::new(&[m], "Return", C::Spawn(terminal.to_string())).desc("Launch terminal"),
        KeyBinding::new(&[m], "Tab", C::NextLayout).desc("Toggle between layouts"),
        KeyBinding::new(&[m], "w", C::KillWindow).desc("Kill focused window"),
        KeyBinding::new(&ctrl, "r", C::ReloadConfig).desc("Reload the config"),
        KeyBinding::new(&ctrl, "q", C::Shutdown).desc("Shutdown Qtile"),
        KeyBinding::new(&[m], "r", C::SpawnPrompt).desc("Spawn a command using a prompt widget"),
        // Launchers
        KeyBinding::new(&[m], "s", C::Spawn("scrot".into())),
        KeyBinding::new(&[m], "m", C::Spawn("rofi -show drun".into())),
        KeyBinding::new(&shift, "m", C::Spawn("rofi -show".into())),
    ]
}

/// Two bindings per group, keyed by its 1-based position:
/// `[m] N` shows the group, `[m, shift] N` sends the focused window there.
pub fn group_keys(m: Modifier, groups: &[Group]) -> Vec<KeyBinding> {
    if groups.len() > MAX_DIGIT_GROUPS {
        warn!(
            "{} groups declared; groups past {} get multi-digit keys that never trigger",
            groups.len(),
            MAX_DIGIT_GROUPS
        );
    }

    groups
        .iter()
        .enumerate()
        .flat_map(|(i, group)| {
            let key = position_key(i);
            [
                KeyBinding::new(&[m], key.clone(), LazyCommand::GroupToScreen(group.name.clone())),
                KeyBinding::new(
                    &[m, Modifier::Shift],
                    key,
                    LazyCommand::WindowToGroup(group.name.clone()),
                ),
            ]
        })
        .collect()
}

/// Drag floating windows with the primary modifier held; middle click raises.
pub fn mouse_bindings(m: Modifier) -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            modifiers: vec![m],
            button: MouseButton::Button1,
            command: LazyCommand::SetPositionFloating,
            start: LazyCommand::GetPosition,
        },
        MouseBinding::Drag {
            modifiers: vec![m],
            button: MouseButton::Button3,
            command: LazyCommand::SetSizeFloating,
            start: LazyCommand::GetSize,
        },
        MouseBinding::Click {
            modifiers: vec![m],
            button: MouseButton::Button2,
            command: LazyCommand::BringToFront,
        },
    ]
}

/// Two bindings that claim the same key combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Index of the binding that wins (declared first).
    pub first: usize,
    /// Index of the shadowed binding.
    pub second: usize,
}

/// Find every pair of bindings sharing a modifier set and key.
pub fn conflicts(keys: &[KeyBinding]) -> Vec<Conflict> {
    let mut out = Vec::new();
    for (i, a) in keys.iter().enumerate() {
        for (j, b) in keys.iter().enumerate().skip(i + 1) {
            if b.matches(&a.modifiers, &a.key) {
                out.push(Conflict { first: i, second: j });
            }
        }
    }
    out
}
