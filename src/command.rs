//! Commands and input vocabulary used throughout tilerc.
//!
//! This module defines what every binding in the document can *do*:
//! [`LazyCommand`] enumerates each deferred call the host runtime knows how
//! to execute, while [`Modifier`], [`MouseButton`] and [`Direction`] provide
//! the supporting input types.
//!
//! Commands are *lazy*: constructing one performs nothing.  The host runtime
//! evaluates a command when the bound key or button is pressed.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Keyboard modifier that can prefix a key or mouse binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// The "super" / Windows key.
    Mod4,
    /// Alt.
    Mod1,
    /// Shift.
    Shift,
    /// Ctrl.
    Control,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Mod4 => write!(f, "mod4"),
            Modifier::Mod1 => write!(f, "mod1"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "control"),
        }
    }
}

/// Compare two modifier lists as sets (order and duplicates ignored).
pub fn same_modifiers(a: &[Modifier], b: &[Modifier]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    a.dedup();
    b.sort();
    b.dedup();
    a == b
}

/// Pointer button, named the way X11 numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            MouseButton::Button1 => 1,
            MouseButton::Button2 => 2,
            MouseButton::Button3 => 3,
            MouseButton::Button4 => 4,
            MouseButton::Button5 => 5,
        };
        write!(f, "Button{}", n)
    }
}

/// Direction for focus, shuffle and grow operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive; surrounding whitespace ignored).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Every deferred call a binding can hand to the host runtime.
///
/// The [`Display`](fmt::Display) form is the dotted call path the host
/// exposes (`layout.left()`, `spawn('scrot')`, `group['1'].toscreen()`), which
/// is what diagnostics print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LazyCommand {
    //  Layout
    /// Move focus to the neighbouring window in `direction`.
    Focus(Direction),
    /// Move focus to the next window in the layout's order.
    FocusNext,
    /// Swap the focused window with its neighbour in `direction`.
    Shuffle(Direction),
    /// Grow the focused window towards `direction`.
    Grow(Direction),
    /// Reset all window sizes.
    Normalize,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,

    //  Window
    KillWindow,
    /// Move the focused window to the named group.
    WindowToGroup(String),
    SetPositionFloating,
    GetPosition,
    SetSizeFloating,
    GetSize,
    BringToFront,

    //  Group / screen
    /// Show the named group on the current screen.
    GroupToScreen(String),
    /// Cycle forward through the layout list, wrapping around.
    NextLayout,

    //  Session
    ReloadConfig,
    Shutdown,
    /// Open the host's command prompt.
    SpawnPrompt,
    /// Launch an external program.  The string is split on whitespace into
    /// an argument vector; no quoting is interpreted.
    Spawn(String),
}

impl LazyCommand {
    /// Argument vector for a [`Spawn`](LazyCommand::Spawn) command, `None`
    /// for everything else.
    pub fn spawn_argv(&self) -> Option<Vec<String>> {
        match self {
            LazyCommand::Spawn(cmd) => Some(cmd.split_whitespace().map(String::from).collect()),
            _ => None,
        }
    }
}

impl fmt::Display for LazyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyCommand::Focus(d) => write!(f, "layout.{}()", d),
            LazyCommand::FocusNext => write!(f, "layout.next()"),
            LazyCommand::Shuffle(d) => write!(f, "layout.shuffle_{}()", d),
            LazyCommand::Grow(d) => write!(f, "layout.grow_{}()", d),
            LazyCommand::Normalize => write!(f, "layout.normalize()"),
            LazyCommand::ToggleSplit => write!(f, "layout.toggle_split()"),
            LazyCommand::KillWindow => write!(f, "window.kill()"),
            LazyCommand::WindowToGroup(g) => write!(f, "window.togroup({:?})", g),
            LazyCommand::SetPositionFloating => write!(f, "window.set_position_floating()"),
            LazyCommand::GetPosition => write!(f, "window.get_position()"),
            LazyCommand::SetSizeFloating => write!(f, "window.set_size_floating()"),
            LazyCommand::GetSize => write!(f, "window.get_size()"),
            LazyCommand::BringToFront => write!(f, "window.bring_to_front()"),
            LazyCommand::GroupToScreen(g) => write!(f, "group[{:?}].toscreen()", g),
            LazyCommand::NextLayout => write!(f, "next_layout()"),
            LazyCommand::ReloadConfig => write!(f, "reload_config()"),
            LazyCommand::Shutdown => write!(f, "shutdown()"),
            LazyCommand::SpawnPrompt => write!(f, "spawncmd()"),
            LazyCommand::Spawn(cmd) => write!(f, "spawn({:?})", cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn direction_deserialize_is_case_insensitive() {
        let d: Direction = serde_json::from_str(r#"" Left ""#).unwrap();
        assert_eq!(d, Direction::Left);
        let d: Direction = serde_json::from_str(r#""DOWN""#).unwrap();
        assert_eq!(d, Direction::Down);
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn command_display_uses_host_call_paths() {
        assert_eq!(LazyCommand::Focus(Direction::Left).to_string(), "layout.left()");
        assert_eq!(LazyCommand::Shuffle(Direction::Up).to_string(), "layout.shuffle_up()");
        assert_eq!(LazyCommand::Grow(Direction::Down).to_string(), "layout.grow_down()");
        assert_eq!(
            LazyCommand::GroupToScreen("3".into()).to_string(),
            r#"group["3"].toscreen()"#
        );
        assert_eq!(LazyCommand::Spawn("scrot".into()).to_string(), r#"spawn("scrot")"#);
    }

    #[test]
    fn spawn_argv_splits_on_whitespace() {
        let cmd = LazyCommand::Spawn("rofi  -show drun".into());
        assert_eq!(
            cmd.spawn_argv(),
            Some(vec!["rofi".to_string(), "-show".into(), "drun".into()])
        );
        assert_eq!(LazyCommand::NextLayout.spawn_argv(), None);
    }

    #[test]
    fn modifiers_compare_as_sets() {
        assert!(same_modifiers(
            &[Modifier::Mod4, Modifier::Shift],
            &[Modifier::Shift, Modifier::Mod4]
        ));
        assert!(same_modifiers(&[Modifier::Mod4, Modifier::Mod4], &[Modifier::Mod4]));
        assert!(!same_modifiers(&[Modifier::Mod4], &[Modifier::Mod4, Modifier::Control]));
    }

    #[test]
    fn command_wire_format() {
        let json = serde_json::to_string(&LazyCommand::Focus(Direction::Right)).unwrap();
        assert_eq!(json, r#"{"Focus":"right"}"#);
        let back: LazyCommand = serde_json::from_str(r#""NextLayout""#).unwrap();
        assert_eq!(back, LazyCommand::NextLayout);
        assert_eq!(MouseButton::Button3.to_string(), "Button3");
        assert_eq!(serde_json::to_string(&Modifier::Mod4).unwrap(), r#""mod4""#);
    }
}
