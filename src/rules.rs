//! Floating-window rules.
//!
//! A [`Match`] is a conjunction: every field that is set must agree with the
//! window for the rule to apply.  A window floats when any rule in the
//! floating layout matches it.  Run `xprop` to see a client's class and name.

use crate::theme::{self, Color};
use serde::{Deserialize, Serialize};

/// The properties of a client window a rule can test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    /// `WM_CLASS`: instance name followed by class name.
    pub wm_class: Vec<String>,
    pub title: String,
    pub role: Option<String>,
    /// EWMH window type without the `_NET_WM_WINDOW_TYPE_` prefix, lowercased.
    pub wm_type: Option<String>,
    /// Minimum size equals maximum size.
    pub fixed_size: bool,
    /// Minimum aspect equals maximum aspect.
    pub fixed_ratio: bool,
}

/// A window predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    /// Matches if equal to either part of `WM_CLASS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_ratio: Option<bool>,
}

impl Match {
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: &str) -> Self {
        Self {
            wm_type: Some(wm_type.into()),
            ..Self::default()
        }
    }

    /// Whether every set field agrees with `props`.  An empty match never
    /// applies.
    pub fn matches(&self, props: &WindowProps) -> bool {
        if *self == Match::default() {
            return false;
        }
        self.wm_class
            .as_ref()
            .map_or(true, |c| props.wm_class.iter().any(|w| w == c))
            && self.title.as_ref().map_or(true, |t| *t == props.title)
            && self
                .role
                .as_ref()
                .map_or(true, |r| props.role.as_deref() == Some(r.as_str()))
            && self
                .wm_type
                .as_ref()
                .map_or(true, |t| props.wm_type.as_deref() == Some(t.as_str()))
            && self.fixed_size.map_or(true, |f| f == props.fixed_size)
            && self.fixed_ratio.map_or(true, |f| f == props.fixed_ratio)
    }
}

/// The host's built-in rules: transient window types, common dialog classes
/// and windows that cannot be resized.
pub fn default_float_rules() -> Vec<Match> {
    let mut rules: Vec<Match> = ["utility", "notification", "toolbar", "splash", "dialog"]
        .into_iter()
        .map(Match::wm_type)
        .collect();
    rules.extend(
        [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(Match::wm_class),
    );
    rules.push(Match {
        fixed_size: Some(true),
        ..Match::default()
    });
    rules.push(Match {
        fixed_ratio: Some(true),
        ..Match::default()
    });
    rules
}

/// Dialogs that must never be tiled.
pub fn extra_float_rules() -> Vec<Match> {
    vec![
        Match::wm_class("confirmreset"), // gitk
        Match::wm_class("makebranch"),   // gitk
        Match::wm_class("maketag"),      // gitk
        Match::wm_class("ssh-askpass"),
        Match::title("branchdialog"), // gitk
        Match::title("pinentry"),     // GPG key password entry
    ]
}

/// The layout floating windows are placed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
    pub border_focus: Color,
}

impl FloatingLayout {
    /// Host defaults followed by the extra dialog rules.
    pub fn standard() -> Self {
        let mut float_rules = default_float_rules();
        float_rules.extend(extra_float_rules());
        Self {
            float_rules,
            border_focus: theme::PURPLE,
        }
    }

    pub fn should_float(&self, props: &WindowProps) -> bool {
        self.float_rules.iter().any(|r| r.matches(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(class: &str, title: &str) -> WindowProps {
        WindowProps {
            wm_class: vec![class.to_lowercase(), class.to_string()],
            title: title.into(),
            ..WindowProps::default()
        }
    }

    #[test]
    fn standard_is_defaults_plus_six() {
        let layout = FloatingLayout::standard();
        let defaults = default_float_rules();
        assert_eq!(layout.float_rules.len(), defaults.len() + 6);
        assert_eq!(&layout.float_rules[..defaults.len()], defaults.as_slice());
        assert_eq!(layout.border_focus, theme::PURPLE);
    }

    #[test]
    fn class_matches_either_part() {
        let rule = Match::wm_class("Ssh-askpass");
        assert!(rule.matches(&window("Ssh-askpass", "x")));
        assert!(!Match::wm_class("maketag").matches(&window("Gitk", "x")));
    }

    #[test]
    fn title_rule() {
        let layout = FloatingLayout::standard();
        assert!(layout.should_float(&window("Pinentry-gtk", "pinentry")));
        assert!(!layout.should_float(&window("Alacritty", "pinentry-ish")));
    }

    #[test]
    fn all_fields_must_agree() {
        let rule = Match {
            wm_class: Some("firefox".into()),
            role: Some("About".into()),
            ..Match::default()
        };
        let mut w = window("firefox", "About Firefox");
        assert!(!rule.matches(&w));
        w.role = Some("About".into());
        assert!(rule.matches(&w));
    }

    #[test]
    fn dialog_type_and_fixed_size_float() {
        let layout = FloatingLayout::standard();
        let dialog = WindowProps {
            wm_type: Some("dialog".into()),
            ..window("Gimp", "Export")
        };
        assert!(layout.should_float(&dialog));

        let fixed = WindowProps {
            fixed_size: true,
            ..window("Steam", "Friends")
        };
        assert!(layout.should_float(&fixed));
        assert!(!layout.should_float(&window("Alacritty", "shell")));
    }

    #[test]
    fn empty_match_never_applies() {
        assert!(!Match::default().matches(&WindowProps::default()));
    }

    #[test]
    fn match_wire_format_omits_unset_fields() {
        let json = serde_json::to_string(&Match::title("pinentry")).unwrap();
        assert_eq!(json, r#"{"title":"pinentry"}"#);
    }
}
