//! Status-bar widgets.
//!
//! Every widget carries a common [`Style`] plus the fields that only make
//! sense for its type.  Unset style fields inherit from [`WidgetDefaults`].

use crate::theme::{self, ColorSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Font and spacing every widget inherits unless it overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: theme::FONT.into(),
            fontsize: 16,
            padding: 3,
        }
    }
}

/// Display parameters shared by all widget types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

impl Style {
    /// A style with both colours set, each in the repeated two-stop form.
    pub fn colors(foreground: theme::Color, background: theme::Color) -> Self {
        Self {
            foreground: Some(ColorSpec::pair(foreground)),
            background: Some(ColorSpec::pair(background)),
            ..Self::default()
        }
    }

    /// A style with only the background set.
    pub fn background(background: theme::Color) -> Self {
        Self {
            background: Some(ColorSpec::pair(background)),
            ..Self::default()
        }
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn fontsize(mut self, size: u32) -> Self {
        self.fontsize = Some(size);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Effective font, falling back to `defaults`.
    pub fn resolved_font<'a>(&'a self, defaults: &'a WidgetDefaults) -> &'a str {
        self.font.as_deref().unwrap_or(&defaults.font)
    }

    pub fn resolved_fontsize(&self, defaults: &WidgetDefaults) -> u32 {
        self.fontsize.unwrap_or(defaults.fontsize)
    }
}

/// How the group box marks the active group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMethod {
    Border,
    Block,
    Text,
    Line,
}

/// Group-box colours and geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBoxParams {
    pub margin_x: u32,
    pub margin_y: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    pub borderwidth: u32,
    /// Label colour of groups holding windows.
    pub active: ColorSpec,
    /// Label colour of empty groups.
    pub inactive: ColorSpec,
    pub rounded: bool,
    pub highlight_method: HighlightMethod,
    pub this_current_screen_border: ColorSpec,
    pub this_screen_border: ColorSpec,
    pub other_current_screen_border: ColorSpec,
    pub other_screen_border: ColorSpec,
}

/// Update-checker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckUpdatesParams {
    pub colour_have_updates: ColorSpec,
    pub colour_no_updates: ColorSpec,
    pub no_update_string: String,
    /// Format string; `{updates}` is replaced by the count.
    pub display_format: String,
    /// Seconds between checks.
    pub update_interval: u64,
    pub custom_command: String,
}

/// A bar widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Widget {
    GroupBox {
        #[serde(flatten)]
        style: Style,
        #[serde(flatten)]
        params: GroupBoxParams,
    },
    /// Title of the focused window.
    WindowName {
        #[serde(flatten)]
        style: Style,
    },
    /// System tray.  Only one can exist per display.
    Systray {
        #[serde(flatten)]
        style: Style,
    },
    TextBox {
        #[serde(flatten)]
        style: Style,
        text: String,
    },
    CheckUpdates {
        #[serde(flatten)]
        style: Style,
        #[serde(flatten)]
        params: CheckUpdatesParams,
    },
    /// Separator.  With `linewidth` 0 it is plain spacing.
    Sep {
        #[serde(flatten)]
        style: Style,
        linewidth: u32,
    },
    Image {
        #[serde(flatten)]
        style: Style,
        filename: PathBuf,
    },
    /// Network throughput of one interface.
    Net {
        #[serde(flatten)]
        style: Style,
        interface: String,
    },
    CurrentLayoutIcon {
        #[serde(flatten)]
        style: Style,
        scale: f32,
    },
    /// Name of the active layout.
    CurrentLayout {
        #[serde(flatten)]
        style: Style,
    },
    Clock {
        #[serde(flatten)]
        style: Style,
        /// `strftime` format.
        format: String,
    },
}

/// Discriminant of [`Widget`], for structural comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    GroupBox,
    WindowName,
    Systray,
    TextBox,
    CheckUpdates,
    Sep,
    Image,
    Net,
    CurrentLayoutIcon,
    CurrentLayout,
    Clock,
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::GroupBox { .. } => WidgetKind::GroupBox,
            Widget::WindowName { .. } => WidgetKind::WindowName,
            Widget::Systray { .. } => WidgetKind::Systray,
            Widget::TextBox { .. } => WidgetKind::TextBox,
            Widget::CheckUpdates { .. } => WidgetKind::CheckUpdates,
            Widget::Sep { .. } => WidgetKind::Sep,
            Widget::Image { .. } => WidgetKind::Image,
            Widget::Net { .. } => WidgetKind::Net,
            Widget::CurrentLayoutIcon { .. } => WidgetKind::CurrentLayoutIcon,
            Widget::CurrentLayout { .. } => WidgetKind::CurrentLayout,
            Widget::Clock { .. } => WidgetKind::Clock,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Widget::GroupBox { style, .. }
            | Widget::WindowName { style }
            | Widget::Systray { style }
            | Widget::TextBox { style, .. }
            | Widget::CheckUpdates { style, .. }
            | Widget::Sep { style, .. }
            | Widget::Image { style, .. }
            | Widget::Net { style, .. }
            | Widget::CurrentLayoutIcon { style, .. }
            | Widget::CurrentLayout { style }
            | Widget::Clock { style, .. } => style,
        }
    }

    /// Spacer separator in `background`.
    pub fn spacer(background: theme::Color) -> Self {
        Widget::Sep {
            style: Style::background(background).padding(5),
            linewidth: 0,
        }
    }
}
