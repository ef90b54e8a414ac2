//! Screens and their status bars.
//!
//! Both screens share one widget list produced by [`bar_widgets`]; the only
//! difference is whether the system tray is included, since a display can
//! host a single tray.

use crate::theme::{self, ColorSpec};
use crate::widget::{CheckUpdatesParams, GroupBoxParams, HighlightMethod, Style, Widget};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bar height in pixels.
pub const BAR_SIZE: u32 = 26;
pub const BAR_OPACITY: f32 = 0.95;

/// Nerd Font glyph shown in front of the update counter.
pub const UPDATES_ICON: &str = " \u{f019} ";
/// Nerd Font glyph shown in front of the clock.
pub const CLOCK_ICON: &str = " \u{f017} ";

/// A horizontal bar of widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Left-to-right.
    pub widgets: Vec<Widget>,
    pub size: u32,
    pub opacity: f32,
}

/// One physical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub top: Bar,
}

/// Inputs the widget list needs from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarOptions {
    /// Directory holding the `bar*.png` segment images.
    pub img_dir: PathBuf,
    pub net_interface: String,
    /// `strftime` format of the clock.
    pub clock_format: String,
    /// Seconds between update checks.
    pub update_interval: u64,
}

fn group_box() -> Widget {
    Widget::GroupBox {
        style: Style::colors(theme::FOREGROUND, theme::BACKGROUND)
            .font(theme::FONT)
            .fontsize(18),
        params: GroupBoxParams {
            margin_x: 0,
            margin_y: 3,
            padding_x: 5,
            padding_y: 8,
            borderwidth: 1,
            active: ColorSpec::pair(theme::FOREGROUND),
            inactive: ColorSpec::pair(theme::FOREGROUND),
            rounded: false,
            highlight_method: HighlightMethod::Block,
            this_current_screen_border: ColorSpec::pair(theme::ACCENT),
            this_screen_border: ColorSpec::pair(theme::GREY),
            other_current_screen_border: ColorSpec::pair(theme::BACKGROUND),
            other_screen_border: ColorSpec::pair(theme::BACKGROUND),
        },
    }
}

fn check_updates(interval: u64) -> Widget {
    Widget::CheckUpdates {
        style: Style::colors(theme::FOREGROUND, theme::YELLOW),
        params: CheckUpdatesParams {
            colour_have_updates: ColorSpec::pair(theme::FOREGROUND),
            colour_no_updates: ColorSpec::pair(theme::FOREGROUND),
            no_update_string: "0".into(),
            display_format: "{updates}".into(),
            update_interval: interval,
            custom_command: "checkupdates".into(),
        },
    }
}

fn image(opts: &BarOptions, name: &str) -> Widget {
    Widget::Image {
        style: Style::default(),
        filename: opts.img_dir.join(name),
    }
}

/// The bar's widgets in visual order, with or without the system tray.
pub fn bar_widgets(opts: &BarOptions, include_systray: bool) -> Vec<Widget> {
    let mut widgets = vec![
        group_box(),
        Widget::WindowName {
            style: Style::colors(theme::FOREGROUND, theme::BACKGROUND)
                .font(theme::FONT_BOLD)
                .fontsize(13),
        },
    ];

    if include_systray {
        widgets.push(Widget::Systray {
            style: Style::colors(theme::BACKGROUND, theme::BACKGROUND).padding(5),
        });
    }

    widgets.extend([
        // updates segment
        Widget::TextBox {
            style: Style::colors(theme::BACKGROUND, theme::YELLOW).fontsize(16),
            text: UPDATES_ICON.into(),
        },
        check_updates(opts.update_interval),
        Widget::spacer(theme::YELLOW),
        image(opts, "bar4.png"),
        // network segment
        Widget::Net {
            style: Style::colors(theme::BACKGROUND, theme::ORANGE),
            interface: opts.net_interface.clone(),
        },
        image(opts, "bar3.png"),
        // layout segment
        Widget::CurrentLayoutIcon {
            style: Style::colors(theme::BACKGROUND, theme::ACCENT),
            scale: 0.65,
        },
        Widget::CurrentLayout {
            style: Style::colors(theme::BACKGROUND, theme::ACCENT),
        },
        Widget::spacer(theme::ACCENT),
        image(opts, "bar1.png"),
        // clock segment
        Widget::TextBox {
            style: Style::colors(theme::BACKGROUND, theme::PURPLE),
            text: CLOCK_ICON.into(),
        },
        Widget::Clock {
            style: Style::colors(theme::BACKGROUND, theme::PURPLE),
            format: opts.clock_format.clone(),
        },
    ]);

    widgets
}

/// A top bar with the standard size and opacity.
pub fn top_bar(opts: &BarOptions, include_systray: bool) -> Bar {
    Bar {
        widgets: bar_widgets(opts, include_systray),
        size: BAR_SIZE,
        opacity: BAR_OPACITY,
    }
}

/// Primary screen (with tray) followed by the secondary screen.
pub fn screens(opts: &BarOptions) -> Vec<Screen> {
    vec![
        Screen { top: top_bar(opts, true) },
        Screen { top: top_bar(opts, false) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;

    fn opts() -> BarOptions {
        BarOptions {
            img_dir: PathBuf::from("/home/test/.config/qtile/img"),
            net_interface: "wlp3s0".into(),
            clock_format: "%d/%m/%Y - %H:%M ".into(),
            update_interval: 1800,
        }
    }

    fn kinds(widgets: &[Widget]) -> Vec<WidgetKind> {
        widgets.iter().map(Widget::kind).collect()
    }

    #[test]
    fn primary_adds_exactly_the_tray() {
        let with = bar_widgets(&opts(), true);
        let without = bar_widgets(&opts(), false);
        assert_eq!(with.len(), without.len() + 1);

        let mut stripped = with.clone();
        stripped.retain(|w| w.kind() != WidgetKind::Systray);
        assert_eq!(stripped, without);
        assert!(!kinds(&without).contains(&WidgetKind::Systray));
    }

    #[test]
    fn core_widgets_keep_relative_order() {
        let core = [
            WidgetKind::GroupBox,
            WidgetKind::WindowName,
            WidgetKind::CurrentLayout,
            WidgetKind::Clock,
        ];
        for tray in [true, false] {
            let ks = kinds(&bar_widgets(&opts(), tray));
            let positions: Vec<usize> = core
                .iter()
                .map(|k| ks.iter().position(|x| x == k).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        }
    }

    #[test]
    fn tray_sits_after_window_name() {
        let ks = kinds(&bar_widgets(&opts(), true));
        assert_eq!(&ks[..3], &[WidgetKind::GroupBox, WidgetKind::WindowName, WidgetKind::Systray]);
        assert_eq!(ks.last(), Some(&WidgetKind::Clock));
    }

    #[test]
    fn images_resolve_under_img_dir() {
        let files: Vec<PathBuf> = bar_widgets(&opts(), false)
            .into_iter()
            .filter_map(|w| match w {
                Widget::Image { filename, .. } => Some(filename),
                _ => None,
            })
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/home/test/.config/qtile/img/bar4.png"),
                PathBuf::from("/home/test/.config/qtile/img/bar3.png"),
                PathBuf::from("/home/test/.config/qtile/img/bar1.png"),
            ]
        );
    }

    #[test]
    fn options_flow_into_widgets() {
        let mut o = opts();
        o.net_interface = "eth0".into();
        o.update_interval = 60;
        let widgets = bar_widgets(&o, false);
        assert!(widgets
            .iter()
            .any(|w| matches!(w, Widget::Net { interface, .. } if interface == "eth0")));
        assert!(widgets.iter().any(|w| matches!(
            w,
            Widget::CheckUpdates { params, .. } if params.update_interval == 60
        )));
    }

    #[test]
    fn two_screens_primary_first() {
        let s = screens(&opts());
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].top.size, 26);
        assert_eq!(s[0].top.opacity, 0.95);
        assert!(kinds(&s[0].top.widgets).contains(&WidgetKind::Systray));
        assert!(!kinds(&s[1].top.widgets).contains(&WidgetKind::Systray));
    }
}
