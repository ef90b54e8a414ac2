//! The configuration document handed to the host runtime.
//!
//! [`declare`] builds the whole document in one pass.  The result is never
//! mutated afterwards; a reload calls [`declare`] again and the host swaps
//! the old document for the new one.
//!
//! The host reads fields by their serialized names (`keys`, `groups`,
//! `layouts`, `screens`, `mouse`, the behaviour flags, …).  Renaming one of
//! them silently disables the feature on the host side, so the names are
//! part of the interface.

use crate::bar::{self, BarOptions, Screen};
use crate::command::{LazyCommand, Modifier};
use crate::config::Settings;
use crate::group::{groups_from_labels, Group};
use crate::hooks::{self, Hook};
use crate::keys::{self, KeyBinding, MouseBinding};
use crate::layout::{self, Layout};
use crate::rules::FloatingLayout;
use crate::traits::Host;
use crate::widget::WidgetDefaults;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// How a window requesting activation is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Focus it.
    Focus,
    /// Mark it urgent.
    Urgent,
    /// Focus if its group is visible, otherwise mark urgent.
    Smart,
    Never,
}

/// Identity reported to clients.  Some Java UI toolkits refuse to draw
/// unless they recognise the window manager, and LG3D is on their list.
pub const WMNAME: &str = "LG3D";

/// The complete declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub modifier: Modifier,
    pub terminal: String,
    pub keys: Vec<KeyBinding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    /// Cycle order; the first is the initial layout.
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    /// Primary screen first.
    pub screens: Vec<Screen>,
    pub hooks: Vec<Hook>,

    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    /// Re-read the screen layout when monitors are plugged or unplugged.
    pub reconfigure_screens: bool,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    /// Honour minimise requests from clients that lose focus.
    pub auto_minimize: bool,
    pub wmname: String,
}

/// Build the document from `settings`.
///
/// Apart from an opt-in `"auto"` terminal this is a pure function of its
/// input.
pub fn declare(settings: &Settings) -> Document {
    let m = settings.modifier;
    let terminal = settings.terminal_command();
    let groups = groups_from_labels(&settings.groups);

    let mut keys = keys::base_keys(m, &terminal);
    keys.extend(keys::group_keys(m, &groups));

    let bar_opts = BarOptions {
        img_dir: settings.img_dir(),
        net_interface: settings.net_interface.clone(),
        clock_format: settings.clock_format.clone(),
        update_interval: settings.check_updates_interval,
    };

    let widget_defaults = WidgetDefaults::default();

    let doc = Document {
        modifier: m,
        terminal,
        keys,
        mouse: keys::mouse_bindings(m),
        groups,
        layouts: layout::default_layouts(),
        floating_layout: FloatingLayout::standard(),
        extension_defaults: widget_defaults.clone(),
        widget_defaults,
        screens: bar::screens(&bar_opts),
        hooks: hooks::default_hooks(&settings.config_dir()),
        auto_fullscreen: true,
        focus_on_window_activation: FocusOnActivation::Smart,
        reconfigure_screens: true,
        follow_mouse_focus: true,
        bring_front_click: false,
        cursor_warp: false,
        auto_minimize: true,
        wmname: WMNAME.into(),
    };
    debug!(
        "declared {} keys, {} groups, {} layouts, {} screens",
        doc.keys.len(),
        doc.groups.len(),
        doc.layouts.len(),
        doc.screens.len()
    );
    doc
}

/// Error serializing the document for the host.
#[derive(Debug, thiserror::Error)]
#[error("document error: {0}")]
pub struct DocumentError(#[from] serde_json::Error);

impl Document {
    /// The first binding for `modifiers` + `key`, if any.
    pub fn binding_for(&self, modifiers: &[Modifier], key: &str) -> Option<&KeyBinding> {
        self.keys.iter().find(|k| k.matches(modifiers, key))
    }

    /// Handle a key press: run the bound command on `host`.
    ///
    /// Spawn commands go through [`Spawner::spawn`](crate::traits::Spawner::spawn),
    /// everything else through [`Host::execute`].  Returns `Ok(false)` if
    /// nothing is bound.
    pub fn dispatch<H: Host>(
        &self,
        host: &H,
        modifiers: &[Modifier],
        key: &str,
    ) -> Result<bool, H::Error> {
        let Some(binding) = self.binding_for(modifiers, key) else {
            debug!("unbound key {:?}+{}", modifiers, key);
            return Ok(false);
        };
        info!("{} -> {}", key, binding.command);
        match binding.command {
            LazyCommand::Spawn(_) => {
                if let Some(argv) = binding.command.spawn_argv() {
                    host.spawn(&argv)?;
                }
            }
            ref cmd => host.execute(cmd)?,
        }
        Ok(true)
    }

    /// Every distinct `(font, size)` the bars render with, after applying
    /// the widget defaults, in first-use order.
    pub fn fonts(&self) -> Vec<(String, u32)> {
        let mut out: Vec<(String, u32)> = Vec::new();
        for widget in self.screens.iter().flat_map(|s| &s.top.widgets) {
            let style = widget.style();
            let font = (
                style.resolved_font(&self.widget_defaults).to_string(),
                style.resolved_fontsize(&self.widget_defaults),
            );
            if !out.contains(&font) {
                out.push(font);
            }
        }
        out
    }

    /// Pretty JSON in the shape the host imports.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
