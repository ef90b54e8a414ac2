//! Tiling layouts and the order in which they are cycled.
//!
//! The document lists layouts in cycle order.  The first entry is active when
//! a group is created; each "next layout" command advances one step and wraps
//! back to the start after the last entry.

use crate::theme::{self, Color, ColorSpec};
use serde::{Deserialize, Serialize};

/// The arrangement algorithm a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Windows in resizable columns; moving past the edge opens a new column.
    Columns,
    /// One window fills the screen.
    Max,
    /// A main pane on the left with a stack on the right.
    MonadTall,
    /// A main pane on top with a stack below.
    MonadWide,
}

/// Parameters shared by every layout kind.
///
/// Fields left at `None` fall back to the host's defaults for that kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_focus: Option<Color>,
    /// Focused-window border colours for windows in a stacked column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_focus_stack: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
}

impl LayoutParams {
    /// The shared parameter set applied to the max and monad layouts.
    pub fn common() -> Self {
        Self {
            border_focus: Some(theme::ACCENT),
            border_focus_stack: None,
            border_width: Some(1),
            margin: Some(4),
        }
    }
}

/// A layout entry: algorithm + parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub kind: LayoutKind,
    #[serde(flatten)]
    pub params: LayoutParams,
}

impl Layout {
    pub fn new(kind: LayoutKind, params: LayoutParams) -> Self {
        Self { kind, params }
    }
}

/// Layouts in cycle order.  The first is the initial layout.
pub fn default_layouts() -> Vec<Layout> {
    let columns = LayoutParams {
        border_focus_stack: Some(ColorSpec::Gradient(theme::STACK_FOCUS, theme::STACK_FOCUS_DIM)),
        border_width: Some(4),
        ..LayoutParams::default()
    };
    vec![
        Layout::new(LayoutKind::Columns, columns),
        Layout::new(LayoutKind::Max, LayoutParams::common()),
        Layout::new(LayoutKind::MonadTall, LayoutParams::common()),
        Layout::new(LayoutKind::MonadWide, LayoutParams::common()),
    ]
}

/// Error for an empty layout list.
#[derive(Debug, thiserror::Error)]
#[error("layout list is empty")]
pub struct EmptyLayouts;

/// Cursor over a layout list that models the host's "next layout" command.
#[derive(Debug, Clone)]
pub struct LayoutCycle<'a> {
    layouts: &'a [Layout],
    index: usize,
}

impl<'a> LayoutCycle<'a> {
    /// Start at the first layout.  Fails on an empty list.
    pub fn new(layouts: &'a [Layout]) -> Result<Self, EmptyLayouts> {
        if layouts.is_empty() {
            return Err(EmptyLayouts);
        }
        Ok(Self { layouts, index: 0 })
    }

    pub fn current(&self) -> &'a Layout {
        &self.layouts[self.index]
    }

    /// 0-based position of the active layout.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one step, wrapping after the last layout.
    pub fn next(&mut self) -> &'a Layout {
        self.index = (self.index + 1) % self.layouts.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order() {
        let kinds: Vec<LayoutKind> = default_layouts().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LayoutKind::Columns, LayoutKind::Max, LayoutKind::MonadTall, LayoutKind::MonadWide]
        );
    }

    #[test]
    fn columns_has_its_own_params() {
        let layouts = default_layouts();
        assert_eq!(layouts[0].params.border_width, Some(4));
        assert_eq!(layouts[0].params.margin, None);
        assert!(layouts[0].params.border_focus_stack.is_some());
        for l in &layouts[1..] {
            assert_eq!(l.params, LayoutParams::common());
        }
    }

    #[test]
    fn cycle_starts_at_first_and_wraps() {
        let layouts = default_layouts();
        let mut cycle = LayoutCycle::new(&layouts).unwrap();
        assert_eq!(cycle.current().kind, LayoutKind::Columns);
        assert_eq!(cycle.next().kind, LayoutKind::Max);
        assert_eq!(cycle.next().kind, LayoutKind::MonadTall);
        assert_eq!(cycle.next().kind, LayoutKind::MonadWide);
        assert_eq!(cycle.next().kind, LayoutKind::Columns);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn single_layout_cycles_to_itself() {
        let layouts = vec![Layout::new(LayoutKind::Max, LayoutParams::default())];
        let mut cycle = LayoutCycle::new(&layouts).unwrap();
        assert_eq!(cycle.next().kind, LayoutKind::Max);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(LayoutCycle::new(&[]).is_err());
    }

    #[test]
    fn params_flatten_into_layout() {
        let json = serde_json::to_value(&default_layouts()[1]).unwrap();
        assert_eq!(json["kind"], "max");
        assert_eq!(json["border_focus"], "#f07178");
        assert_eq!(json["margin"], 4);
        assert!(json.get("border_focus_stack").is_none());
    }
}
