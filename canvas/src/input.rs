//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas and
//! emit the final document mutation on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::ItemId;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Pan the canvas by dragging.
    Hand,
    /// Draw a rectangular frame.
    Frame,
    /// Freehand pen. Selectable, not implemented.
    Pen,
    /// Eraser. Selectable, not implemented.
    Eraser,
}

impl Tool {
    /// Tools shown in the toolbar but with no pointer behavior yet.
    #[must_use]
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Alt / Option key is held.
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button; always pans.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

/// Pointer cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
    Crosshair,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Crosshair => "crosshair",
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected item, if any.
    pub selected_id: Option<ItemId>,
    /// Whether the toolbar's link URL popover is open.
    pub link_input_open: bool,
}

/// Axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    /// Bounding box of two corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Whether both sides strictly exceed `min`.
    #[must_use]
    pub fn exceeds(&self, min: f64) -> bool {
        self.width > min && self.height > min
    }
}

/// Internal state for the input state machine.
///
/// Each active variant carries gesture context needed to compute deltas and
/// emit final actions on pointer-up.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A select-tool press that has not moved past the click slop yet.
    Pressing {
        /// Screen-space position of the pointer-down.
        press_screen: Point,
        /// Canvas-space position of the pointer-down.
        press_world: Point,
        /// Topmost item under the press, if any.
        hit: Option<ItemId>,
    },
    /// The user is panning the canvas.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// The user is moving an item across the canvas.
    DraggingItem {
        /// Id of the item being dragged.
        id: ItemId,
        /// Canvas-space position of the pointer at the previous event.
        last_world: Point,
        /// Item x at the start of the drag, recorded for undo.
        orig_x: f64,
        /// Item y at the start of the drag, recorded for undo.
        orig_y: f64,
    },
    /// The user is drawing a frame by dragging from an anchor corner.
    DrawingFrame {
        /// Canvas-space corner where the drag started.
        start_world: Point,
        /// Canvas-space position of the latest pointer event.
        current_world: Point,
    },
}

impl InputState {
    /// Live frame preview while a frame is being drawn.
    #[must_use]
    pub fn frame_preview(&self) -> Option<FrameRect> {
        match self {
            Self::DrawingFrame { start_world, current_world } => {
                Some(FrameRect::from_corners(*start_world, *current_world))
            }
            _ => None,
        }
    }

    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
