//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Default zoom, as a percentage.
pub const DEFAULT_SCALE_PCT: f64 = 100.0;

/// Lowest zoom the toolbar can reach, as a percentage.
pub const MIN_SCALE_PCT: f64 = 20.0;

/// Highest zoom the toolbar can reach, as a percentage.
pub const MAX_SCALE_PCT: f64 = 200.0;

/// Percentage points added or removed by one zoom-in / zoom-out step.
pub const SCALE_STEP_PCT: f64 = 10.0;

// ── Gestures ────────────────────────────────────────────────────

/// A drawn frame must exceed this size (canvas units) on both axes to be kept.
pub const MIN_FRAME_SIZE: f64 = 10.0;

/// Screen-space distance a press may travel and still count as a click.
pub const CLICK_SLOP_PX: f64 = 3.0;

// ── Viewport ────────────────────────────────────────────────────

/// Viewport width assumed before the host reports one.
pub const FALLBACK_VIEWPORT_W: f64 = 800.0;

/// Viewport height assumed before the host reports one.
pub const FALLBACK_VIEWPORT_H: f64 = 600.0;

/// Dot spacing of the background grid at 100% zoom, in screen pixels.
pub const GRID_SPACING_PX: f64 = 24.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of undoable commands kept.
pub const HISTORY_LIMIT: usize = 100;

// ── Item defaults ───────────────────────────────────────────────

/// Placeholder image used when the toolbar adds an image without content.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1605379399642-870262d3d051?q=80&w=3272&auto=format&fit=crop";

/// Placeholder URL for a link item added without content.
pub const PLACEHOLDER_LINK_URL: &str = "https://example.com";

/// Tint applied to new notes.
pub const NOTE_COLOR: &str = "#FEF08A";

/// Tint applied to every other new item.
pub const SHAPE_COLOR: &str = "#262626";
