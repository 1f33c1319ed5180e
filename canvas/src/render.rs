//! Rendering: builds a display list from engine state and paints it to a 2D context.
//!
//! [`build_scene`] is pure: it reads the engine by reference and produces a
//! [`Scene`] that can be inspected in tests. [`paint`] is the only place that
//! touches [`web_sys::CanvasRenderingContext2d`].
//!
//! The scene has two layers. The content layer is drawn under the camera's
//! pan/scale transform; the overlay layer is drawn in viewport pixels and is
//! unaffected by pan or zoom.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Grid, Point};
use crate::dither::{DOWNSCALE, DitherFrame};
use crate::doc::{CanvasItem, ItemId, ItemKind};
use crate::engine::EngineCore;
use crate::input::{FrameRect, Tool};

/// Gap between an item's bounds and its selection outline, in canvas units.
pub const SELECTION_INSET: f64 = 4.0;

/// Arrowhead length in canvas units.
const ARROW_HEAD_LEN: f64 = 10.0;
/// Arrowhead half-height in canvas units.
const ARROW_HEAD_HALF: f64 = 6.0;
/// Height of the link card's address bar.
const LINK_BAR_HEIGHT: f64 = 32.0;
/// Height of the prompt strip under image and link cards.
const PROMPT_STRIP_HEIGHT: f64 = 60.0;
/// Height of a frame's title strip.
const FRAME_TITLE_HEIGHT: f64 = 24.0;
/// Corner radius shared by cards and shapes.
const CARD_RADIUS: f64 = 12.0;
/// Dash segment for frames and the frame preview, in screen pixels.
const DASH_PX: f64 = 6.0;

const BACKGROUND: &str = "#050505";
const GRID_DOT: &str = "rgba(255, 255, 255, 0.08)";
const DITHER_DOT: &str = "rgba(255, 255, 255, 0.6)";
const CARD_FILL: &str = "#1C1C1E";
const CARD_BORDER: &str = "rgba(255, 255, 255, 0.10)";
const LINK_BAR_FILL: &str = "#2A2A2D";
const PROMPT_FILL: &str = "#141414";
const MUTED_TEXT: &str = "#737373";
const NOTE_TEXT: &str = "#171717";
const SELECTION_STROKE: &str = "rgba(255, 255, 255, 0.20)";
const FRAME_STROKE: &str = "rgba(255, 255, 255, 0.20)";
const FRAME_FILL: &str = "rgba(255, 255, 255, 0.02)";
const STROKE_WHITE: &str = "#FFFFFF";

// =============================================================
// Display list
// =============================================================

/// Axis-aligned box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn of_item(item: &CanvasItem) -> Self {
        Self {
            x: item.x,
            y: item.y,
            width: item.width_or_default(),
            height: item.height_or_default(),
        }
    }

    /// Grow the box by `by` on every side.
    #[must_use]
    pub fn inflate(self, by: f64) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + by * 2.0,
            height: self.height + by * 2.0,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl From<FrameRect> for Bounds {
    fn from(rect: FrameRect) -> Self {
        Self { x: rect.x, y: rect.y, width: rect.width, height: rect.height }
    }
}

/// How a single item is drawn. One variant per item kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemVisual {
    Image { bounds: Bounds, source: String, prompt: String },
    Link { bounds: Bounds, url: String, prompt: String },
    Note { bounds: Bounds, text: String, fill: String },
    Square { bounds: Bounds, fill: String },
    Circle { bounds: Bounds, fill: String },
    Frame { bounds: Bounds },
    Line { from: Point, to: Point },
    Arrow { from: Point, to: Point },
}

/// One item in the content layer, tagged with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemNode {
    pub id: ItemId,
    pub visual: ItemVisual,
}

/// Layer drawn under the camera transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayer {
    pub grid: Grid,
    /// Items bottom-to-top.
    pub items: Vec<ItemNode>,
    /// Outline around the selected item.
    pub selection: Option<Bounds>,
    /// Dashed rectangle while a frame is being drawn. Always on top.
    pub frame_preview: Option<Bounds>,
}

/// A toolbar tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolButton {
    pub tool: Tool,
    pub active: bool,
    /// Placeholder tools are shown but have no canvas behavior.
    pub placeholder: bool,
}

/// Layer drawn in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub tools: Vec<ToolButton>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub zoom_label: String,
    pub link_input_open: bool,
}

/// The full frame to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub content: ContentLayer,
    pub overlay: Overlay,
}

/// Toolbar order, left to right.
const TOOLBAR: [Tool; 5] = [Tool::Select, Tool::Hand, Tool::Frame, Tool::Pen, Tool::Eraser];

/// Build the display list for the current engine state.
#[must_use]
pub fn build_scene(core: &EngineCore) -> Scene {
    let camera = core.camera();

    let items = core
        .items()
        .iter()
        .map(|item| ItemNode { id: item.id, visual: item_visual(item) })
        .collect();

    let selection = core
        .selection()
        .and_then(|id| core.item(&id))
        .map(|item| Bounds::of_item(item).inflate(SELECTION_INSET));

    let content = ContentLayer {
        grid: camera.grid(core.config.grid_spacing_px),
        items,
        selection,
        frame_preview: core.frame_preview().map(Bounds::from),
    };

    let tool = core.tool();
    let overlay = Overlay {
        tools: TOOLBAR
            .iter()
            .map(|&t| ToolButton { tool: t, active: t == tool, placeholder: t.is_placeholder() })
            .collect(),
        can_undo: core.can_undo(),
        can_redo: core.can_redo(),
        zoom_label: zoom_label(camera.scale_pct),
        link_input_open: core.ui.link_input_open,
    };

    Scene { camera, content, overlay }
}

/// Zoom percentage as shown in the toolbar.
#[must_use]
pub fn zoom_label(scale_pct: f64) -> String {
    format!("{}%", scale_pct.round())
}

/// Choose the visual for an item. The only place item kinds are dispatched for drawing.
#[must_use]
pub fn item_visual(item: &CanvasItem) -> ItemVisual {
    let bounds = Bounds::of_item(item);
    let fill = || item.color.clone().unwrap_or_else(|| crate::consts::SHAPE_COLOR.to_owned());
    match item.kind {
        ItemKind::Image => ItemVisual::Image {
            bounds,
            source: item.content.clone(),
            prompt: item.prompt.clone(),
        },
        ItemKind::Link => ItemVisual::Link {
            bounds,
            url: item.content.clone(),
            prompt: item.prompt.clone(),
        },
        ItemKind::Note => ItemVisual::Note {
            bounds,
            text: item.content.clone(),
            fill: item.color.clone().unwrap_or_else(|| crate::consts::NOTE_COLOR.to_owned()),
        },
        ItemKind::Square => ItemVisual::Square { bounds, fill: fill() },
        ItemKind::Circle => ItemVisual::Circle { bounds, fill: fill() },
        ItemKind::Frame => ItemVisual::Frame { bounds },
        ItemKind::Line | ItemKind::Arrow => {
            let mid_y = bounds.y + bounds.height / 2.0;
            let from = Point::new(bounds.x, mid_y);
            let to = Point::new(bounds.x + bounds.width, mid_y);
            if item.kind == ItemKind::Arrow {
                ItemVisual::Arrow { from, to }
            } else {
                ItemVisual::Line { from, to }
            }
        }
    }
}

/// First grid line at or after the viewport edge for a pattern phase.
#[must_use]
pub fn grid_start(offset: f64, spacing: f64) -> f64 {
    if spacing <= 0.0 {
        return 0.0;
    }
    offset.rem_euclid(spacing)
}

// =============================================================
// Painting
// =============================================================

/// Paint a scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    background: Option<&DitherFrame>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 0: background, dither and grid in screen space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    if let Some(frame) = background {
        ctx.set_fill_style_str(DITHER_DOT);
        let size = dither_cell_size();
        for (x, y) in dither_cells(frame) {
            ctx.fill_rect(x, y, size, size);
        }
    }
    paint_grid(ctx, scene.content.grid, viewport_w, viewport_h);

    // Layer 1: content under the camera transform.
    let factor = scene.camera.factor();
    ctx.save();
    ctx.translate(scene.camera.pan_x, scene.camera.pan_y)?;
    ctx.scale(factor, factor)?;

    for node in &scene.content.items {
        paint_item(ctx, &node.visual)?;
    }
    if let Some(outline) = scene.content.selection {
        paint_selection(ctx, outline, factor)?;
    }
    if let Some(preview) = scene.content.frame_preview {
        paint_frame_preview(ctx, preview, factor)?;
    }
    ctx.restore();

    // Layer 2: overlay in screen space.
    paint_overlay(ctx, &scene.overlay, viewport_w, viewport_h)
}

/// Top-left viewport corners of the lit dither cells, row-major. Each cell
/// covers `DOWNSCALE` CSS pixels per side.
pub fn dither_cells(frame: &DitherFrame) -> impl Iterator<Item = (f64, f64)> + '_ {
    let size = dither_cell_size();
    frame.rows().enumerate().flat_map(move |(y, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &p)| p == 255)
            .map(move |(x, _)| (cell_offset(x, size), cell_offset(y, size)))
    })
}

#[allow(clippy::cast_precision_loss)]
fn dither_cell_size() -> f64 {
    DOWNSCALE as f64
}

#[allow(clippy::cast_precision_loss)]
fn cell_offset(index: usize, size: f64) -> f64 {
    index as f64 * size
}

fn paint_grid(ctx: &CanvasRenderingContext2d, grid: Grid, viewport_w: f64, viewport_h: f64) {
    if grid.spacing < 2.0 {
        return;
    }
    ctx.set_fill_style_str(GRID_DOT);
    let mut y = grid_start(grid.offset_y, grid.spacing);
    while y < viewport_h {
        let mut x = grid_start(grid.offset_x, grid.spacing);
        while x < viewport_w {
            ctx.fill_rect(x, y, 1.0, 1.0);
            x += grid.spacing;
        }
        y += grid.spacing;
    }
}

fn paint_item(ctx: &CanvasRenderingContext2d, visual: &ItemVisual) -> Result<(), JsValue> {
    match visual {
        ItemVisual::Image { bounds, source, prompt } => paint_image_card(ctx, *bounds, source, prompt),
        ItemVisual::Link { bounds, url, prompt } => paint_link_card(ctx, *bounds, url, prompt),
        ItemVisual::Note { bounds, text, fill } => paint_note(ctx, *bounds, text, fill),
        ItemVisual::Square { bounds, fill } => {
            rounded_rect(ctx, *bounds, CARD_RADIUS * 1.5)?;
            ctx.set_fill_style_str(fill);
            ctx.fill();
            ctx.set_stroke_style_str(CARD_BORDER);
            ctx.set_line_width(1.0);
            ctx.stroke();
            Ok(())
        }
        ItemVisual::Circle { bounds, fill } => {
            let c = bounds.center();
            ctx.begin_path();
            ctx.ellipse(c.x, c.y, bounds.width / 2.0, bounds.height / 2.0, 0.0, 0.0, 2.0 * PI)?;
            ctx.set_fill_style_str(fill);
            ctx.fill();
            ctx.set_stroke_style_str(CARD_BORDER);
            ctx.set_line_width(1.0);
            ctx.stroke();
            Ok(())
        }
        ItemVisual::Frame { bounds } => paint_frame(ctx, *bounds),
        ItemVisual::Line { from, to } => {
            paint_stroke(ctx, *from, *to);
            Ok(())
        }
        ItemVisual::Arrow { from, to } => {
            let shaft_end = Point::new(to.x - ARROW_HEAD_LEN, to.y);
            paint_stroke(ctx, *from, shaft_end);
            ctx.begin_path();
            ctx.move_to(to.x, to.y);
            ctx.line_to(shaft_end.x, to.y - ARROW_HEAD_HALF);
            ctx.line_to(shaft_end.x, to.y + ARROW_HEAD_HALF);
            ctx.close_path();
            ctx.set_fill_style_str(STROKE_WHITE);
            ctx.fill();
            Ok(())
        }
    }
}

fn paint_stroke(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_stroke_style_str(STROKE_WHITE);
    ctx.set_line_width(4.0);
    ctx.set_line_cap("round");
    ctx.stroke();
}

fn paint_note(ctx: &CanvasRenderingContext2d, bounds: Bounds, text: &str, fill: &str) -> Result<(), JsValue> {
    rounded_rect(ctx, bounds, CARD_RADIUS)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();

    let pad = 16.0;
    ctx.set_font("500 14px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    if text.is_empty() {
        ctx.set_fill_style_str(MUTED_TEXT);
        ctx.fill_text("Type text...", bounds.x + pad, bounds.y + pad)?;
    } else {
        ctx.set_fill_style_str(NOTE_TEXT);
        for (i, line) in text.lines().enumerate() {
            let y = bounds.y + pad + f64_from_index(i) * 20.0;
            if y > bounds.y + bounds.height - pad {
                break;
            }
            ctx.fill_text(line, bounds.x + pad, y)?;
        }
    }

    ctx.set_font("500 10px sans-serif");
    ctx.set_fill_style_str(MUTED_TEXT);
    ctx.set_text_baseline("bottom");
    ctx.fill_text("TEXT", bounds.x + pad, bounds.y + bounds.height - pad / 2.0)?;
    Ok(())
}

fn paint_image_card(ctx: &CanvasRenderingContext2d, bounds: Bounds, source: &str, prompt: &str) -> Result<(), JsValue> {
    paint_card(ctx, bounds)?;

    let body_h = (bounds.height - PROMPT_STRIP_HEIGHT).max(0.0);
    ctx.set_fill_style_str("#171717");
    ctx.fill_rect(bounds.x, bounds.y, bounds.width, body_h);

    let label = if source.starts_with("data:") { "uploaded image" } else { "image" };
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(MUTED_TEXT);
    ctx.fill_text(label, bounds.x + bounds.width / 2.0, bounds.y + body_h / 2.0)?;

    paint_prompt_strip(ctx, bounds, prompt, "Describe how to use this image...")
}

fn paint_link_card(ctx: &CanvasRenderingContext2d, bounds: Bounds, url: &str, prompt: &str) -> Result<(), JsValue> {
    paint_card(ctx, bounds)?;

    ctx.set_fill_style_str(LINK_BAR_FILL);
    ctx.fill_rect(bounds.x, bounds.y, bounds.width, LINK_BAR_HEIGHT.min(bounds.height));

    ctx.set_font("10px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(MUTED_TEXT);
    ctx.fill_text_with_max_width(url, bounds.x + 12.0, bounds.y + LINK_BAR_HEIGHT / 2.0, (bounds.width - 24.0).max(0.0))?;

    let preview_h = (bounds.height - LINK_BAR_HEIGHT - PROMPT_STRIP_HEIGHT).max(0.0);
    ctx.set_fill_style_str("#FFFFFF");
    ctx.fill_rect(bounds.x, bounds.y + LINK_BAR_HEIGHT, bounds.width, preview_h);

    paint_prompt_strip(ctx, bounds, prompt, "Describe what to use from this website...")
}

fn paint_card(ctx: &CanvasRenderingContext2d, bounds: Bounds) -> Result<(), JsValue> {
    rounded_rect(ctx, bounds, CARD_RADIUS)?;
    ctx.set_fill_style_str(CARD_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(CARD_BORDER);
    ctx.set_line_width(1.0);
    ctx.stroke();
    Ok(())
}

fn paint_prompt_strip(
    ctx: &CanvasRenderingContext2d,
    bounds: Bounds,
    prompt: &str,
    placeholder: &str,
) -> Result<(), JsValue> {
    let strip_h = PROMPT_STRIP_HEIGHT.min(bounds.height);
    let y = bounds.y + bounds.height - strip_h;
    ctx.set_fill_style_str(PROMPT_FILL);
    ctx.fill_rect(bounds.x + 4.0, y + 4.0, (bounds.width - 8.0).max(0.0), (strip_h - 8.0).max(0.0));

    ctx.set_font("12px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    let (text, color) = if prompt.is_empty() { (placeholder, "#525252") } else { (prompt, "#D4D4D4") };
    ctx.set_fill_style_str(color);
    ctx.fill_text_with_max_width(text, bounds.x + 16.0, y + 12.0, (bounds.width - 32.0).max(0.0))
}

fn paint_frame(ctx: &CanvasRenderingContext2d, bounds: Bounds) -> Result<(), JsValue> {
    rounded_rect(ctx, bounds, CARD_RADIUS)?;
    ctx.set_fill_style_str(FRAME_FILL);
    ctx.fill();
    ctx.set_line_dash(&dash_array(DASH_PX))?;
    ctx.set_stroke_style_str(FRAME_STROKE);
    ctx.set_line_width(2.0);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;

    if bounds.height > FRAME_TITLE_HEIGHT {
        ctx.begin_path();
        ctx.move_to(bounds.x, bounds.y + FRAME_TITLE_HEIGHT);
        ctx.line_to(bounds.x + bounds.width, bounds.y + FRAME_TITLE_HEIGHT);
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(CARD_BORDER);
        ctx.stroke();
    }
    ctx.set_font("10px monospace");
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(MUTED_TEXT);
    ctx.fill_text("FRAME", bounds.x + 12.0, bounds.y + FRAME_TITLE_HEIGHT.min(bounds.height) / 2.0)?;
    Ok(())
}

fn paint_selection(ctx: &CanvasRenderingContext2d, outline: Bounds, factor: f64) -> Result<(), JsValue> {
    rounded_rect(ctx, outline, CARD_RADIUS)?;
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(2.0 / factor);
    ctx.stroke();
    Ok(())
}

fn paint_frame_preview(ctx: &CanvasRenderingContext2d, preview: Bounds, factor: f64) -> Result<(), JsValue> {
    ctx.set_line_dash(&dash_array(DASH_PX / factor))?;
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.50)");
    ctx.set_line_width(1.5 / factor);
    ctx.stroke_rect(preview.x, preview.y, preview.width, preview.height);
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.05)");
    ctx.fill_rect(preview.x, preview.y, preview.width, preview.height);
    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn paint_overlay(ctx: &CanvasRenderingContext2d, overlay: &Overlay, viewport_w: f64, viewport_h: f64) -> Result<(), JsValue> {
    let chip_w = 64.0;
    let chip_h = 28.0;
    let gap = 4.0;
    let slots = overlay.tools.len() + 3;
    let bar_w = f64_from_index(slots) * (chip_w + gap) + gap;
    let bar_x = (viewport_w - bar_w) / 2.0;
    let bar_y = viewport_h - chip_h - 24.0;

    ctx.set_fill_style_str("rgba(28, 28, 30, 0.90)");
    ctx.fill_rect(bar_x, bar_y - gap, bar_w, chip_h + gap * 2.0);

    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let mut x = bar_x + gap;
    for button in &overlay.tools {
        if button.active {
            ctx.set_fill_style_str("rgba(255, 255, 255, 0.15)");
            ctx.fill_rect(x, bar_y, chip_w, chip_h);
        }
        let color = if button.placeholder { "#525252" } else { "#E5E5E5" };
        paint_chip_label(ctx, tool_label(button.tool), x, bar_y, chip_w, chip_h, color)?;
        x += chip_w + gap;
    }

    let undo_color = if overlay.can_undo { "#E5E5E5" } else { "#404040" };
    paint_chip_label(ctx, "Undo", x, bar_y, chip_w, chip_h, undo_color)?;
    x += chip_w + gap;
    let redo_color = if overlay.can_redo { "#E5E5E5" } else { "#404040" };
    paint_chip_label(ctx, "Redo", x, bar_y, chip_w, chip_h, redo_color)?;
    x += chip_w + gap;
    paint_chip_label(ctx, &overlay.zoom_label, x, bar_y, chip_w, chip_h, "#A3A3A3")?;

    if overlay.link_input_open {
        let w = 320.0;
        let h = 40.0;
        let px = (viewport_w - w) / 2.0;
        let py = bar_y - h - 16.0;
        ctx.set_fill_style_str(CARD_FILL);
        ctx.fill_rect(px, py, w, h);
        ctx.set_stroke_style_str(CARD_BORDER);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(px, py, w, h);
        ctx.set_text_align("left");
        ctx.set_fill_style_str(MUTED_TEXT);
        ctx.fill_text("Paste URL...", px + 12.0, py + h / 2.0)?;
    }
    Ok(())
}

fn paint_chip_label(
    ctx: &CanvasRenderingContext2d,
    label: &str,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.fill_text(label, x + w / 2.0, y + h / 2.0)
}

fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Select => "Select",
        Tool::Hand => "Hand",
        Tool::Frame => "Frame",
        Tool::Pen => "Pen",
        Tool::Eraser => "Eraser",
    }
}

// =============================================================
// Helpers
// =============================================================

fn rounded_rect(ctx: &CanvasRenderingContext2d, b: Bounds, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(b.width / 2.0).min(b.height / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(b.x + r, b.y);
    ctx.arc_to(b.x + b.width, b.y, b.x + b.width, b.y + b.height, r)?;
    ctx.arc_to(b.x + b.width, b.y + b.height, b.x, b.y + b.height, r)?;
    ctx.arc_to(b.x, b.y + b.height, b.x, b.y, r)?;
    ctx.arc_to(b.x, b.y, b.x + b.width, b.y, r)?;
    ctx.close_path();
    Ok(())
}

fn dash_array(segment: f64) -> js_sys::Array {
    let dash = js_sys::Array::new();
    dash.push(&JsValue::from_f64(segment));
    dash.push(&JsValue::from_f64(segment));
    dash
}

#[allow(clippy::cast_precision_loss)]
fn f64_from_index(i: usize) -> f64 {
    i as f64
}
