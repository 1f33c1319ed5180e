use tracing::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::config::CanvasConfig;
use crate::consts::{DEFAULT_SCALE_PCT, NOTE_COLOR, PLACEHOLDER_IMAGE_URL, PLACEHOLDER_LINK_URL, SHAPE_COLOR};
use crate::dither::{DOWNSCALE, DitherField};
use crate::doc::{CanvasItem, ItemId, ItemKind, ItemStore};
use crate::error::CanvasError;
use crate::hit;
use crate::history::{Command, History};
use crate::input::{Button, Cursor, FrameRect, InputState, Key, Modifiers, Tool, UiState};
use crate::render;
use crate::upload;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An item was appended to the collection.
    ItemAdded(CanvasItem),
    /// An item was removed from the collection.
    ItemRemoved { id: ItemId },
    /// An item's top-left corner changed.
    ItemMoved { id: ItemId, x: f64, y: f64 },
    /// The selected item changed.
    SelectionChanged(Option<ItemId>),
    /// The active tool changed.
    ToolChanged(Tool),
    /// The host should update the pointer cursor.
    SetCursor(Cursor),
    /// Visible state changed; the host should repaint.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: ItemStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub history: History,
    pub config: CanvasConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit tunables.
    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            doc: ItemStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            history: History::new(config.history_limit),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace the item collection. History is cleared because its commands
    /// refer to the old collection.
    pub fn load_snapshot(&mut self, items: Vec<CanvasItem>) {
        self.doc.load_snapshot(items);
        self.history.clear();
        self.input = InputState::Idle;
        if let Some(id) = self.ui.selected_id {
            if self.doc.get(&id).is_none() {
                self.ui.selected_id = None;
            }
        }
        info!(count = self.doc.len(), "loaded canvas snapshot");
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Tools ---

    /// Set the active tool. Any gesture in progress is abandoned.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        if self.ui.tool == tool {
            return actions;
        }
        self.ui.tool = tool;
        if tool.is_placeholder() {
            debug!(?tool, "selected tool has no pointer behavior");
        }
        actions.retain(|action| *action != Action::RenderNeeded);
        actions.extend([Action::ToolChanged(tool), Action::SetCursor(self.cursor()), Action::RenderNeeded]);
        actions
    }

    /// Open or close the link URL popover.
    pub fn toggle_link_input(&mut self) -> Vec<Action> {
        self.ui.link_input_open = !self.ui.link_input_open;
        vec![Action::RenderNeeded]
    }

    // --- Pointer input ---

    /// Handle pointer-down at a viewport-space point.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if self.ui.tool == Tool::Hand || button == Button::Middle {
            let mut actions = self.cancel_gesture();
            self.input = InputState::Panning { last_screen: screen_pt };
            actions.push(Action::SetCursor(self.cursor()));
            return actions;
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let world = self.camera.screen_to_world(screen_pt);
        match self.ui.tool {
            Tool::Frame => {
                self.input = InputState::DrawingFrame { start_world: world, current_world: world };
                vec![Action::RenderNeeded]
            }
            Tool::Select => {
                let hit = hit::hit_test(world, &self.doc);
                self.input = InputState::Pressing { press_screen: screen_pt, press_world: world, hit };
                Vec::new()
            }
            Tool::Hand | Tool::Pen | Tool::Eraser => Vec::new(),
        }
    }

    /// Handle pointer-move at a viewport-space point.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DrawingFrame { start_world, .. } => {
                let current_world = self.camera.screen_to_world(screen_pt);
                self.input = InputState::DrawingFrame { start_world, current_world };
                vec![Action::RenderNeeded]
            }
            InputState::Pressing { press_screen, press_world, hit } => {
                if press_screen.distance(screen_pt) <= self.config.click_slop_px {
                    return Vec::new();
                }
                let Some(id) = hit else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                let Some(item) = self.doc.get(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                self.input = InputState::DraggingItem {
                    id,
                    last_world: press_world,
                    orig_x: item.x,
                    orig_y: item.y,
                };
                self.drag_to(screen_pt)
            }
            InputState::DraggingItem { .. } => self.drag_to(screen_pt),
        }
    }

    /// Handle pointer-up at a viewport-space point.
    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor(self.cursor())],
            InputState::DrawingFrame { start_world, .. } => {
                let end_world = self.camera.screen_to_world(screen_pt);
                self.finish_frame(FrameRect::from_corners(start_world, end_world))
            }
            InputState::Pressing { hit, .. } => match hit {
                Some(id) => self.select(id),
                None => self.clear_selection(),
            },
            InputState::DraggingItem { id, orig_x, orig_y, .. } => self.finish_drag(id, orig_x, orig_y),
        }
    }

    /// Handle the pointer leaving the viewport. Ends any gesture as if the
    /// pointer were released at its last known position; a pending press is
    /// dropped without counting as a click.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::Pressing { .. } => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor(self.cursor())],
            InputState::DrawingFrame { start_world, current_world } => {
                self.finish_frame(FrameRect::from_corners(start_world, current_world))
            }
            InputState::DraggingItem { id, orig_x, orig_y, .. } => self.finish_drag(id, orig_x, orig_y),
        }
    }

    // --- Keyboard ---

    /// Handle a key press. Delete/Backspace removes the selection, Escape
    /// cancels the gesture and clears the selection, and Ctrl/Cmd+Z,
    /// Ctrl/Cmd+Shift+Z and Ctrl+Y drive history.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let name = key.0.as_str();
        if modifiers.command() {
            return match name {
                "z" | "Z" if modifiers.shift => self.redo(),
                "z" | "Z" => self.undo(),
                "y" | "Y" => self.redo(),
                _ => Vec::new(),
            };
        }
        match name {
            "Delete" | "Backspace" => match self.ui.selected_id {
                Some(id) => self.remove_item(&id),
                None => Vec::new(),
            },
            "Escape" => {
                let had_gesture = !matches!(self.input, InputState::Idle);
                let mut actions = self.cancel_gesture();
                for action in self.clear_selection() {
                    if !actions.contains(&action) {
                        actions.push(action);
                    }
                }
                if had_gesture && !actions.contains(&Action::RenderNeeded) {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
            _ => Vec::new(),
        }
    }

    // --- Item creation ---

    /// Create an item from the toolbar, centered on the visible viewport.
    ///
    /// `content` overrides the kind's placeholder payload. The tool always
    /// reverts to [`Tool::Select`].
    pub fn add_item(&mut self, kind: ItemKind, content: Option<String>) -> Vec<Action> {
        let (x, y) = self.spawn_position(kind);
        let content = content.unwrap_or_else(|| default_content(kind).to_owned());
        let mut item = CanvasItem::new(kind, content, x, y);
        item.color = Some(default_color(kind).to_owned());

        let mut actions = self.commit_add(item);
        actions.extend(self.reset_tool());
        actions
    }

    /// Submit the link popover. Blank URLs are ignored.
    pub fn submit_link(&mut self, url: &str) -> Vec<Action> {
        let url = url.trim();
        if url.is_empty() {
            return Vec::new();
        }
        self.ui.link_input_open = false;
        self.add_item(ItemKind::Link, Some(url.to_owned()))
    }

    /// Create an image item from uploaded file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Upload`] when the bytes are empty or not a
    /// recognized image; nothing is appended in that case.
    pub fn add_image_upload(&mut self, bytes: &[u8], file_name: &str) -> Result<Vec<Action>, CanvasError> {
        let uri = upload::image_data_uri(bytes, file_name)?;
        debug!(file_name, size = bytes.len(), "encoded image upload");
        Ok(self.add_item(ItemKind::Image, Some(uri)))
    }

    // --- Item edits ---

    /// Remove an item by id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Action> {
        let Some((index, item)) = self.doc.remove(id) else {
            return Vec::new();
        };
        info!(%id, kind = item.kind.as_str(), "item removed");
        self.history.record(Command::Remove { index, item });

        let mut actions = vec![Action::ItemRemoved { id: *id }];
        if self.ui.selected_id == Some(*id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace an item's prompt annotation. Returns false for unknown ids.
    pub fn set_prompt(&mut self, id: &ItemId, prompt: impl Into<String>) -> bool {
        self.doc.set_prompt(id, prompt)
    }

    // --- Selection ---

    /// Select an item, replacing any previous selection.
    pub fn select(&mut self, id: ItemId) -> Vec<Action> {
        if self.doc.get(&id).is_none() || self.ui.selected_id == Some(id) {
            return Vec::new();
        }
        self.ui.selected_id = Some(id);
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.step_zoom(self.config.scale_step_pct)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.step_zoom(-self.config.scale_step_pct)
    }

    /// Return to 100%.
    pub fn reset_zoom(&mut self) -> Vec<Action> {
        let target = DEFAULT_SCALE_PCT.clamp(self.config.min_scale_pct, self.config.max_scale_pct);
        if (self.camera.scale_pct - target).abs() < f64::EPSILON {
            return Vec::new();
        }
        self.camera.scale_pct = target;
        vec![Action::RenderNeeded]
    }

    // --- History ---

    pub fn undo(&mut self) -> Vec<Action> {
        let Some(command) = self.history.undo(&mut self.doc).cloned() else {
            return Vec::new();
        };
        debug!(id = %command.item_id(), "undo");
        let mut actions = match command {
            Command::Add { item, .. } => vec![Action::ItemRemoved { id: item.id }],
            Command::Remove { item, .. } => vec![Action::ItemAdded(item)],
            Command::Move { id, from, .. } => vec![Action::ItemMoved { id, x: from.x, y: from.y }],
        };
        actions.extend(self.prune_selection());
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let Some(command) = self.history.redo(&mut self.doc).cloned() else {
            return Vec::new();
        };
        debug!(id = %command.item_id(), "redo");
        let mut actions = match command {
            Command::Add { item, .. } => vec![Action::ItemAdded(item)],
            Command::Remove { item, .. } => vec![Action::ItemRemoved { id: item.id }],
            Command::Move { id, to, .. } => vec![Action::ItemMoved { id, x: to.x, y: to.y }],
        };
        actions.extend(self.prune_selection());
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.doc.get(id)
    }

    /// All items, bottom-to-top.
    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        self.doc.as_slice()
    }

    /// The dashed preview rectangle while a frame is being drawn.
    #[must_use]
    pub fn frame_preview(&self) -> Option<FrameRect> {
        self.input.frame_preview()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Cursor for the current tool and gesture.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        match self.ui.tool {
            Tool::Hand if self.input.is_panning() => Cursor::Grabbing,
            Tool::Hand => Cursor::Grab,
            Tool::Frame => Cursor::Crosshair,
            _ if self.input.is_panning() => Cursor::Grabbing,
            Tool::Select | Tool::Pen | Tool::Eraser => Cursor::Default,
        }
    }

    /// Viewport size, substituting the configured fallback when unknown.
    #[must_use]
    pub fn effective_viewport(&self) -> (f64, f64) {
        let (fw, fh) = self.config.fallback_viewport;
        let w = if self.viewport_width > 0.0 { self.viewport_width } else { fw };
        let h = if self.viewport_height > 0.0 { self.viewport_height } else { fh };
        (w, h)
    }

    // --- Internals ---

    fn spawn_position(&self, kind: ItemKind) -> (f64, f64) {
        let (w, h) = self.effective_viewport();
        let center = self.camera.screen_to_world(Point::new(w / 2.0, h / 2.0));
        let (iw, ih) = kind.default_size();
        (center.x - iw / 2.0, center.y - ih / 2.0)
    }

    fn commit_add(&mut self, item: CanvasItem) -> Vec<Action> {
        let index = self.doc.len();
        info!(id = %item.id, kind = item.kind.as_str(), x = item.x, y = item.y, "item added");
        self.doc.insert(item.clone());
        self.history.record(Command::Add { index, item: item.clone() });
        vec![Action::ItemAdded(item), Action::RenderNeeded]
    }

    fn reset_tool(&mut self) -> Vec<Action> {
        self.ui.tool = Tool::Select;
        vec![Action::ToolChanged(Tool::Select), Action::SetCursor(self.cursor())]
    }

    fn finish_frame(&mut self, rect: FrameRect) -> Vec<Action> {
        if !rect.exceeds(self.config.min_frame_size) {
            debug!(width = rect.width, height = rect.height, "frame below minimum size; discarded");
            return vec![Action::RenderNeeded];
        }
        let mut item = CanvasItem::new(ItemKind::Frame, "", rect.x, rect.y);
        item.width = Some(rect.width);
        item.height = Some(rect.height);

        let mut actions = self.commit_add(item);
        actions.extend(self.reset_tool());
        actions
    }

    fn drag_to(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::DraggingItem { id, last_world, orig_x, orig_y } = self.input else {
            return Vec::new();
        };
        let world = self.camera.screen_to_world(screen_pt);
        let Some(item) = self.doc.get(&id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let x = item.x + (world.x - last_world.x);
        let y = item.y + (world.y - last_world.y);
        self.doc.move_to(&id, x, y);
        self.input = InputState::DraggingItem { id, last_world: world, orig_x, orig_y };
        vec![Action::RenderNeeded]
    }

    fn finish_drag(&mut self, id: ItemId, orig_x: f64, orig_y: f64) -> Vec<Action> {
        let Some(item) = self.doc.get(&id) else {
            return Vec::new();
        };
        let to = item.origin();
        let from = Point::new(orig_x, orig_y);
        if from == to {
            return Vec::new();
        }
        self.history.record(Command::Move { id, from, to });
        vec![Action::ItemMoved { id, x: to.x, y: to.y }, Action::RenderNeeded]
    }

    /// Abandon the gesture in progress. An item being dragged goes back to
    /// where the drag started and nothing is recorded.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        let InputState::DraggingItem { id, orig_x, orig_y, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let moved = self
            .doc
            .get(&id)
            .is_some_and(|item| item.origin() != Point::new(orig_x, orig_y));
        if !moved || !self.doc.move_to(&id, orig_x, orig_y) {
            return Vec::new();
        }
        debug!(%id, "drag cancelled, item restored");
        vec![Action::ItemMoved { id, x: orig_x, y: orig_y }, Action::RenderNeeded]
    }

    fn step_zoom(&mut self, step: f64) -> Vec<Action> {
        let before = self.camera.scale_pct;
        self.camera
            .step_scale(step, self.config.min_scale_pct, self.config.max_scale_pct);
        if (self.camera.scale_pct - before).abs() < f64::EPSILON {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    fn prune_selection(&mut self) -> Vec<Action> {
        match self.ui.selected_id {
            Some(id) if self.doc.get(&id).is_none() => {
                self.ui.selected_id = None;
                vec![Action::SelectionChanged(None)]
            }
            _ => Vec::new(),
        }
    }
}

fn default_content(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Image => PLACEHOLDER_IMAGE_URL,
        ItemKind::Link => PLACEHOLDER_LINK_URL,
        ItemKind::Note
        | ItemKind::Square
        | ItemKind::Circle
        | ItemKind::Frame
        | ItemKind::Line
        | ItemKind::Arrow => "",
    }
}

fn default_color(kind: ItemKind) -> &'static str {
    if kind == ItemKind::Note { NOTE_COLOR } else { SHAPE_COLOR }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_size(width: f64, height: f64) -> (usize, usize) {
    (width.ceil() as usize, height.ceil() as usize)
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    background: Option<DitherField>,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new(), background: None }
    }

    /// Paint the animated dither behind the grid from now on.
    pub fn enable_background(&mut self, seed: u64) {
        let (w, h) = css_size(self.core.viewport_width, self.core.viewport_height);
        self.background = Some(DitherField::for_viewport(w, h, seed));
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, items: Vec<CanvasItem>) {
        self.core.load_snapshot(items);
    }

    /// Parse and load a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Snapshot`] for malformed JSON; the current
    /// collection is left untouched.
    pub fn load_snapshot_json(&mut self, json: &str) -> Result<(), CanvasError> {
        let store = ItemStore::from_json(json)?;
        self.core.load_snapshot(store.as_slice().to_vec());
        Ok(())
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn toggle_link_input(&mut self) -> Vec<Action> {
        self.core.toggle_link_input()
    }

    pub fn add_item(&mut self, kind: ItemKind, content: Option<String>) -> Vec<Action> {
        self.core.add_item(kind, content)
    }

    pub fn submit_link(&mut self, url: &str) -> Vec<Action> {
        self.core.submit_link(url)
    }

    /// See [`EngineCore::add_image_upload`].
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Upload`] for empty or unrecognized files.
    pub fn add_image_upload(&mut self, bytes: &[u8], file_name: &str) -> Result<Vec<Action>, CanvasError> {
        self.core.add_image_upload(bytes, file_name)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Action> {
        self.core.remove_item(id)
    }

    pub fn set_prompt(&mut self, id: &ItemId, prompt: impl Into<String>) -> bool {
        self.core.set_prompt(id, prompt)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    pub fn reset_zoom(&mut self) -> Vec<Action> {
        self.core.reset_zoom()
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas
            .set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas
            .set_height((self.core.viewport_height * self.core.dpr).round() as u32);
        if let Some(field) = &mut self.background {
            let (w, h) = css_size(self.core.viewport_width, self.core.viewport_height);
            field.resize(w.div_ceil(DOWNSCALE), h.div_ceil(DOWNSCALE));
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas. `time_ms` drives the background
    /// animation when one is enabled.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self, time_ms: f64) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("2d context unavailable"));
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into().map_err(JsValue::from)?;
        let scene = render::build_scene(&self.core);
        let background = self.background.as_ref().map(|field| field.frame(time_ms));
        render::paint(
            &ctx,
            &scene,
            background.as_ref(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.core.item(id)
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.core.cursor()
    }
}
