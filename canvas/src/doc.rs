//! Document model: canvas items, their kinds, and the in-memory store.
//!
//! `CanvasItem` is the only entity on the canvas. Its `kind` is a closed sum
//! type, so every consumer (hit-testing, scene building, painting) dispatches
//! with a single exhaustive `match`. `ItemStore` keeps items in insertion
//! order; later items stack above earlier ones.
//!
//! Items live only in memory for the session. `to_json` / `from_json` exist so
//! a host can hand a collection in and out, not for persistence.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;

/// Unique identifier for a canvas item.
pub type ItemId = Uuid;

/// The kind of a canvas item. Fixed for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Picture; `content` is a data URI or remote URL.
    Image,
    /// Website preview; `content` is the URL.
    Link,
    /// Sticky note; `content` is free text.
    Note,
    /// Rounded square shape.
    Square,
    /// Circle inscribed within the bounding box.
    Circle,
    /// User-drawn rectangular region.
    Frame,
    /// Horizontal line.
    Line,
    /// Horizontal line ending in an arrowhead.
    Arrow,
}

impl ItemKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ItemKind; 8] = [
        Self::Image,
        Self::Link,
        Self::Note,
        Self::Square,
        Self::Circle,
        Self::Frame,
        Self::Line,
        Self::Arrow,
    ];

    /// Size used when an item carries no explicit width/height.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Note => (256.0, 160.0),
            Self::Link => (480.0, 320.0),
            Self::Image => (320.0, 240.0),
            Self::Frame => (384.0, 384.0),
            Self::Square | Self::Circle => (128.0, 128.0),
            Self::Line | Self::Arrow => (192.0, 48.0),
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Link => "link",
            Self::Note => "note",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Frame => "frame",
            Self::Line => "line",
            Self::Arrow => "arrow",
        }
    }
}

/// An item on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Variant tag; drives rendering and hit-testing.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Kind-dependent payload. Empty for pure shapes.
    #[serde(default)]
    pub content: String,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    /// Explicit width; `None` falls back to [`ItemKind::default_size`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height; `None` falls back to [`ItemKind::default_size`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Display tint (CSS color string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// User-supplied context describing how to use the item.
    #[serde(default)]
    pub prompt: String,
}

impl CanvasItem {
    /// Create an item with a fresh id at `(x, y)` and default size.
    #[must_use]
    pub fn new(kind: ItemKind, content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            x,
            y,
            width: None,
            height: None,
            color: None,
            prompt: String::new(),
        }
    }

    /// Effective width, applying the kind default when unset.
    #[must_use]
    pub fn width_or_default(&self) -> f64 {
        self.width.unwrap_or(self.kind.default_size().0)
    }

    /// Effective height, applying the kind default when unset.
    #[must_use]
    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or(self.kind.default_size().1)
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered in-memory store of canvas items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<CanvasItem>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item on top. If an item with the same `id` already exists it
    /// is replaced in place, keeping its stacking position.
    pub fn insert(&mut self, item: CanvasItem) {
        match self.index_of(&item.id) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    /// Insert at a stacking position, clamped to the end. Used by undo to put
    /// a removed item back where it was.
    pub fn insert_at(&mut self, index: usize, item: CanvasItem) {
        if let Some(existing) = self.index_of(&item.id) {
            self.items.remove(existing);
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Remove an item by id, returning its former position and the item.
    pub fn remove(&mut self, id: &ItemId) -> Option<(usize, CanvasItem)> {
        let index = self.index_of(id)?;
        Some((index, self.items.remove(index)))
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Return a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// Stacking position of an item.
    #[must_use]
    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// Set an item's top-left corner. Returns false if the item doesn't exist.
    pub fn move_to(&mut self, id: &ItemId, x: f64, y: f64) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.x = x;
        item.y = y;
        true
    }

    /// Replace an item's prompt annotation. Returns false if the item doesn't exist.
    pub fn set_prompt(&mut self, id: &ItemId, prompt: impl Into<String>) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.prompt = prompt.into();
        true
    }

    /// Replace an item's content payload. Returns false if the item doesn't exist.
    pub fn set_content(&mut self, id: &ItemId, content: impl Into<String>) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.content = content.into();
        true
    }

    /// Replace all items with a snapshot. Later duplicates of an id win.
    pub fn load_snapshot(&mut self, items: Vec<CanvasItem>) {
        self.items.clear();
        for item in items {
            self.insert(item);
        }
    }

    /// Items bottom-to-top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CanvasItem> {
        self.items.iter()
    }

    /// Items as a slice, bottom-to-top.
    #[must_use]
    pub fn as_slice(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize the collection as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<CanvasItem> = serde_json::from_str(json)?;
        let mut store = Self::new();
        store.load_snapshot(items);
        Ok(store)
    }
}
