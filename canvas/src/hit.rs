#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{CanvasItem, ItemId, ItemKind, ItemStore};

/// Whether `world_pt` lies on `item`.
///
/// Circles use the inscribed ellipse; everything else, including lines and
/// arrows, uses the bounding box.
#[must_use]
pub fn item_contains(item: &CanvasItem, world_pt: Point) -> bool {
    let w = item.width_or_default();
    let h = item.height_or_default();
    let inside_box =
        world_pt.x >= item.x && world_pt.x <= item.x + w && world_pt.y >= item.y && world_pt.y <= item.y + h;
    if !inside_box {
        return false;
    }
    match item.kind {
        ItemKind::Circle => {
            let rx = w / 2.0;
            let ry = h / 2.0;
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let nx = (world_pt.x - (item.x + rx)) / rx;
            let ny = (world_pt.y - (item.y + ry)) / ry;
            nx * nx + ny * ny <= 1.0
        }
        ItemKind::Image
        | ItemKind::Link
        | ItemKind::Note
        | ItemKind::Square
        | ItemKind::Frame
        | ItemKind::Line
        | ItemKind::Arrow => true,
    }
}

/// Topmost item under `world_pt`, if any.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &ItemStore) -> Option<ItemId> {
    doc.iter()
        .rev()
        .find(|item| item_contains(item, world_pt))
        .map(|item| item.id)
}
