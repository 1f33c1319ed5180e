#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::DEFAULT_SCALE_PCT;

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in screen pixels and are applied after scaling.
/// `scale_pct` is a percentage (100 = no zoom) anchored at the viewport's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale_pct: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, scale_pct: DEFAULT_SCALE_PCT }
    }
}

impl Camera {
    /// Multiplicative zoom factor (`scale_pct / 100`).
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.scale_pct / 100.0
    }

    /// Convert a viewport-space point to canvas coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let factor = self.factor();
        Point {
            x: (screen.x - self.pan_x) / factor,
            y: (screen.y - self.pan_y) / factor,
        }
    }

    /// Convert a canvas-space point to viewport coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let factor = self.factor();
        Point {
            x: world.x * factor + self.pan_x,
            y: world.y * factor + self.pan_y,
        }
    }

    /// Shift the content layer by a screen-space delta. The delta is not scaled.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Step the zoom by `step` percentage points, clamped to `[min, max]`.
    pub fn step_scale(&mut self, step: f64, min: f64, max: f64) {
        self.scale_pct = (self.scale_pct + step).clamp(min, max);
    }

    /// Decorative grid geometry for the current camera, given the dot
    /// spacing at 100% zoom.
    #[must_use]
    pub fn grid(&self, base_spacing: f64) -> Grid {
        Grid {
            spacing: base_spacing * self.factor(),
            offset_x: self.pan_x,
            offset_y: self.pan_y,
        }
    }
}

/// Screen-space placement of the repeating dot grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Distance between dots in screen pixels.
    pub spacing: f64,
    /// Horizontal phase of the pattern (tracks pan).
    pub offset_x: f64,
    /// Vertical phase of the pattern (tracks pan).
    pub offset_y: f64,
}
