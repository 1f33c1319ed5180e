//! Ordered-dither background: soft drifting light blobs along the bottom of
//! the viewport, quantized to pure black and white with an 8×8 Bayer matrix.
//!
//! The field is rasterized in software at half the viewport resolution so it
//! can be tested and rendered headless. Wave phases and drift speeds come from
//! a seeded RNG; the same seed, size, and timestamp always yield the same frame.

#[cfg(test)]
#[path = "dither_test.rs"]
mod dither_test;

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 8×8 Bayer threshold matrix, values `0..64`.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Viewport pixels per dither cell along each axis.
pub const DOWNSCALE: usize = 2;
/// Number of light blobs.
pub const WAVE_COUNT: usize = 3;
/// Background luminance before waves are composited.
pub const BACKGROUND_LUMA: f64 = 5.0;

const RADIUS_FRACTION: f64 = 0.7;
const SCALE_X: f64 = 1.5;
const SCALE_Y: f64 = 1.2;
const BASE_Y_FRACTION: f64 = 0.9;
const DRIFT_X_FRACTION: f64 = 0.2;
const DRIFT_Y_FRACTION: f64 = 0.1;
const MIN_SPEED: f64 = 0.0001;
const SPEED_RANGE: f64 = 0.0002;
const MASK_POWER: f64 = 2.2;
const THRESHOLD_BIAS: f64 = 10.0;

/// One drifting radial light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub base_x: f64,
    pub base_y: f64,
    pub radius: f64,
    pub phase: f64,
    pub speed_x: f64,
    pub speed_y: f64,
}

impl Wave {
    fn spawn(rng: &mut StdRng, width: f64, height: f64, index: usize, total: usize) -> Self {
        let segment = width / as_f64(total);
        Self {
            base_x: segment * as_f64(index) + segment * 0.5,
            base_y: height * BASE_Y_FRACTION,
            radius: width.min(height) * RADIUS_FRACTION,
            phase: rng.random::<f64>() * TAU,
            speed_x: MIN_SPEED + rng.random::<f64>() * SPEED_RANGE,
            speed_y: MIN_SPEED + rng.random::<f64>() * SPEED_RANGE,
        }
    }

    /// Center of the wave at `time_ms`.
    #[must_use]
    pub fn center_at(&self, width: f64, height: f64, time_ms: f64) -> (f64, f64) {
        let x = self.base_x + (time_ms * self.speed_x + self.phase).sin() * (width * DRIFT_X_FRACTION);
        let y = self.base_y + (time_ms * self.speed_y + self.phase * 0.5).sin() * (height * DRIFT_Y_FRACTION);
        (x, y)
    }

    /// Gradient opacity at a point, given the wave center.
    fn alpha_at(&self, cx: f64, cy: f64, px: f64, py: f64) -> f64 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        let dx = (px - cx) / SCALE_X;
        let dy = (py - cy) / SCALE_Y;
        let t = (dx * dx + dy * dy).sqrt() / self.radius;
        gradient_alpha(t)
    }
}

/// Radial gradient stops: 0.3 at the center, 0.1 at half radius, 0 at the rim.
#[must_use]
pub fn gradient_alpha(t: f64) -> f64 {
    if t <= 0.0 {
        0.3
    } else if t <= 0.5 {
        0.3 + (0.1 - 0.3) * (t / 0.5)
    } else if t < 1.0 {
        0.1 * (1.0 - (t - 0.5) / 0.5)
    } else {
        0.0
    }
}

/// Row mask: dark at the top, full strength at the bottom.
#[must_use]
pub fn row_mask(y: usize, height: usize) -> f64 {
    if height == 0 {
        return 0.0;
    }
    (as_f64(y) / as_f64(height)).max(0.0).powf(MASK_POWER)
}

/// Quantize one masked luminance sample against the Bayer cell at `(x, y)`.
#[must_use]
pub fn quantize(luma: f64, mask: f64, x: usize, y: usize) -> u8 {
    let threshold = f64::from(BAYER_8X8[y & 7][x & 7]) / 64.0 * 255.0;
    if luma * mask > threshold + THRESHOLD_BIAS { 255 } else { 0 }
}

/// Animated dither field at a fixed buffer size.
#[derive(Debug, Clone)]
pub struct DitherField {
    width: usize,
    height: usize,
    waves: Vec<Wave>,
    rng: StdRng,
}

impl DitherField {
    /// Create a field with a `width` × `height` buffer.
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let mut field = Self { width, height, waves: Vec::new(), rng: StdRng::seed_from_u64(seed) };
        field.respawn();
        field
    }

    /// Create a field sized for a viewport in CSS pixels (half resolution, rounded up).
    #[must_use]
    pub fn for_viewport(viewport_w: usize, viewport_h: usize, seed: u64) -> Self {
        Self::new(viewport_w.div_ceil(DOWNSCALE), viewport_h.div_ceil(DOWNSCALE), seed)
    }

    /// Resize the buffer. Waves are respawned for the new geometry.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.respawn();
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Rasterize the field at `time_ms`.
    #[must_use]
    pub fn frame(&self, time_ms: f64) -> DitherFrame {
        let (w, h) = (as_f64(self.width), as_f64(self.height));
        let centers: Vec<(f64, f64)> = self.waves.iter().map(|wave| wave.center_at(w, h, time_ms)).collect();

        let mut pixels = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            let mask = row_mask(y, self.height);
            let py = as_f64(y) + 0.5;
            for x in 0..self.width {
                let px = as_f64(x) + 0.5;
                let mut luma = BACKGROUND_LUMA;
                for (wave, &(cx, cy)) in self.waves.iter().zip(&centers) {
                    // Screen blend of white at the gradient's opacity.
                    let a = wave.alpha_at(cx, cy, px, py);
                    luma = luma * (1.0 - a) + 255.0 * a;
                }
                let luma = luma.floor();
                pixels.push(quantize(luma, mask, x, y));
            }
        }
        DitherFrame { width: self.width, height: self.height, pixels }
    }

    fn respawn(&mut self) {
        let (w, h) = (as_f64(self.width), as_f64(self.height));
        self.waves = (0..WAVE_COUNT)
            .map(|i| Wave::spawn(&mut self.rng, w, h, i, WAVE_COUNT))
            .collect();
    }
}

/// A rasterized frame: one luminance byte per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitherFrame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl DitherFrame {
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// Count of lit (white) cells.
    #[must_use]
    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == 255).count()
    }

    /// Expand to opaque grayscale RGBA, suitable for `ImageData`.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| [p, p, p, 255]).collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}
