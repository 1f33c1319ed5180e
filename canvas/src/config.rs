//! Canvas configuration with typed defaults and environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    CLICK_SLOP_PX, FALLBACK_VIEWPORT_H, FALLBACK_VIEWPORT_W, GRID_SPACING_PX, HISTORY_LIMIT, MAX_SCALE_PCT,
    MIN_FRAME_SIZE, MIN_SCALE_PCT, SCALE_STEP_PCT,
};
use crate::error::ConfigError;

/// Tunables for a canvas instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Lowest zoom percentage.
    pub min_scale_pct: f64,
    /// Highest zoom percentage.
    pub max_scale_pct: f64,
    /// Percentage points per zoom step.
    pub scale_step_pct: f64,
    /// Frames must exceed this size on both axes, in canvas units.
    pub min_frame_size: f64,
    /// Press travel (screen px) still treated as a click.
    pub click_slop_px: f64,
    /// Grid dot spacing at 100% zoom.
    pub grid_spacing_px: f64,
    /// Viewport size assumed before the host reports one.
    pub fallback_viewport: (f64, f64),
    /// Maximum undo depth.
    pub history_limit: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_scale_pct: MIN_SCALE_PCT,
            max_scale_pct: MAX_SCALE_PCT,
            scale_step_pct: SCALE_STEP_PCT,
            min_frame_size: MIN_FRAME_SIZE,
            click_slop_px: CLICK_SLOP_PX,
            grid_spacing_px: GRID_SPACING_PX,
            fallback_viewport: (FALLBACK_VIEWPORT_W, FALLBACK_VIEWPORT_H),
            history_limit: HISTORY_LIMIT,
        }
    }
}

impl CanvasConfig {
    /// Build config from environment variables.
    ///
    /// Optional (defaults in parentheses):
    /// - `CANVAS_MIN_SCALE_PCT` (20)
    /// - `CANVAS_MAX_SCALE_PCT` (200)
    /// - `CANVAS_SCALE_STEP_PCT` (10)
    /// - `CANVAS_MIN_FRAME_SIZE` (10)
    /// - `CANVAS_CLICK_SLOP_PX` (3)
    /// - `CANVAS_GRID_SPACING_PX` (24)
    /// - `CANVAS_HISTORY_LIMIT` (100)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unparseable, or
    /// when the resulting bounds are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build config from an arbitrary key lookup. `from_env` delegates here.
    ///
    /// # Errors
    ///
    /// See [`CanvasConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            min_scale_pct: parse_f64(&lookup, "CANVAS_MIN_SCALE_PCT", defaults.min_scale_pct)?,
            max_scale_pct: parse_f64(&lookup, "CANVAS_MAX_SCALE_PCT", defaults.max_scale_pct)?,
            scale_step_pct: parse_f64(&lookup, "CANVAS_SCALE_STEP_PCT", defaults.scale_step_pct)?,
            min_frame_size: parse_f64(&lookup, "CANVAS_MIN_FRAME_SIZE", defaults.min_frame_size)?,
            click_slop_px: parse_f64(&lookup, "CANVAS_CLICK_SLOP_PX", defaults.click_slop_px)?,
            grid_spacing_px: parse_f64(&lookup, "CANVAS_GRID_SPACING_PX", defaults.grid_spacing_px)?,
            fallback_viewport: defaults.fallback_viewport,
            history_limit: parse_usize(&lookup, "CANVAS_HISTORY_LIMIT", defaults.history_limit)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that bounds are positive and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Inconsistent`] describing the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_scale_pct <= 0.0 {
            return Err(ConfigError::Inconsistent(format!(
                "min scale must be positive, got {}",
                self.min_scale_pct
            )));
        }
        if self.min_scale_pct > self.max_scale_pct {
            return Err(ConfigError::Inconsistent(format!(
                "min scale {} exceeds max scale {}",
                self.min_scale_pct, self.max_scale_pct
            )));
        }
        if self.scale_step_pct <= 0.0 {
            return Err(ConfigError::Inconsistent(format!(
                "scale step must be positive, got {}",
                self.scale_step_pct
            )));
        }
        if self.min_frame_size < 0.0 || self.click_slop_px < 0.0 || self.grid_spacing_px <= 0.0 {
            return Err(ConfigError::Inconsistent("sizes must be non-negative and grid spacing positive".into()));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Inconsistent("history limit must be at least 1".into()));
        }
        Ok(())
    }
}

fn env_lookup(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn parse_f64<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_usize<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid { key, value: raw.clone() })
}
