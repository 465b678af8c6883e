//! Game settings
//!
//! Every dimension and speed the simulation uses. Defaults come from
//! [`crate::consts`]; a JSON file may override any subset of fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Largest accepted screen width or height
pub const MAX_SCREEN_DIMENSION: i32 = i32::MAX / 8;

/// Overridable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Ball ===
    pub ball_width: i32,
    pub ball_height: i32,
    /// Speed assigned to an axis after a bounce
    pub ball_velocity_delta: i32,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Velocity change per arrow key press/release
    pub paddle_velocity_delta: i32,

    // === Tiles ===
    pub tile_rows: usize,
    pub tile_cols: usize,
    pub tile_height: i32,

    /// Level loaded on startup and restart
    pub level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ball_width: BALL_WIDTH,
            ball_height: BALL_HEIGHT,
            ball_velocity_delta: BALL_VELOCITY_DELTA,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_velocity_delta: PADDLE_VELOCITY_DELTA,

            tile_rows: TILE_ROWS,
            tile_cols: TILE_COLS,
            tile_height: TILE_HEIGHT,

            level: START_LEVEL,
        }
    }
}

impl Settings {
    /// Cell width: the grid spans the full screen width
    pub fn tile_width(&self) -> i32 {
        match i32::try_from(self.tile_cols) {
            Ok(cols) if cols > 0 => self.screen_width / cols,
            _ => 0,
        }
    }

    /// Reject settings the simulation cannot run with
    ///
    /// Screen dimensions are capped at [`MAX_SCREEN_DIMENSION`] so that start
    /// positions and per-frame movement stay within `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            bail!(
                "screen size must be positive ({}x{})",
                self.screen_width,
                self.screen_height
            );
        }
        if self.screen_width > MAX_SCREEN_DIMENSION || self.screen_height > MAX_SCREEN_DIMENSION {
            bail!(
                "screen size {}x{} exceeds {}",
                self.screen_width,
                self.screen_height,
                MAX_SCREEN_DIMENSION
            );
        }
        if self.ball_width <= 0 || self.ball_height <= 0 {
            bail!(
                "ball size must be positive ({}x{})",
                self.ball_width,
                self.ball_height
            );
        }
        if self.ball_width > self.screen_width || self.ball_height > self.screen_height {
            bail!("ball does not fit on screen");
        }
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            bail!(
                "paddle size must be positive ({}x{})",
                self.paddle_width,
                self.paddle_height
            );
        }
        if self.paddle_width > self.screen_width || self.paddle_height > self.screen_height {
            bail!("paddle does not fit on screen");
        }
        if self.ball_velocity_delta <= 0 || self.paddle_velocity_delta <= 0 {
            bail!("velocity deltas must be positive");
        }
        let max_delta = self.screen_width.min(self.screen_height);
        if self.ball_velocity_delta > max_delta || self.paddle_velocity_delta > max_delta {
            bail!("velocity deltas must not exceed the smaller screen dimension ({max_delta})");
        }
        if self.tile_rows == 0 || self.tile_cols == 0 || self.tile_height <= 0 {
            bail!("tile grid must have at least one row and column");
        }
        let cols = i32::try_from(self.tile_cols)
            .ok()
            .filter(|&cols| cols <= self.screen_width);
        if cols.is_none() {
            bail!(
                "{} tile columns do not fit in width {}",
                self.tile_cols,
                self.screen_width
            );
        }
        let grid_height = i32::try_from(self.tile_rows)
            .ok()
            .and_then(|rows| rows.checked_mul(self.tile_height))
            .filter(|&height| height <= self.screen_height);
        if grid_height.is_none() {
            bail!(
                "{} tile rows of height {} do not fit in height {}",
                self.tile_rows,
                self.tile_height,
                self.screen_height
            );
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings =
            Self::from_json(&json).with_context(|| format!("load settings {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
