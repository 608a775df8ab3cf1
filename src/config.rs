//! World configuration
//!
//! Bounds are supplied once by the embedder and fixed for the session. A bad
//! configuration is the only failure this crate knows; it is rejected here,
//! before any tick runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PLAYER_START_SIZE;

/// Rejected world configurations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dimension is NaN or infinite
    #[error("world dimensions must be finite, got {width}x{height}")]
    NonFinite { width: f32, height: f32 },
    /// The world cannot contain the centered player
    #[error("world must be at least {min}px per axis, got {width}x{height}")]
    TooSmall { width: f32, height: f32, min: f32 },
    /// The options object failed to parse
    #[error("invalid world options: {0}")]
    Parse(serde_json::Error),
}

/// World bounds in pixels
///
/// Positions are canvas-style: the origin is the top-left corner and y grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(rename = "worldWidth")]
    pub width: f32,
    #[serde(rename = "worldHeight")]
    pub height: f32,
}

impl WorldConfig {
    /// Validate and construct world bounds
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self { width, height };
        config.validate()?;
        Ok(config)
    }

    /// Parse the recognized options object, e.g.
    /// `{"worldWidth": 640, "worldHeight": 480}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds; the fields are public, so construction sites that
    /// bypass [`WorldConfig::new`] get re-checked at game construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::NonFinite {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < PLAYER_START_SIZE || self.height < PLAYER_START_SIZE {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
                min: PLAYER_START_SIZE,
            });
        }
        Ok(())
    }

    /// World center, where the player spawns each level
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a square box of `size` centered at `pos` lies fully inside
    /// the world
    ///
    /// The legal band is the closed interval `[size/2, extent - size/2]` per
    /// axis; a box flush against a wall is in bounds.
    pub fn in_bounds(&self, pos: Vec2, size: f32) -> bool {
        let half = size / 2.0;
        pos.x >= half && pos.x <= self.width - half && pos.y >= half && pos.y <= self.height - half
    }
}
