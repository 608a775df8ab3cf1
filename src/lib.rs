//! Muncher - the simulation core of a grow-by-eating arcade game
//!
//! Modules:
//! - `sim`: Deterministic simulation (entities, movement, collisions, levels)
//! - `config`: World bounds supplied by the embedder at construction
//! - `cues`: Audio cue descriptors keyed off the event stream
//!
//! The embedder owns the frame loop, rendering, input capture, and audio
//! output. It calls [`sim::tick`] once per frame with an input snapshot,
//! reads the public state fields to draw, and drains events for sound.

pub mod config;
pub mod cues;
pub mod sim;

pub use config::{ConfigError, WorldConfig};

/// Fixed gameplay constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player box size at the start of every level
    pub const PLAYER_START_SIZE: f32 = 10.0;
    /// Pixels the player moves per held direction per tick
    pub const PLAYER_STEP: f32 = 5.0;

    /// Enemy box size
    pub const ENEMY_SIZE: f32 = 10.0;
    /// Enemies spawned per level index
    pub const ENEMIES_PER_LEVEL: u32 = 5;
    /// Base seconds between enemy walks; multiplied by the level index
    pub const ENEMY_WALK_INTERVAL: f32 = 0.1;

    /// Food box size
    pub const FOOD_SIZE: f32 = 20.0;
    /// Score awarded per food eaten
    pub const EAT_SCORE: u64 = 100;
}
