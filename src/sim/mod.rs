//! The deterministic game core
//!
//! All gameplay logic lives here and must stay pure and deterministic:
//! - Fixed timestep, externally driven
//! - Seeded RNG only, owned by the state
//! - Stable entity order (spawn order, ids ascending)
//! - No platform, render, or audio dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{boxes_overlap, overlaps};
pub use level::{advance_level, reset_to_level_one, spawn_level};
pub use state::{EnemyState, Entity, EntityKind, GameEvent, GamePhase, GameState, PlayerState};
pub use tick::{TickInput, tick};
