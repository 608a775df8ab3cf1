//! Simulation state types
//!
//! Everything that must survive a snapshot/restore lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level;
use crate::config::{ConfigError, WorldConfig};
use crate::consts::*;

/// Phase of the level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// All food consumed; the next tick advances the level
    LevelCleared,
    /// An enemy caught the player; the next tick resets to level 1
    PlayerDead,
}

/// Player-only fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Pixels moved per held direction per tick
    pub step: f32,
    /// Set once, on first enemy contact
    pub dead: bool,
}

/// Enemy-only fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    /// Seconds between random-walk moves
    pub period: f32,
    /// Time accrued toward the next walk
    pub walk_timer: f32,
}

/// Variant tag plus per-variant payload for the three particle kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Player(PlayerState),
    Enemy(EnemyState),
    Food,
}

impl EntityKind {
    pub fn is_player(&self) -> bool {
        matches!(self, EntityKind::Player(_))
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, EntityKind::Enemy(_))
    }

    pub fn is_food(&self) -> bool {
        matches!(self, EntityKind::Food)
    }
}

/// A positioned, sized, collidable particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Center of the entity's square box
    pub pos: Vec2,
    /// Edge length of the square box
    pub size: f32,
}

impl Entity {
    /// The player particle, fresh at starting size
    pub fn player(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind: EntityKind::Player(PlayerState {
                step: PLAYER_STEP,
                dead: false,
            }),
            pos,
            size: PLAYER_START_SIZE,
        }
    }

    /// An enemy that walks every `period` seconds
    pub fn enemy(id: u32, pos: Vec2, period: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Enemy(EnemyState {
                period,
                walk_timer: 0.0,
            }),
            pos,
            size: ENEMY_SIZE,
        }
    }

    /// A stationary food particle
    pub fn food(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind: EntityKind::Food,
            pos,
            size: FOOD_SIZE,
        }
    }

    /// Move to `target` if the box stays inside the world
    ///
    /// Out-of-bounds targets are rejected whole, not clamped; the entity
    /// stays put and the call reports `false`.
    pub fn move_to(&mut self, target: Vec2, world: &WorldConfig) -> bool {
        if world.in_bounds(target, self.size) {
            self.pos = target;
            true
        } else {
            false
        }
    }
}

/// Discrete notifications handed to the render/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh population was spawned for `level`
    LevelStarted { level: u32 },
    /// The player ate a food entity and grew to `new_size`
    FoodEaten { food: u32, new_size: f32 },
    /// An enemy caught the player
    PlayerDied { enemy: u32 },
    /// The last food on `level` was consumed
    LevelCleared { level: u32 },
}

/// Full simulation state, serializable for snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this run was constructed with
    pub seed: u64,
    /// World bounds, fixed for the session
    pub world: WorldConfig,
    /// Current level, starts at 1
    pub level: u32,
    /// Score; +100 per food, zeroed on death
    pub score: u64,
    /// Ticks advanced since construction
    pub time_ticks: u64,
    /// Phase entering the next tick
    pub phase: GamePhase,
    /// All live entities in spawn order (player first, then enemies, then food)
    pub entities: Vec<Entity>,
    /// Seeded RNG; every random draw in the simulation goes through here
    pub rng: Pcg32,
    /// Events since the last drain (not part of persistent state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next id to hand out
    next_id: u32,
}

impl GameState {
    /// Create a new game at level 1 with the given world and seed
    pub fn new(world: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        world.validate()?;
        let mut state = Self {
            seed,
            world,
            level: 1,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            entities: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        };
        level::spawn_level(&mut state);
        Ok(state)
    }

    /// Hand out a fresh entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The live player, absent only between death and the reset tick
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind.is_player())
    }

    /// Mutable access to the live player
    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.kind.is_player())
    }

    /// Remaining food on this level
    pub fn food_count(&self) -> usize {
        self.entities.iter().filter(|e| e.kind.is_food()).count()
    }

    /// Live enemies on this level
    pub fn enemy_count(&self) -> usize {
        self.entities.iter().filter(|e| e.kind.is_enemy()).count()
    }

    /// Hand the accumulated events to a collaborator
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
