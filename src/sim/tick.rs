//! The per-tick update
//!
//! One call per external frame: resolve a momentary phase from the previous
//! tick, move everything, run the food pass, run the enemy pass, classify.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use super::level::{advance_level, reset_to_level_one};
use super::state::{Entity, EntityKind, GameEvent, GamePhase, GameState};
use crate::consts::EAT_SCORE;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held direction keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Absolute cursor position from an external tracker; when present it
    /// replaces the key-derived target for this tick entirely
    pub cursor: Option<Vec2>,
}

/// Advance the simulation by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A momentary phase from the previous tick resolves before anything moves
    match state.phase {
        GamePhase::PlayerDead => {
            reset_to_level_one(state);
            state.phase = GamePhase::Playing;
        }
        GamePhase::LevelCleared => {
            advance_level(state);
            state.phase = GamePhase::Playing;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    move_player(state, input);
    walk_enemies(state, dt);
    resolve_food(state);
    resolve_enemies(state);

    // Death wins over a cleared level when both land on the same tick
    if state.player().is_none() {
        state.phase = GamePhase::PlayerDead;
    } else if state.food_count() == 0 {
        log::info!("level {} cleared, score {}", state.level, state.score);
        state.events.push(GameEvent::LevelCleared { level: state.level });
        state.phase = GamePhase::LevelCleared;
    }
}

/// Apply the player movement policy for this tick
///
/// Held keys accumulate into one combined target and the move is attempted
/// once, so a blocked diagonal rejects whole rather than sliding along the
/// free axis. A cursor override replaces the key target but still goes
/// through the bounds check.
fn move_player(state: &mut GameState, input: &TickInput) {
    let world = state.world;
    let Some(player) = state.player_mut() else {
        return;
    };
    let EntityKind::Player(p) = player.kind else {
        return;
    };

    let target = match input.cursor {
        Some(cursor) => cursor,
        None => {
            // Canvas axes: y grows downward
            let mut target = player.pos;
            if input.up {
                target.y -= p.step;
            }
            if input.down {
                target.y += p.step;
            }
            if input.left {
                target.x -= p.step;
            }
            if input.right {
                target.x += p.step;
            }
            target
        }
    };

    player.move_to(target, &world);
}

/// Advance enemy walk timers and walk the ones that fire
///
/// Timers accrue elapsed seconds; on reaching the period the remainder
/// carries over, so the cadence does not drift. A walk draws an integer
/// offset in `[-size, size]` per axis, two draws per fire, in entity order.
fn walk_enemies(state: &mut GameState, dt: f32) {
    let world = state.world;
    for entity in state.entities.iter_mut() {
        let EntityKind::Enemy(enemy) = &mut entity.kind else {
            continue;
        };
        enemy.walk_timer += dt;
        if enemy.walk_timer < enemy.period {
            continue;
        }
        enemy.walk_timer -= enemy.period;

        let span = entity.size as i32;
        let dx = state.rng.random_range(-span..=span);
        let dy = state.rng.random_range(-span..=span);
        let target = entity.pos + Vec2::new(dx as f32, dy as f32);
        entity.move_to(target, &world);
    }
}

/// Feed the player every food it overlaps this tick
///
/// The food list is snapshotted before the pass, so a removal can never skip
/// the next food's check. Growth lands on the live player immediately: a food
/// eaten early in the pass widens the box for the rest of it.
fn resolve_food(state: &mut GameState) {
    let foods: Vec<Entity> = state
        .entities
        .iter()
        .filter(|e| e.kind.is_food())
        .cloned()
        .collect();
    if foods.is_empty() {
        return;
    }

    let mut eaten: Vec<u32> = Vec::new();
    for food in &foods {
        let Some(player) = state.player_mut() else {
            return;
        };
        if !overlaps(food, player) {
            continue;
        }
        player.size += food.size;
        let new_size = player.size;
        state.score += EAT_SCORE;
        state.events.push(GameEvent::FoodEaten {
            food: food.id,
            new_size,
        });
        log::debug!("ate food {} at {}, size now {}", food.id, food.pos, new_size);
        eaten.push(food.id);
    }

    state.entities.retain(|e| !eaten.contains(&e.id));
}

/// Kill the player on its first enemy contact this tick
fn resolve_enemies(state: &mut GameState) {
    let mut killer: Option<u32> = None;
    if let Some(player) = state.player() {
        for enemy in state.entities.iter().filter(|e| e.kind.is_enemy()) {
            if overlaps(enemy, player) {
                killer = Some(enemy.id);
                break;
            }
        }
    }
    let Some(enemy_id) = killer else {
        return;
    };

    if let Some(player) = state.player_mut() {
        if let EntityKind::Player(p) = &mut player.kind {
            p.dead = true;
        }
    }
    log::info!("enemy {} caught the player, score was {}", enemy_id, state.score);
    state.events.push(GameEvent::PlayerDied { enemy: enemy_id });
    state.entities.retain(|e| !e.kind.is_player());
}
