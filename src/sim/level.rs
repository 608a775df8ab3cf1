//! Level director
//!
//! Builds the entity population for the current level and drives level
//! transitions. Population law: one player at the world center, five enemies
//! per level index, one food per level index.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, GameEvent, GameState};
use crate::consts::*;

/// Rebuild the population for `state.level`
///
/// Placement is stochastic, shape is not. Positions are drawn uniformly from
/// the whole world per axis (x then y, enemies before food), so border draws
/// may sit outside the movable band until a legal walk target comes up.
pub fn spawn_level(state: &mut GameState) {
    state.entities.clear();

    let id = state.next_entity_id();
    state.entities.push(Entity::player(id, state.world.center()));

    let period = ENEMY_WALK_INTERVAL * state.level as f32;
    for _ in 0..ENEMIES_PER_LEVEL * state.level {
        let id = state.next_entity_id();
        let pos = random_spawn_pos(state);
        state.entities.push(Entity::enemy(id, pos, period));
    }

    for _ in 0..state.level {
        let id = state.next_entity_id();
        let pos = random_spawn_pos(state);
        state.entities.push(Entity::food(id, pos));
    }

    log::info!(
        "level {}: {} enemies, {} food",
        state.level,
        state.enemy_count(),
        state.food_count()
    );
    state.events.push(GameEvent::LevelStarted { level: state.level });
}

/// Advance to the next level, keeping the score
pub fn advance_level(state: &mut GameState) {
    state.level += 1;
    spawn_level(state);
}

/// Back to level 1 with a zeroed score, after a death
pub fn reset_to_level_one(state: &mut GameState) {
    state.level = 1;
    state.score = 0;
    spawn_level(state);
}

/// Uniform integer position across the world, endpoints included
fn random_spawn_pos(state: &mut GameState) -> Vec2 {
    let x = state.rng.random_range(0..=state.world.width as i32);
    let y = state.rng.random_range(0..=state.world.height as i32);
    Vec2::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::state::EntityKind;

    fn state_with_seed(seed: u64) -> GameState {
        let world = WorldConfig::new(640.0, 480.0).unwrap();
        GameState::new(world, seed).unwrap()
    }

    #[test]
    fn test_population_law() {
        for level in [1u32, 2, 5] {
            let mut state = state_with_seed(11);
            state.level = level;
            spawn_level(&mut state);
            assert_eq!(state.enemy_count(), (5 * level) as usize);
            assert_eq!(state.food_count(), level as usize);
            assert!(state.player().is_some());
            assert_eq!(
                state.entities.len(),
                1 + state.enemy_count() + state.food_count()
            );
        }
    }

    #[test]
    fn test_spawn_positions_inside_world() {
        let state = state_with_seed(987);
        for entity in &state.entities {
            assert!(entity.pos.x >= 0.0 && entity.pos.x <= state.world.width);
            assert!(entity.pos.y >= 0.0 && entity.pos.y <= state.world.height);
        }
    }

    #[test]
    fn test_enemy_period_scales_with_level() {
        let mut state = state_with_seed(5);
        state.level = 3;
        spawn_level(&mut state);
        for entity in &state.entities {
            if let EntityKind::Enemy(enemy) = &entity.kind {
                assert_eq!(enemy.period, ENEMY_WALK_INTERVAL * 3.0);
                assert_eq!(enemy.walk_timer, 0.0);
            }
        }
    }

    #[test]
    fn test_advance_level_keeps_score() {
        let mut state = state_with_seed(21);
        state.score = 700;
        advance_level(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 700);
        assert_eq!(state.enemy_count(), 10);
        assert_eq!(state.food_count(), 2);
    }

    #[test]
    fn test_reset_zeroes_score() {
        let mut state = state_with_seed(22);
        state.level = 4;
        state.score = 1900;
        reset_to_level_one(&mut state);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemy_count(), 5);
        assert_eq!(state.food_count(), 1);
        assert_eq!(state.player().unwrap().pos, state.world.center());
    }

    #[test]
    fn test_ids_stay_unique_across_levels() {
        let mut state = state_with_seed(30);
        advance_level(&mut state);
        advance_level(&mut state);
        let mut ids: Vec<u32> = state.entities.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.entities.len());
    }

    #[test]
    fn test_spawn_emits_level_started() {
        let mut state = state_with_seed(8);
        state.drain_events();
        advance_level(&mut state);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::LevelStarted { level: 2 }));
    }
}
