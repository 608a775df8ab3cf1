//! Audio cue descriptions for game events
//!
//! The simulation core never synthesizes samples. Each noisy event maps to a
//! short list of [`Tone`]s and the embedder plays them with whatever audio
//! backend it has.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// One tone in a cue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Frequency in hertz
    pub freq_hz: f32,
    /// Length in seconds
    pub duration: f32,
    /// Offset from the start of the cue in seconds
    pub delay: f32,
}

/// Short blip for an eaten food
pub const EAT_CUE: [Tone; 1] = [Tone {
    freq_hz: 800.0,
    duration: 0.05,
    delay: 0.0,
}];

/// Three falling tones for the player's death
pub const DEATH_CUE: [Tone; 3] = [
    Tone {
        freq_hz: 400.0,
        duration: 0.2,
        delay: 0.0,
    },
    Tone {
        freq_hz: 300.0,
        duration: 0.2,
        delay: 0.21,
    },
    Tone {
        freq_hz: 200.0,
        duration: 0.2,
        delay: 0.42,
    },
];

/// The cue for an event, empty when the event is silent
pub fn tones_for(event: &GameEvent) -> &'static [Tone] {
    match event {
        GameEvent::FoodEaten { .. } => &EAT_CUE,
        GameEvent::PlayerDied { .. } => &DEATH_CUE,
        GameEvent::LevelStarted { .. } | GameEvent::LevelCleared { .. } => &[],
    }
}
