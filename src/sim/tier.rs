//! Difficulty tiers (Leveled mode)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Score at which Medium starts
pub const MEDIUM_SCORE: u32 = 5;
/// Score at which Hard starts
pub const HARD_SCORE: u32 = 10;

/// Difficulty bucket derived from score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Tier for a score: [0,5) Easy, [5,10) Medium, 10+ Hard
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= HARD_SCORE => Tier::Hard,
            s if s >= MEDIUM_SCORE => Tier::Medium,
            _ => Tier::Easy,
        }
    }

    /// Position in the tuning table
    pub fn index(&self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Medium => 1,
            Tier::Hard => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }
}

/// Reselect the tier from score and push its parameters into the world
pub fn apply_tier(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let tier = Tier::for_score(state.score);
    if tier != state.tier {
        log::info!(
            "Tier {} -> {} at score {}",
            state.tier.as_str(),
            tier.as_str(),
            state.score
        );
        events.push(GameEvent::TierChanged { tier });
    }
    state.tier = tier;

    let params = tuning.tier(tier);
    for layer in &mut state.layers {
        layer.speed = layer.base_speed * params.speed_multiplier;
    }
    state.gravity = Vec2::new(0.0, params.gravity);

    // Probable bug, kept on purpose: the impulse lands on every frame the
    // tier is selected, not once on entry. Because it runs after the rise
    // clamp, vel.y can exceed MAX_RISE_SPEED until the next frame's clamp.
    if tier != Tier::Easy {
        state.hero.apply_impulse(Vec2::new(0.0, params.impulse));
    }
}
