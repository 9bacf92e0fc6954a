//! Contact-begin handling
//!
//! The host reports each new contact between two bodies by their node name
//! tags. Touching a goal scores; touching anything else ends the run.

use crate::audio::SoundEffect;
use crate::consts::{GOAL_TAG, MIN_ROTATION_DEG};
use crate::degrees_to_radians;

use super::state::{GameEvent, GameState, RunPhase, StarState};

/// Handle a contact between two bodies identified by name tag
pub fn contact(state: &mut GameState, a: Option<&str>, b: Option<&str>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_active() {
        return events;
    }

    if a == Some(GOAL_TAG) || b == Some(GOAL_TAG) {
        state.score += 1;
        events.push(GameEvent::ScoreChanged { score: state.score });

        if state.mode.has_bonus_star() {
            state.star = StarState::Visible;
            state.star_timer = 0.0;
            events.push(GameEvent::ShowStar);
            events.push(GameEvent::PlaySound(SoundEffect::Reward));
        }
        return events;
    }

    log::info!(
        "Game over: hit {} (score {})",
        a.or(b).unwrap_or("<unnamed>"),
        state.score
    );
    state.phase = RunPhase::GameOver;

    let hero = &mut state.hero;
    hero.allows_rotation = false;
    hero.angular_vel = 0.0;
    hero.animating = false;
    events.push(GameEvent::StopHeroAnimation);

    // Face down in the dirt, and nothing else to hit
    hero.rotation = degrees_to_radians(MIN_ROTATION_DEG);
    hero.collision_mask = 0;
    events.push(GameEvent::HeroDeathPose);

    events.push(GameEvent::ShakeScene);
    events.push(GameEvent::ShowRestart);
    if state.mode.has_bonus_star() {
        events.push(GameEvent::ShowHighScore);
    }
    events.push(GameEvent::GameOver { score: state.score });

    events
}
