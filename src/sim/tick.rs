//! Per-frame update and tap handling
//!
//! Both are no-ops once the run is over.

use glam::Vec2;

use super::obstacles::update_obstacles;
use super::rng::RandomSource;
use super::scroll::scroll_layer;
use super::state::{GameEvent, GameState, StarState};
use super::tier::apply_tier;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::degrees_to_radians;
use crate::tuning::Tuning;

/// Advance the run by one frame of `dt` seconds
pub fn tick(
    state: &mut GameState,
    tuning: &Tuning,
    dt: f32,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_active() {
        return events;
    }

    state.frames += 1;
    let hero = &mut state.hero;

    // Cap rise speed
    if hero.vel.y > MAX_RISE_SPEED {
        hero.vel.y = MAX_RISE_SPEED;
    }

    // Nose-dive once the last tap has worn off
    if state.since_touch > NOSE_DIVE_DELAY {
        hero.apply_angular_impulse(NOSE_DIVE_RATE * dt);
    }

    hero.rotation = hero.rotation.clamp(
        degrees_to_radians(MIN_ROTATION_DEG),
        degrees_to_radians(MAX_ROTATION_DEG),
    );
    hero.angular_vel = hero.angular_vel.clamp(-MAX_ANGULAR_SPEED, MAX_ANGULAR_SPEED);

    state.since_touch += dt;
    state.spawn_timer += dt;

    if state.mode.has_bonus_star() {
        state.star_timer += dt;
        if state.star == StarState::Visible && state.star_timer > STAR_DURATION {
            state.star = StarState::Hidden;
            events.push(GameEvent::HideStar);
        }
    }

    for layer in &mut state.layers {
        scroll_layer(layer, dt);
    }

    update_obstacles(state, tuning, dt, rng, &mut events);

    if state.mode.has_tiers() {
        apply_tier(state, tuning, &mut events);
    }

    events
}

/// Tap/touch-began: cancel the fall and hop
pub fn tap(state: &mut GameState) -> Vec<GameEvent> {
    if !state.is_active() {
        return Vec::new();
    }

    let hero = &mut state.hero;
    hero.vel = Vec2::ZERO;
    hero.apply_impulse(Vec2::new(0.0, TAP_IMPULSE));
    hero.apply_angular_impulse(TAP_ANGULAR_IMPULSE);

    state.since_touch = 0.0;

    vec![GameEvent::PlaySound(SoundEffect::Flap)]
}
