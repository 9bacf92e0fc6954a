//! Obstacle stream: scroll, despawn, spawn

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Obstacle};
use crate::tuning::Tuning;

/// Scroll the obstacle layer with the ground, drop obstacles that left the
/// viewport, and spawn a new one when the spawn timer is due
pub fn update_obstacles(
    state: &mut GameState,
    tuning: &Tuning,
    dt: f32,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let speed = state.ground_speed();
    let layer = &mut state.obstacle_layer;
    layer.offset_x -= speed * dt;

    let offset = layer.offset_x;
    let half_width = tuning.obstacles.width / 2.0;
    layer.obstacles.retain(|o| {
        let gone = offset + o.x + half_width <= 0.0;
        if gone {
            events.push(GameEvent::ObstacleRemoved { id: o.id });
        }
        !gone
    });

    if state.spawn_timer >= tuning.obstacles.spawn_interval {
        let cfg = &tuning.obstacles;
        let id = state.next_entity_id();
        let y = rng.uniform(cfg.spawn_y_min, cfg.spawn_y_max);
        // Spawn point is given in scene space; store it in layer space
        let x = cfg.spawn_x - state.obstacle_layer.offset_x;
        state.obstacle_layer.obstacles.push(Obstacle { id, x, y });
        state.spawn_timer = 0.0;

        log::debug!("Spawned obstacle {} at y={:.1}", id, y);
        events.push(GameEvent::ObstacleSpawned {
            id,
            pos: Vec2::new(cfg.spawn_x, y),
        });
    }
}

/// Upper bound on live obstacles for a given scroll speed
pub fn max_live_obstacles(tuning: &Tuning, speed: f32) -> usize {
    let cfg = &tuning.obstacles;
    if speed <= 0.0 {
        return usize::MAX;
    }
    let travel = cfg.spawn_x + cfg.width / 2.0;
    let lifetime = travel / speed;
    (lifetime / cfg.spawn_interval).ceil() as usize + 1
}
