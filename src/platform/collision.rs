//! Collision detection for the headless host
//!
//! Everything in the scene is an axis-aligned box: the hero, the ground and
//! ceiling strips, each obstacle's two pipes and the goal trigger between
//! them.

use glam::Vec2;

use crate::sim::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the boxes overlap
    pub hit: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self { hit: false }
    }
}

/// Check two boxes for overlap; touching edges count as contact
pub fn aabb_collision(a: &Aabb, b: &Aabb) -> CollisionResult {
    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
    if overlap_x < 0.0 || overlap_y < 0.0 {
        return CollisionResult::miss();
    }
    CollisionResult { hit: true }
}

/// Which static or scrolling body a box belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKey {
    Ground,
    Ceiling,
    LowerPipe(u32),
    UpperPipe(u32),
    Goal(u32),
}

impl BodyKey {
    /// Node name tag reported with a contact
    pub fn tag(&self) -> &'static str {
        match self {
            BodyKey::Ground => "ground",
            BodyKey::Ceiling => "ceiling",
            BodyKey::LowerPipe(_) | BodyKey::UpperPipe(_) => "obstacle",
            BodyKey::Goal(_) => crate::consts::GOAL_TAG,
        }
    }
}

/// Far enough above/below the viewport to never be seen
const OFFSCREEN: f32 = 10_000.0;

/// Boxes for one obstacle (scene space)
pub fn obstacle_bodies(
    state: &GameState,
    tuning: &Tuning,
    obstacle: &Obstacle,
) -> [(BodyKey, Aabb); 3] {
    let cfg = &tuning.obstacles;
    let pos = state.obstacle_layer.scene_pos(obstacle);
    let half_w = cfg.width / 2.0;
    let gap_lo = pos.y + cfg.gap_center - cfg.gap_height / 2.0;
    let gap_hi = pos.y + cfg.gap_center + cfg.gap_height / 2.0;
    // Goal is a thin sliver in the middle of the gap
    let goal_half_w = cfg.width / 8.0;

    [
        (
            BodyKey::LowerPipe(obstacle.id),
            Aabb::new(Vec2::new(pos.x - half_w, -OFFSCREEN), Vec2::new(pos.x + half_w, gap_lo)),
        ),
        (
            BodyKey::UpperPipe(obstacle.id),
            Aabb::new(Vec2::new(pos.x - half_w, gap_hi), Vec2::new(pos.x + half_w, OFFSCREEN)),
        ),
        (
            BodyKey::Goal(obstacle.id),
            Aabb::new(
                Vec2::new(pos.x - goal_half_w, gap_lo),
                Vec2::new(pos.x + goal_half_w, gap_hi),
            ),
        ),
    ]
}

/// Every body the hero can touch this frame
pub fn scene_bodies(state: &GameState, tuning: &Tuning) -> Vec<(BodyKey, Aabb)> {
    let mut bodies = Vec::with_capacity(2 + state.obstacle_layer.obstacles.len() * 3);
    bodies.push((
        BodyKey::Ground,
        Aabb::new(
            Vec2::new(-OFFSCREEN, -OFFSCREEN),
            Vec2::new(OFFSCREEN, tuning.ground_height),
        ),
    ));
    bodies.push((
        BodyKey::Ceiling,
        Aabb::new(
            Vec2::new(-OFFSCREEN, tuning.viewport.y),
            Vec2::new(OFFSCREEN, OFFSCREEN),
        ),
    ));
    for obstacle in &state.obstacle_layer.obstacles {
        bodies.extend(obstacle_bodies(state, tuning, obstacle));
    }
    bodies
}

/// Centre y of an obstacle's goal gap (scene space)
pub fn gap_center_y(tuning: &Tuning, obstacle: &Obstacle) -> f32 {
    obstacle.y + tuning.obstacles.gap_center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_miss() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(8.0, 0.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));

        assert!(aabb_collision(&a, &b).hit);
        assert!(!aabb_collision(&a, &c).hit);
    }

    #[test]
    fn test_obstacle_gap_layout() {
        let tuning = Tuning::classic();
        let mut state = crate::sim::GameState::new(&tuning);
        let obstacle = Obstacle { id: 9, x: 100.0, y: 50.0 };
        state.obstacle_layer.obstacles.push(obstacle);

        let [(_, lower), (_, upper), (key, goal)] = obstacle_bodies(&state, &tuning, &obstacle);
        assert_eq!(lower.max.y, 50.0 + 110.0 - 45.0);
        assert_eq!(upper.min.y, 50.0 + 110.0 + 45.0);
        assert_eq!(goal.min.y, lower.max.y);
        assert_eq!(key.tag(), "goal");

        // A hero in the middle of the gap touches only the goal
        let hero = Aabb::from_center(Vec2::new(100.0, 160.0), Vec2::new(24.0, 28.0));
        assert!(!aabb_collision(&hero, &lower).hit);
        assert!(!aabb_collision(&hero, &upper).hit);
        assert!(aabb_collision(&hero, &goal).hit);
    }
}
