//! Headless host
//!
//! A minimal stand-in for the vendor engine: explicit Euler integration of
//! the hero under world gravity and box contacts against the scene. Good
//! enough to play the game in tests and from the command line.

use std::collections::HashSet;

use super::collision::{Aabb, BodyKey, aabb_collision, gap_center_y, scene_bodies};
use super::{Contact, HERO_TAG, SceneHost};
use crate::consts::POINTS_PER_METER;
use crate::sim::{GameEvent, GameState};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Engine stand-in that records everything it is asked to do
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Bodies the hero touched at the end of the last step
    touching: HashSet<BodyKey>,
    /// Every event applied, oldest first
    pub events: Vec<GameEvent>,
    /// Last HUD presented
    pub hud: Option<Hud>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many applied events match a predicate
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl SceneHost for HeadlessHost {
    fn step(&mut self, state: &mut GameState, tuning: &Tuning, dt: f32) -> Vec<Contact> {
        let gravity = state.gravity * POINTS_PER_METER;
        let hero = &mut state.hero;
        hero.vel += gravity * dt;
        hero.pos += hero.vel * dt;
        if hero.allows_rotation {
            hero.rotation += hero.angular_vel * dt;
        }

        if hero.collision_mask == 0 {
            // Dead hero rests on the ground and collides with nothing
            let floor = tuning.ground_height + hero.size.y / 2.0;
            if hero.pos.y < floor {
                hero.pos.y = floor;
                hero.vel = glam::Vec2::ZERO;
            }
            self.touching.clear();
            return Vec::new();
        }

        let (min, max) = hero.bounds();
        let hero_box = Aabb::new(min, max);
        let now: HashSet<BodyKey> = scene_bodies(state, tuning)
            .into_iter()
            .filter(|(_, body)| aabb_collision(&hero_box, body).hit)
            .map(|(key, _)| key)
            .collect();

        let mut began: Vec<BodyKey> = now.difference(&self.touching).copied().collect();
        // HashSet order is arbitrary; report goals first, then by kind
        began.sort_by_key(|key| match key {
            BodyKey::Goal(id) => (0, *id),
            BodyKey::Ground => (1, 0),
            BodyKey::Ceiling => (1, 1),
            BodyKey::LowerPipe(id) | BodyKey::UpperPipe(id) => (2, *id),
        });
        self.touching = now;

        began
            .into_iter()
            .map(|key| Contact::new(HERO_TAG, key.tag()))
            .collect()
    }

    fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShakeScene => log::debug!("shake"),
            GameEvent::ScenePresented => log::debug!("scene presented"),
            _ => {}
        }
        self.events.push(event.clone());
    }

    fn present_hud(&mut self, hud: &Hud) {
        self.hud = Some(hud.clone());
    }
}

/// Simple bot: hop whenever the hero sinks below the next gap
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How far below the target the hero may sink before hopping
    pub slack: f32,
    /// Keep tapping while rising slower than this
    pub climb_speed: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            slack: 12.0,
            climb_speed: 200.0,
        }
    }
}

impl Autopilot {
    /// Height the hero should hold: the next gap's centre, or mid-screen
    pub fn target_y(&self, state: &GameState, tuning: &Tuning) -> f32 {
        let hero_left = state.hero.pos.x - state.hero.size.x / 2.0;
        let half_w = tuning.obstacles.width / 2.0;
        state
            .obstacle_layer
            .obstacles
            .iter()
            .find(|o| state.obstacle_layer.scene_x(o) + half_w >= hero_left)
            .map(|o| gap_center_y(tuning, o))
            .unwrap_or((tuning.ground_height + tuning.viewport.y) / 2.0)
    }

    pub fn should_tap(&self, state: &GameState, tuning: &Tuning) -> bool {
        state.is_active()
            && state.hero.vel.y < self.climb_speed
            && state.hero.pos.y < self.target_y(state, tuning) - self.slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    #[test]
    fn test_gravity_pulls_hero_down() {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        let mut host = HeadlessHost::new();
        let start = state.hero.pos.y;
        host.step(&mut state, &tuning, 0.1);
        assert!(state.hero.vel.y < 0.0);
        assert!(state.hero.pos.y < start);
    }

    #[test]
    fn test_ground_contact_reported_once() {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        let mut host = HeadlessHost::new();
        state.hero.pos.y = tuning.ground_height;

        let first = host.step(&mut state, &tuning, 0.0);
        assert_eq!(first, vec![Contact::new("hero", "ground")]);
        assert!(host.step(&mut state, &tuning, 0.0).is_empty());
    }

    #[test]
    fn test_goal_contact() {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        let mut host = HeadlessHost::new();
        let obstacle = Obstacle {
            id: 1,
            x: state.hero.pos.x,
            y: 50.0,
        };
        state.obstacle_layer.obstacles.push(obstacle);
        state.hero.pos.y = gap_center_y(&tuning, &obstacle);

        let contacts = host.step(&mut state, &tuning, 0.0);
        assert_eq!(contacts, vec![Contact::new("hero", "goal")]);
    }

    #[test]
    fn test_disabled_collisions_report_nothing() {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        let mut host = HeadlessHost::new();
        state.hero.collision_mask = 0;
        state.hero.pos.y = 0.0;

        assert!(host.step(&mut state, &tuning, 0.1).is_empty());
        assert_eq!(
            state.hero.pos.y,
            tuning.ground_height + state.hero.size.y / 2.0
        );
    }

    #[test]
    fn test_autopilot_taps_below_target() {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        let pilot = Autopilot::default();
        state.hero.pos.y = 60.0;
        assert!(pilot.should_tap(&state, &tuning));
        state.hero.pos.y = 300.0;
        assert!(!pilot.should_tap(&state, &tuning));
    }
}
