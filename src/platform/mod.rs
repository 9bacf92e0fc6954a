//! Platform abstraction layer
//!
//! The gameplay core never talks to an engine. A [`SceneHost`] does the
//! engine's half of the work:
//! - Physics integration and contact-begin detection
//! - Carrying out side effects (effects, visibility, presentation)
//! - Drawing the HUD

pub mod collision;
pub mod headless;

pub use headless::{Autopilot, HeadlessHost};

use crate::sim::{GameEvent, GameState};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Name tag of the hero's body in reported contacts
pub const HERO_TAG: &str = "hero";

/// Two bodies that started touching, identified by node name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub a: Option<String>,
    pub b: Option<String>,
}

impl Contact {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: Some(a.to_string()),
            b: Some(b.to_string()),
        }
    }
}

/// Engine adapter driven by [`crate::Game`]
pub trait SceneHost {
    /// Integrate physics for one frame and return contacts that began
    fn step(&mut self, state: &mut GameState, tuning: &Tuning, dt: f32) -> Vec<Contact>;

    /// Carry out one side effect
    fn apply(&mut self, event: &GameEvent);

    /// Redraw labels, star and restart button
    fn present_hud(&mut self, _hud: &Hud) {}
}
