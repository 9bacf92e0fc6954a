//! Deterministic gameplay module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta passed in, never read from a clock
//! - Injected random source only
//! - Side effects returned as `GameEvent`s, never performed
//! - No engine, rendering or audio dependencies

pub mod contact;
pub mod obstacles;
pub mod rng;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod tier;

pub use contact::contact;
pub use obstacles::{max_live_obstacles, update_obstacles};
pub use rng::{RandomSource, ScriptedSource};
pub use scroll::scroll_layer;
pub use state::{
    GameEvent, GameState, Hero, HERO_COLLIDES_WITH, Obstacle, ObstacleLayer, RunPhase,
    ScrollLayer, StarState, Tile,
};
pub use tick::{tap, tick};
pub use tier::{Tier, apply_tier};
