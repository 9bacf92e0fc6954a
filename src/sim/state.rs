//! Run state and core simulation types
//!
//! Everything one run of the game mutates lives in [`GameState`]. A run
//! ends in `GameOver` for good; restarting builds a fresh state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tier::Tier;
use crate::audio::SoundEffect;
use crate::tuning::{GROUND_LAYER, GameMode, LayerTuning, Tuning};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Hero is flying
    Active,
    /// Run ended, waiting for restart
    GameOver,
}

/// Bonus star indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StarState {
    Visible,
    #[default]
    Hidden,
}

/// Collision category bits the hero collides with
pub const HERO_COLLIDES_WITH: u32 = 0xFFFF_FFFF;

/// The player's body, mirrored from the host's physics engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Centre position (scene space)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians, counter-clockwise positive
    pub rotation: f32,
    pub angular_vel: f32,
    pub size: Vec2,
    pub mass: f32,
    pub inertia: f32,
    pub allows_rotation: bool,
    pub collision_mask: u32,
    /// Running/flapping animation playing
    pub animating: bool,
}

impl Hero {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.hero_start,
            vel: Vec2::ZERO,
            rotation: 0.0,
            angular_vel: 0.0,
            size: tuning.hero_size,
            mass: tuning.hero_mass,
            inertia: tuning.hero_inertia,
            allows_rotation: true,
            collision_mask: HERO_COLLIDES_WITH,
            animating: true,
        }
    }

    /// Linear impulse: instant change in momentum
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse / self.mass;
    }

    /// Angular impulse, ignored once rotation is locked
    pub fn apply_angular_impulse(&mut self, impulse: f32) {
        if self.allows_rotation {
            self.angular_vel += impulse / self.inertia;
        }
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        (self.pos - half, self.pos + half)
    }
}

/// A single background tile, positioned in its layer's space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Centre x (layer space)
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// A horizontally repeating background strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollLayer {
    pub name: String,
    /// Layer position in scene space (moves left)
    pub offset_x: f32,
    pub base_speed: f32,
    /// Current speed (base speed times the tier multiplier)
    pub speed: f32,
    pub tiles: Vec<Tile>,
}

impl ScrollLayer {
    /// Lay tiles edge to edge starting at the left viewport edge
    pub fn new(tuning: &LayerTuning) -> Self {
        let tiles = (0..tuning.tile_count)
            .map(|i| Tile {
                x: tuning.tile_width * (i as f32 + 0.5),
                y: tuning.y,
                width: tuning.tile_width,
            })
            .collect();
        Self {
            name: tuning.name.clone(),
            offset_x: 0.0,
            base_speed: tuning.speed,
            speed: tuning.speed,
            tiles,
        }
    }

    /// Scene-space centre x of a tile
    pub fn scene_x(&self, tile: &Tile) -> f32 {
        self.offset_x + tile.x
    }
}

/// A gap obstacle: two pipes with a goal trigger between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Centre x (obstacle-layer space)
    pub x: f32,
    /// Vertical offset chosen at spawn
    pub y: f32,
}

/// Container all obstacles scroll with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleLayer {
    pub offset_x: f32,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleLayer {
    /// Scene-space centre x of an obstacle
    pub fn scene_x(&self, obstacle: &Obstacle) -> f32 {
        self.offset_x + obstacle.x
    }

    /// Scene-space position of an obstacle
    pub fn scene_pos(&self, obstacle: &Obstacle) -> Vec2 {
        Vec2::new(self.scene_x(obstacle), obstacle.y)
    }
}

/// Side effects for the host to carry out after a callback returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh run on screen
    ScenePresented,
    PlaySound(SoundEffect),
    ScoreChanged { score: u32 },
    ShowStar,
    HideStar,
    TierChanged { tier: Tier },
    ObstacleSpawned { id: u32, pos: Vec2 },
    ObstacleRemoved { id: u32 },
    /// Halt the hero's running animation
    StopHeroAnimation,
    /// Face down, no further collisions
    HeroDeathPose,
    /// Run the "Shake" effect on every top-level node
    ShakeScene,
    ShowRestart,
    /// Hide the score label, reveal the best score label
    ShowHighScore,
    GameOver { score: u32 },
}

/// Complete run context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub phase: RunPhase,
    pub score: u32,
    pub tier: Tier,
    /// Seconds since the last tap
    pub since_touch: f32,
    /// Seconds since the last obstacle spawn
    pub spawn_timer: f32,
    /// Seconds since the bonus star was shown
    pub star_timer: f32,
    pub star: StarState,
    pub hero: Hero,
    pub layers: Vec<ScrollLayer>,
    pub obstacle_layer: ObstacleLayer,
    /// World gravity (m/s²)
    pub gravity: Vec2,
    /// Active frames simulated
    pub frames: u64,
    next_id: u32,
}

impl GameState {
    /// Build a fresh run from the scene template
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            mode: tuning.mode,
            phase: RunPhase::Active,
            score: 0,
            tier: Tier::Easy,
            since_touch: 0.0,
            spawn_timer: 0.0,
            star_timer: 0.0,
            star: StarState::Hidden,
            hero: Hero::new(tuning),
            layers: tuning.layers.iter().map(ScrollLayer::new).collect(),
            obstacle_layer: ObstacleLayer::default(),
            gravity: Vec2::new(0.0, tuning.tier(Tier::Easy).gravity),
            frames: 0,
            next_id: 1,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == RunPhase::Active
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn layer(&self, name: &str) -> Option<&ScrollLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Speed the obstacle layer scrolls at (tracks the ground)
    pub fn ground_speed(&self) -> f32 {
        self.layer(GROUND_LAYER).map(|l| l.speed).unwrap_or_default()
    }
}
