//! Data-driven game balance
//!
//! Every gameplay constant that differs between the two game modes lives
//! here. Loaded from JSON (missing fields fall back to the preset for the
//! document's `mode`, Classic when absent) and validated once at startup;
//! a bad layout is fatal, not recoverable.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_GRAVITY;
use crate::sim::Tier;

/// Name of the scroll layer the obstacle stream follows
pub const GROUND_LAYER: &str = "ground";

/// Which revision of the game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Ground + clouds, fast spawns, no difficulty levels
    #[default]
    Classic,
    /// Adds crystal mountains, difficulty tiers, bonus star and best score
    Leveled,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Leveled => "Leveled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "1" => Some(GameMode::Classic),
            "leveled" | "levelled" | "2" => Some(GameMode::Leveled),
            _ => None,
        }
    }

    /// Whether score drives a difficulty tier
    pub fn has_tiers(&self) -> bool {
        matches!(self, GameMode::Leveled)
    }

    /// Whether goals flash the bonus star and the best score is tracked on screen
    pub fn has_bonus_star(&self) -> bool {
        matches!(self, GameMode::Leveled)
    }
}

/// Fatal configuration errors
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("required scroll layer `{0}` is missing")]
    MissingLayer(&'static str),
    #[error("scroll layer `{layer}` covers {covered} units but needs {needed} to loop without a gap")]
    LayerGap {
        layer: String,
        covered: f32,
        needed: f32,
    },
    #[error("obstacle spawn band [{min}, {max}] is empty")]
    SpawnBand { min: f32, max: f32 },
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// One horizontally repeating background strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerTuning {
    pub name: String,
    /// Base scroll speed (units/s, leftward)
    pub speed: f32,
    pub tile_width: f32,
    pub tile_count: u32,
    /// Vertical position of the strip's tiles
    pub y: f32,
}

impl LayerTuning {
    pub fn new(name: &str, speed: f32, tile_width: f32, tile_count: u32, y: f32) -> Self {
        Self {
            name: name.to_string(),
            speed,
            tile_width,
            tile_count,
            y,
        }
    }

    /// Total horizontal span of all tiles
    pub fn coverage(&self) -> f32 {
        self.tile_width * self.tile_count as f32
    }
}

/// Obstacle spawn and shape parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Scene-space x of a fresh obstacle (outside the right edge)
    pub spawn_x: f32,
    pub spawn_y_min: f32,
    pub spawn_y_max: f32,
    pub width: f32,
    /// Centre of the goal gap, relative to the obstacle's y
    pub gap_center: f32,
    pub gap_height: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 1.5,
            spawn_x: 192.0,
            spawn_y_min: 18.0,
            spawn_y_max: 166.0,
            width: 50.0,
            gap_center: 110.0,
            gap_height: 90.0,
        }
    }
}

/// Per-tier world parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTuning {
    /// Multiplier applied to every layer's base speed
    pub speed_multiplier: f32,
    /// World gravity (m/s², negative is down)
    pub gravity: f32,
    /// Upward hero impulse applied while the tier is selected
    pub impulse: f32,
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub mode: GameMode,
    pub viewport: Vec2,
    /// Top of the ground collision strip
    pub ground_height: f32,
    pub hero_start: Vec2,
    pub hero_size: Vec2,
    pub hero_mass: f32,
    pub hero_inertia: f32,
    pub layers: Vec<LayerTuning>,
    pub obstacles: ObstacleTuning,
    /// Easy, Medium, Hard
    pub tiers: [TierTuning; 3],
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    /// First revision: two layers, 1.5 s spawns
    pub fn classic() -> Self {
        Self {
            mode: GameMode::Classic,
            viewport: Vec2::new(180.0, 320.0),
            ground_height: 40.0,
            hero_start: Vec2::new(48.0, 200.0),
            hero_size: Vec2::new(24.0, 28.0),
            hero_mass: 1.0,
            hero_inertia: 0.5,
            layers: vec![
                LayerTuning::new(GROUND_LAYER, 160.0, 200.0, 2, 20.0),
                LayerTuning::new("cloud", 30.0, 120.0, 3, 280.0),
            ],
            obstacles: ObstacleTuning::default(),
            tiers: [
                TierTuning {
                    speed_multiplier: 1.0,
                    gravity: DEFAULT_GRAVITY,
                    impulse: 0.0,
                },
                TierTuning {
                    speed_multiplier: 1.25,
                    gravity: -11.0,
                    impulse: 2.0,
                },
                TierTuning {
                    speed_multiplier: 1.5,
                    gravity: -12.5,
                    impulse: 4.0,
                },
            ],
        }
    }

    /// Second revision: crystal mountains, slower spawns, difficulty tiers
    pub fn leveled() -> Self {
        let mut tuning = Self::classic();
        tuning.mode = GameMode::Leveled;
        tuning
            .layers
            .push(LayerTuning::new("crystal_mountain", 60.0, 180.0, 2, 80.0));
        tuning.obstacles.spawn_interval = 3.0;
        tuning
    }

    /// Preset for a mode
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Classic => Self::classic(),
            GameMode::Leveled => Self::leveled(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mode = match overrides.get("mode") {
            Some(mode) => serde_json::from_value(mode.clone())?,
            None => GameMode::default(),
        };
        let mut merged = serde_json::to_value(Self::for_mode(mode))?;
        merge_json(&mut merged, overrides);
        let tuning: Tuning = serde_json::from_value(merged)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} tuning from {} ({} layers)",
            tuning.mode.as_str(),
            path.display(),
            tuning.layers.len()
        );
        Ok(tuning)
    }

    /// Check the layout invariants the gameplay loop relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("viewport.x", self.viewport.x)?;
        positive("viewport.y", self.viewport.y)?;
        positive("hero_mass", self.hero_mass)?;
        positive("hero_inertia", self.hero_inertia)?;
        positive("obstacles.spawn_interval", self.obstacles.spawn_interval)?;
        positive("obstacles.width", self.obstacles.width)?;

        if self.layer(GROUND_LAYER).is_none() {
            return Err(TuningError::MissingLayer(GROUND_LAYER));
        }

        for layer in &self.layers {
            positive("layers.tile_width", layer.tile_width)?;
            let needed = self.viewport.x + layer.tile_width;
            if layer.coverage() < needed {
                return Err(TuningError::LayerGap {
                    layer: layer.name.clone(),
                    covered: layer.coverage(),
                    needed,
                });
            }
        }

        let o = &self.obstacles;
        if o.spawn_y_min > o.spawn_y_max {
            return Err(TuningError::SpawnBand {
                min: o.spawn_y_min,
                max: o.spawn_y_max,
            });
        }

        Ok(())
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&LayerTuning> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Parameters for a difficulty tier
    pub fn tier(&self, tier: Tier) -> &TierTuning {
        &self.tiers[tier.index()]
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field, value })
    }
}

/// Overlay `over` onto `base`; objects merge key by key, anything else replaces
fn merge_json(base: &mut serde_json::Value, over: serde_json::Value) {
    match (base, over) {
        (serde_json::Value::Object(base), serde_json::Value::Object(over)) => {
            for (key, value) in over {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, over) => *base = over,
    }
}
