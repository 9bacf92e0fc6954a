//! Sound effects
//!
//! Playback is fire-and-forget through an injected [`AudioBackend`]; the
//! host engine owns the actual sound resources.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SoundEffect {
    /// Hero flaps on tap
    Flap,
    /// Hero passed through a goal (Leveled mode)
    Reward,
}

impl SoundEffect {
    /// Resource name the host plays
    pub fn resource(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "sfx_flap",
            SoundEffect::Reward => "sfx_goal",
        }
    }

    /// Relative loudness before user volume is applied
    fn base_gain(&self) -> f32 {
        match self {
            SoundEffect::Flap => 0.6,
            SoundEffect::Reward => 0.9,
        }
    }
}

/// Something that can play a named sound once
pub trait AudioBackend {
    fn play(&mut self, resource: &str, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, resource: &str, volume: f32) {
        log::debug!("sfx {} @ {:.2}", resource, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogAudio))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Apply volume preferences
    pub fn configure(&mut self, settings: &crate::Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_gain();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect.resource(), vol);
    }
}
