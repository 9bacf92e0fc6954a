//! Session driver
//!
//! Owns one run at a time plus everything that outlives a run (RNG,
//! leaderboard, audio, settings) and feeds the sim's events to the host.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::highscores::HighScores;
use crate::platform::SceneHost;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Phase of a touch on the restart button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Ended,
}

/// Input gathered by the host for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Screen tapped (touch began outside the restart button)
    pub tap: bool,
    pub restart_touch: Option<TouchPhase>,
}

/// A play session
pub struct Game<H: SceneHost> {
    tuning: Tuning,
    settings: Settings,
    state: GameState,
    hud: Hud,
    rng: Pcg32,
    audio: AudioManager,
    highscores: HighScores,
    host: H,
    runs: u32,
}

impl<H: SceneHost> Game<H> {
    /// Start a session and present the first run
    pub fn new(
        tuning: Tuning,
        settings: Settings,
        seed: u64,
        host: H,
        mut audio: AudioManager,
    ) -> Self {
        audio.configure(&settings);
        let state = GameState::new(&tuning);
        let mut game = Self {
            tuning,
            settings,
            state,
            hud: Hud::new(0),
            rng: Pcg32::seed_from_u64(seed),
            audio,
            highscores: HighScores::new(),
            host,
            runs: 1,
        };
        game.present();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts that mirror bodies or set up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Runs started this session
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// One rendered frame: input, gameplay update, physics, contacts
    pub fn frame(&mut self, input: &FrameInput, dt: f32) {
        match input.restart_touch {
            Some(TouchPhase::Began) => self.hud.restart.touch_began(),
            Some(TouchPhase::Ended) => {
                if self.hud.restart.touch_ended() {
                    self.restart();
                    return;
                }
            }
            None => {}
        }

        if input.tap {
            self.tap();
        }

        let events = sim::tick(&mut self.state, &self.tuning, dt, &mut self.rng);
        self.dispatch(events);

        let contacts = self.host.step(&mut self.state, &self.tuning, dt);
        for contact in contacts {
            self.handle_contact(contact.a.as_deref(), contact.b.as_deref());
        }

        self.host.present_hud(&self.hud);
    }

    /// Touch began on the play field
    pub fn tap(&mut self) {
        let events = sim::tap(&mut self.state);
        self.dispatch(events);
    }

    /// Physics reported two bodies starting to touch
    pub fn handle_contact(&mut self, a: Option<&str>, b: Option<&str>) {
        let events = sim::contact(&mut self.state, a, b);
        self.dispatch(events);
    }

    /// Throw the run away and build a fresh one
    fn restart(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.hud = Hud::new(self.highscores.top_score());
        self.runs += 1;
        self.present();
    }

    fn present(&mut self) {
        log::info!(
            "Run {} started ({} mode, best {})",
            self.runs,
            self.tuning.mode.as_str(),
            self.highscores.top_score()
        );
        self.host.apply(&GameEvent::ScenePresented);
        self.host.present_hud(&self.hud);
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in &events {
            self.hud.apply(event);
            match event {
                // Sounds go through the mixer, not the scene
                GameEvent::PlaySound(effect) => {
                    self.audio.play(*effect);
                    continue;
                }
                GameEvent::ShakeScene if !self.settings.effective_screen_shake() => continue,
                GameEvent::GameOver { score } => {
                    self.highscores
                        .add_score(*score, self.state.mode, self.state.tier);
                    self.hud.set_best(self.highscores.top_score());
                }
                _ => {}
            }
            self.host.apply(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_DT;
    use crate::platform::HeadlessHost;
    use crate::sim::RunPhase;
    use crate::ui::ButtonState;

    fn game(tuning: Tuning, settings: Settings) -> Game<HeadlessHost> {
        Game::new(tuning, settings, 1, HeadlessHost::new(), AudioManager::default())
    }

    fn press_restart(game: &mut Game<HeadlessHost>) {
        game.frame(
            &FrameInput {
                restart_touch: Some(TouchPhase::Began),
                ..Default::default()
            },
            FIXED_DT,
        );
        game.frame(
            &FrameInput {
                restart_touch: Some(TouchPhase::Ended),
                ..Default::default()
            },
            FIXED_DT,
        );
    }

    #[test]
    fn test_session_starts_with_restart_hidden() {
        let game = game(Tuning::classic(), Settings::default());
        assert_eq!(game.hud().restart.state, ButtonState::Hidden);
        assert_eq!(game.hud().score.text, "0");
        assert_eq!(game.host().events, vec![GameEvent::ScenePresented]);
    }

    #[test]
    fn test_restart_unreachable_while_active() {
        let mut game = game(Tuning::classic(), Settings::default());
        game.handle_contact(Some("hero"), Some("goal"));
        press_restart(&mut game);
        assert_eq!(game.runs(), 1);
        assert_eq!(game.state().score, 1);
    }

    #[test]
    fn test_game_over_then_restart_resets_run() {
        let mut game = game(Tuning::leveled(), Settings::default());
        game.handle_contact(Some("goal"), Some("hero"));
        game.handle_contact(Some("goal"), Some("hero"));
        game.handle_contact(Some("hero"), Some("ground"));

        assert_eq!(game.state().phase, RunPhase::GameOver);
        assert_eq!(game.hud().restart.state, ButtonState::Active);
        assert!(game.hud().best.visible);
        assert_eq!(game.hud().best.text, "2");
        assert_eq!(game.highscores().top_score(), 2);

        press_restart(&mut game);
        assert_eq!(game.runs(), 2);
        assert!(game.state().is_active());
        assert_eq!(game.state().score, 0);
        assert!(game.state().obstacle_layer.obstacles.is_empty());
        assert_eq!(game.hud().restart.state, ButtonState::Hidden);
        assert_eq!(game.hud().best.text, "2");
        assert!(!game.hud().best.visible);
    }

    #[test]
    fn test_reduced_motion_skips_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut game = game(Tuning::classic(), settings);
        game.handle_contact(Some("hero"), Some("obstacle"));
        assert_eq!(game.host().count(|e| *e == GameEvent::ShakeScene), 0);
        assert_eq!(game.host().count(|e| *e == GameEvent::ShowRestart), 1);
    }

    #[test]
    fn test_sounds_are_not_forwarded_to_host() {
        let mut game = game(Tuning::classic(), Settings::default());
        game.tap();
        assert_eq!(
            game.host().count(|e| matches!(e, GameEvent::PlaySound(_))),
            0
        );
        assert_eq!(game.state().since_touch, 0.0);
    }
}
