//! HUD model: labels, bonus star and the restart button
//!
//! The host draws whatever this says; gameplay never touches nodes.

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, StarState};

/// Button interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
    /// Visible and tappable
    Active,
    /// Finger is down on it
    Selected,
    /// Invisible, ignores touches
    #[default]
    Hidden,
}

/// A tappable control
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Button {
    pub state: ButtonState,
}

impl Button {
    pub fn show(&mut self) {
        self.state = ButtonState::Active;
    }

    pub fn hide(&mut self) {
        self.state = ButtonState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        self.state != ButtonState::Hidden
    }

    /// Touch went down on the button
    pub fn touch_began(&mut self) {
        if self.state == ButtonState::Active {
            self.state = ButtonState::Selected;
        }
    }

    /// Touch lifted; returns true when the button fires
    pub fn touch_ended(&mut self) -> bool {
        if self.state == ButtonState::Selected {
            self.state = ButtonState::Active;
            return true;
        }
        false
    }
}

/// A text node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, visible: bool) -> Self {
        Self {
            text: text.into(),
            visible,
        }
    }
}

/// Everything drawn over the play field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: Label,
    pub best: Label,
    pub star: StarState,
    pub restart: Button,
}

impl Hud {
    /// Start-of-run HUD: score shown, best hidden, restart hidden
    pub fn new(best: u32) -> Self {
        Self {
            score: Label::new("0", true),
            best: Label::new(best.to_string(), false),
            star: StarState::Hidden,
            restart: Button::default(),
        }
    }

    pub fn set_best(&mut self, best: u32) {
        self.best.text = best.to_string();
    }

    /// Reflect a gameplay event; returns true if anything changed
    pub fn apply(&mut self, event: &GameEvent) -> bool {
        match event {
            GameEvent::ScoreChanged { score } => self.score.text = score.to_string(),
            GameEvent::ShowStar => self.star = StarState::Visible,
            GameEvent::HideStar => self.star = StarState::Hidden,
            GameEvent::ShowRestart => self.restart.show(),
            GameEvent::ShowHighScore => {
                self.score.visible = false;
                self.best.visible = true;
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_button_ignores_touches() {
        let mut button = Button::default();
        button.touch_began();
        assert!(!button.touch_ended());
        assert_eq!(button.state, ButtonState::Hidden);
    }

    #[test]
    fn test_button_fires_on_release() {
        let mut button = Button::default();
        button.show();
        button.touch_began();
        assert_eq!(button.state, ButtonState::Selected);
        assert!(button.touch_ended());
        assert_eq!(button.state, ButtonState::Active);
        // A release without a press does nothing
        assert!(!button.touch_ended());
    }

    #[test]
    fn test_hud_follows_events() {
        let mut hud = Hud::new(12);
        assert!(hud.apply(&GameEvent::ScoreChanged { score: 3 }));
        assert_eq!(hud.score.text, "3");

        hud.apply(&GameEvent::ShowHighScore);
        assert!(!hud.score.visible);
        assert!(hud.best.visible);
        assert_eq!(hud.best.text, "12");

        assert!(!hud.apply(&GameEvent::ShakeScene));
    }
}
