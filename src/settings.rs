//! Game settings
//!
//! Arena, paddle and ball dimensions are fixed for a whole session and handed
//! to the simulation at construction time.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Built-in game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Paddles move one unit per frame, play starts immediately
    #[default]
    Classic,
    /// Paddles move two units per frame
    Quick,
    /// Quick paddles behind a "press start" screen
    StartScreen,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Quick => "Quick",
            Variant::StartScreen => "StartScreen",
        }
    }

    /// Paddle step per frame for this variant
    pub fn paddle_step(&self) -> i32 {
        match self {
            Variant::Classic => 1,
            Variant::Quick | Variant::StartScreen => 2,
        }
    }

    /// Whether the variant waits for a confirm press before playing
    pub fn start_screen(&self) -> bool {
        matches!(self, Variant::StartScreen)
    }
}

/// Immutable configuration of one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Vertical units moved per frame while a direction is held
    pub paddle_step: i32,

    // === Ball ===
    /// Ball radius, also the margin used for walls and goal lines
    pub ball_size: f32,
    /// Distance travelled per frame
    pub ball_speed: f32,

    // === Host ===
    pub fps: u32,
    pub title: String,
    /// Freeze the simulation until a confirm press
    pub start_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            fps: FPS,
            title: TITLE.to_string(),
            start_screen: false,
        }
    }
}

impl Settings {
    /// Create settings from a variant (applies variant defaults)
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            paddle_step: variant.paddle_step(),
            start_screen: variant.start_screen(),
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the geometric assumptions the simulation relies on.
    ///
    /// The arena must be taller than two ball sizes so a ball never touches
    /// both walls in one frame, wide enough that a served ball is more than
    /// one step away from either goal line, and wide enough that the two
    /// padded hitboxes can never overlap. Paddles must start inside their
    /// travel range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("paddle_width", self.paddle_width as f32),
            ("paddle_height", self.paddle_height as f32),
            ("paddle_step", self.paddle_step as f32),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("fps", self.fps as f32),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SettingsError::NotPositive { name, value });
            }
        }

        if self.width < MIN_ARENA || self.height < MIN_ARENA {
            return Err(SettingsError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_ARENA,
            });
        }

        if self.height as f32 <= 2.0 * self.ball_size {
            return Err(SettingsError::ArenaTooShort {
                height: self.height,
                ball_size: self.ball_size,
            });
        }

        // A serve must not land on, or one step short of, a goal line
        if self.width as f32 / 2.0 - self.ball_size <= self.ball_speed {
            return Err(SettingsError::ArenaTooNarrow {
                width: self.width,
                ball_size: self.ball_size,
                ball_speed: self.ball_speed,
            });
        }

        // Padded hitboxes span paddle_width + 2 cells each, and paddles start
        // at half height
        if self.paddle_height > self.height
            || self.height / 2 > self.paddle_max_y()
            || 2 * (self.paddle_width + 2) > self.width
        {
            return Err(SettingsError::PaddleTooLarge {
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Arena center, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Largest y a paddle may occupy
    pub fn paddle_max_y(&self) -> i32 {
        self.height - self.paddle_height
    }

    pub fn left_paddle_start(&self) -> IVec2 {
        IVec2::new(0, self.height / 2)
    }

    pub fn right_paddle_start(&self) -> IVec2 {
        IVec2::new(self.width - self.paddle_width, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic() {
        let settings = Settings::default();
        assert_eq!(settings, Settings::from_variant(Variant::Classic));
        assert_eq!(settings.width, 256);
        assert_eq!(settings.height, 128);
        assert_eq!(settings.paddle_height, 14);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_variants() {
        assert_eq!(Settings::from_variant(Variant::Quick).paddle_step, 2);
        assert!(!Settings::from_variant(Variant::Quick).start_screen);
        assert!(Settings::from_variant(Variant::StartScreen).start_screen);
        assert_eq!(Variant::StartScreen.as_str(), "StartScreen");
    }

    #[test]
    fn test_paddle_starts() {
        let settings = Settings::default();
        assert_eq!(settings.left_paddle_start(), IVec2::new(0, 64));
        assert_eq!(settings.right_paddle_start(), IVec2::new(254, 64));
        assert_eq!(settings.paddle_max_y(), 114);
        assert_eq!(settings.center(), Vec2::new(128.0, 64.0));
    }

    #[test]
    fn test_validate_rejects_short_arena() {
        let settings = Settings {
            ball_size: 10.0,
            height: 20,
            paddle_height: 5,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ArenaTooShort { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_speed() {
        let settings = Settings {
            ball_speed: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotPositive {
                name: "ball_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_paddle_starting_below_range() {
        // Paddles start at y = 10, but may only travel down to y = 5
        let settings = Settings {
            height: 20,
            paddle_height: 15,
            ..Settings::default()
        };
        assert_eq!(settings.left_paddle_start().y, 10);
        assert_eq!(settings.paddle_max_y(), 5);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PaddleTooLarge { .. })
        ));

        let settings = Settings {
            height: 20,
            paddle_height: 10,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ball_spanning_both_goals() {
        let settings = Settings {
            width: 16,
            height: 17,
            paddle_height: 8,
            ball_size: 8.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ArenaTooNarrow { .. })
        ));

        // Center clear of the goal lines, but only by a single step
        let settings = Settings {
            width: 20,
            ball_size: 1.0,
            ball_speed: 9.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ArenaTooNarrow { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let settings = Settings {
            paddle_height: 200,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PaddleTooLarge { .. })
        ));
    }

    #[test]
    fn test_json_partial() {
        let settings = Settings::from_json(r#"{"width": 320, "paddle_step": 2}"#).unwrap();
        assert_eq!(settings.width, 320);
        assert_eq!(settings.paddle_step, 2);
        assert_eq!(settings.height, SCREEN_HEIGHT);

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(Settings::from_json(r#"{"fps": 0}"#).is_err());
    }
}
