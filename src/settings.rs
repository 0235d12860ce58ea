//! Game settings and tuning
//!
//! Loaded from a JSON file; any field left out falls back to `consts`.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Colour;
use crate::sim::{EntityKind, Side};

/// How a paddle's vertical velocity is chosen each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaddleControl {
    /// Follow the ball's vertical velocity, lagging by `tracking_offset`
    #[default]
    Tracking,
    /// Hold still while touched, drift at `drift_speed` otherwise
    Touch,
}

impl PaddleControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleControl::Tracking => "Tracking",
            PaddleControl::Touch => "Touch",
        }
    }
}

/// Fixed colour per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub ball: Colour,
    pub paddle_left: Colour,
    pub paddle_right: Colour,
    pub score: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball: Colour::Hotpink,
            paddle_left: Colour::White,
            paddle_right: Colour::Blue,
            score: Colour::White,
        }
    }
}

impl Palette {
    pub fn colour_for(&self, kind: EntityKind) -> Colour {
        match kind {
            EntityKind::Ball => self.ball,
            EntityKind::Paddle(Side::Left) => self.paddle_left,
            EntityKind::Paddle(Side::Right) => self.paddle_right,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Initial velocity; re-serves reuse its magnitude per axis
    pub serve_velocity: Vec2,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub left_control: PaddleControl,
    pub right_control: PaddleControl,
    pub drift_speed: f32,
    pub tracking_offset: f32,

    // === Presentation ===
    pub palette: Palette,
    pub show_score: bool,

    /// Seed for the serve-direction RNG
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ball_size: BALL_SIZE,
            serve_velocity: Vec2::new(BALL_SERVE_SPEED_X, BALL_SERVE_SPEED_Y),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            left_control: PaddleControl::Tracking,
            right_control: PaddleControl::Touch,
            drift_speed: PADDLE_DRIFT_SPEED,
            tracking_offset: PADDLE_TRACKING_OFFSET,

            palette: Palette::default(),
            show_score: true,

            seed: 0,
        }
    }
}

impl Settings {
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    pub fn control(&self, side: Side) -> PaddleControl {
        match side {
            Side::Left => self.left_control,
            Side::Right => self.right_control,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject geometry the game cannot be played on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.paddle_margin < 0.0 || !self.paddle_margin.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "paddle_margin must be non-negative, got {}",
                self.paddle_margin
            )));
        }
        if self.paddle_height > self.screen_height || self.ball_size > self.screen_height {
            return Err(SettingsError::Invalid(
                "ball and paddles must fit within screen_height".to_string(),
            ));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size > self.screen_width {
            return Err(SettingsError::Invalid(
                "paddles and ball must fit side by side within screen_width".to_string(),
            ));
        }
        if !self.serve_velocity.is_finite() || !self.drift_speed.is_finite() || !self.tracking_offset.is_finite() {
            return Err(SettingsError::Invalid("velocities must be finite".to_string()));
        }
        if self.serve_velocity.x == 0.0 {
            return Err(SettingsError::Invalid(
                "serve_velocity must have a non-zero horizontal component".to_string(),
            ));
        }

        Ok(())
    }
}

/// Settings loading and validation errors
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings JSON is malformed
    Parse(serde_json::Error),
    /// Settings parsed but describe an unplayable game
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read settings: {}", e),
            Self::Parse(e) => write!(f, "Malformed settings: {}", e),
            Self::Invalid(reason) => write!(f, "Invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
