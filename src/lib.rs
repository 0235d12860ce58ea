//! Visitor Pong - a two-paddle arcade game over a fixed entity set
//!
//! Core modules:
//! - `option`: Visit-style matching on `Option` (absence is not an error)
//! - `sim`: Entities, the entity manager cursor and the per-frame update pass
//! - `renderer`: Drawing-manager boundary, the draw pass and its backends
//! - `platform`: Input backends (touch/pointer presence)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod game;
pub mod option;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use option::Visit;
pub use settings::{Palette, PaddleControl, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame time (ms); velocities are in pixels per millisecond
    pub const FRAME_DT_MS: f32 = 1000.0 / 60.0;

    /// Screen dimensions (device pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SERVE_SPEED_X: f32 = 0.25;
    pub const BALL_SERVE_SPEED_Y: f32 = 0.15;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its screen edge
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Touch-controlled paddle drift while no touch is active
    pub const PADDLE_DRIFT_SPEED: f32 = 0.30;
    /// Tracking paddle lags the ball's vertical velocity by this much
    pub const PADDLE_TRACKING_OFFSET: f32 = 0.015;

    /// Glyph size requested for the score overlay
    pub const SCORE_TEXT_SIZE: u32 = 24;
}
