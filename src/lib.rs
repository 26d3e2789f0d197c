//! Pong - a two-paddle ball-bouncing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `game`: Frame controller driving the simulation once per tick
//! - `renderer`: Draw pass emitted to the presentation host
//! - `platform`: Input bindings for keyboard and gamepad
//! - `settings`: Arena, paddle and ball configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{HostError, SettingsError};
pub use game::{Host, Pong, WindowConfig, run};
pub use settings::{Settings, Variant};

/// Default configuration constants
pub mod consts {
    /// Frames per second requested from the host
    pub const FPS: u32 = 60;
    /// Window title
    pub const TITLE: &str = "Pong";

    /// Arena dimensions
    pub const SCREEN_WIDTH: i32 = 256;
    pub const SCREEN_HEIGHT: i32 = 128;
    /// Smallest arena side accepted by validation
    pub const MIN_ARENA: i32 = 16;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 2;
    pub const PADDLE_HEIGHT: i32 = PADDLE_WIDTH * 7;
    pub const PADDLE_STEP: i32 = 1;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 1.0;
    pub const BALL_SPEED: f32 = 1.0;

    /// Palette indices
    pub const BLACK: u8 = 0;
    pub const WHITE: u8 = 7;
}
