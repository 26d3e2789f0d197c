//! Error types
//!
//! The simulation itself cannot fail. Errors only come from building
//! [`Settings`](crate::Settings) or from the host bringing up its window.

/// Rejected game settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("arena must be at least {min}x{min} pixels, got {width}x{height}")]
    ArenaTooSmall { width: i32, height: i32, min: i32 },

    #[error("arena height {height} must exceed twice the ball size {ball_size}")]
    ArenaTooShort { height: i32, ball_size: f32 },

    #[error("arena width {width} too narrow for ball size {ball_size} at speed {ball_speed}")]
    ArenaTooNarrow {
        width: i32,
        ball_size: f32,
        ball_speed: f32,
    },

    #[error("paddle of {paddle_width}x{paddle_height} does not fit an arena of {width}x{height}")]
    PaddleTooLarge {
        paddle_width: i32,
        paddle_height: i32,
        width: i32,
        height: i32,
    },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("parsing failed : {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by the presentation host
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("host initialization failed : {0}")]
    Init(String),
}
