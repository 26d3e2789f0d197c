//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Randomness only through an injected RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, ball_paddle_collision, reached_goal};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Side, velocity};
pub use tick::{TickInput, tick};
