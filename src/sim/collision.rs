//! Collision and goal detection on the integer grid
//!
//! The ball is treated as a point. Paddle contact is a containment test of the
//! ball's truncated cell against the paddle rectangle grown by one cell on every
//! side, which makes contact slightly generous.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Side};
use crate::settings::Settings;

/// Inclusive rectangle of grid cells a paddle reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    pub min: IVec2,
    pub max: IVec2,
}

impl Hitbox {
    /// Hitbox of a `size` rectangle at `pos`, padded by one cell
    pub fn around(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos - IVec2::ONE,
            max: pos + size,
        }
    }

    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        self.min.x <= cell.x
            && cell.x <= self.max.x
            && self.min.y <= cell.y
            && cell.y <= self.max.y
    }
}

/// Check whether the ball's cell lies inside a hitbox
pub fn ball_paddle_collision(ball: &Ball, hitbox: &Hitbox) -> bool {
    hitbox.contains(ball.cell())
}

/// Check whether the ball has crossed the goal line `scorer` attacks.
///
/// Reaching the right edge scores for the left player and the other way round.
pub fn reached_goal(ball: &Ball, settings: &Settings, scorer: Side) -> bool {
    match scorer {
        Side::Left => ball.pos.x >= settings.width as f32 - settings.ball_size,
        Side::Right => ball.pos.x <= settings.ball_size,
    }
}
