//! Game state and core simulation types
//!
//! Everything the frame controller mutates lives in [`GameState`].

use std::ops::Not;

use glam::{IVec2, Vec2};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use crate::settings::Settings;

/// Left or right half of the arena.
///
/// [`Not`] gives the opponent, and sampling from [`StandardUniform`] gives a
/// fair coin, used for the sign of each velocity axis on serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x axis pointing toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Distribution<Side> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        match rng.random() {
            true => Side::Left,
            false => Side::Right,
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation frozen behind the start prompt
    WaitingToStart,
    /// Full update every tick
    Playing,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Confirm pressed on the start screen
    Started,
    /// Ball reflected off the top or bottom wall
    WallReflect,
    /// Ball bounced off the paddle on the given side
    PaddleBounce(Side),
    /// Ball crossed a goal line; `scorer` gained a point
    Goal { scorer: Side },
}

/// Build a velocity pointing along `dir` with magnitude `speed`
pub fn velocity(dir: Vec2, speed: f32) -> Vec2 {
    dir.normalize_or_zero() * speed
}

/// The ball: a point with constant-speed velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// A fresh ball at the arena center heading along a random diagonal.
    ///
    /// Each axis picks its sign independently, so the four diagonals are
    /// equally likely and the ball never travels straight.
    pub fn serve<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let sx: Side = rng.random();
        let sy: Side = rng.random();
        let dir = Vec2::new(sx.sign(), sy.sign());
        Self::new(settings.center(), velocity(dir, settings.ball_speed))
    }

    /// Advance one frame and reflect off the top/bottom walls.
    ///
    /// Returns true if the vertical velocity was inverted.
    pub fn update(&mut self, settings: &Settings) -> bool {
        self.pos += self.vel;

        let mut reflected = false;
        if self.pos.y >= settings.height as f32 - settings.ball_size {
            self.vel.y = -self.vel.y;
            reflected = true;
        }
        if self.pos.y <= settings.ball_size {
            self.vel.y = -self.vel.y;
            reflected = true;
        }
        reflected
    }

    /// Invert horizontal velocity after touching a paddle
    pub fn bounce(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Position truncated to the grid cell used for paddle contact
    pub fn cell(&self) -> IVec2 {
        IVec2::new(self.pos.x as i32, self.pos.y as i32)
    }
}

/// A player's paddle. `x` never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub score: u32,
}

impl Paddle {
    pub fn new(pos: IVec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            score: 0,
        }
    }

    /// Contact region for the current position
    pub fn hitbox(&self, settings: &Settings) -> Hitbox {
        Hitbox::around(
            IVec2::new(self.x, self.y),
            IVec2::new(settings.paddle_width, settings.paddle_height),
        )
    }

    /// Move up by one step unless that would leave the arena
    pub fn move_up(&mut self, settings: &Settings) -> bool {
        if self.y - settings.paddle_step >= 0 {
            self.y -= settings.paddle_step;
            true
        } else {
            false
        }
    }

    /// Move down by one step unless that would leave the arena
    pub fn move_down(&mut self, settings: &Settings) -> bool {
        if self.y + settings.paddle_step <= settings.paddle_max_y() {
            self.y += settings.paddle_step;
            true
        } else {
            false
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Frames that ran the full update
    pub frame: u64,
    /// Events raised by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create the initial state, serving the first ball from `rng`
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let phase = if settings.start_screen {
            GamePhase::WaitingToStart
        } else {
            GamePhase::Playing
        };

        Self {
            phase,
            ball: Ball::serve(settings, rng),
            left: Paddle::new(settings.left_paddle_start()),
            right: Paddle::new(settings.right_paddle_start()),
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Current score as (left, right)
    pub fn score(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }
}
