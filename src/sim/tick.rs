//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one frame.

use rand::Rng;

use super::collision::{ball_paddle_collision, reached_goal};
use super::state::{Ball, GameEvent, GamePhase, GameState, Side};
use crate::settings::Settings;

/// Controls held during a single tick (level-triggered snapshot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Leave the start screen
    pub confirm: bool,
}

impl TickInput {
    /// (up, down) held for the paddle on `side`
    pub fn paddle(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    settings: &Settings,
    rng: &mut R,
) {
    state.events.clear();

    // The confirm frame only changes phase; play starts on the next one
    if state.phase == GamePhase::WaitingToStart {
        if input.confirm {
            log::info!("Start pressed, entering play");
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Started);
        }
        return;
    }

    state.frame += 1;

    if state.ball.update(settings) {
        state.events.push(GameEvent::WallReflect);
    }

    // Hitboxes are taken before this frame's paddle movement
    let right_hitbox = state.right.hitbox(settings);
    let left_hitbox = state.left.hitbox(settings);

    for side in [Side::Left, Side::Right] {
        let (up, down) = input.paddle(side);
        let paddle = state.paddle_mut(side);
        if up {
            paddle.move_up(settings);
        }
        if down {
            paddle.move_down(settings);
        }
    }

    for (side, hitbox) in [(Side::Right, right_hitbox), (Side::Left, left_hitbox)] {
        if ball_paddle_collision(&state.ball, &hitbox) {
            state.ball.bounce();
            state.events.push(GameEvent::PaddleBounce(side));
            log::debug!("Ball bounced off {:?} paddle at {}", side, state.ball.pos);
        }
    }

    // Both goal lines are tested every frame; a serve puts the ball at the
    // center so the second test cannot fire right after the first.
    for scorer in [Side::Left, Side::Right] {
        if reached_goal(&state.ball, settings, scorer) {
            state.paddle_mut(scorer).score += 1;
            state.ball = Ball::serve(settings, rng);
            state.events.push(GameEvent::Goal { scorer });
            log::debug!(
                "Goal for {:?}, score {}-{}",
                scorer,
                state.left.score,
                state.right.score
            );
        }
    }

    log::trace!(
        "Frame {} ball {} vel {}",
        state.frame,
        state.ball.pos,
        state.ball.vel
    );
}
