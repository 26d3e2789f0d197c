//! Fixed draw pass for one frame

use crate::consts::{BLACK, WHITE};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Prompt shown while waiting for the confirm press
pub const START_PROMPT: &str = "PRESS START";

/// Horizontal offsets of the score labels from the center line
const LEFT_SCORE_OFFSET: i32 = -7;
const RIGHT_SCORE_OFFSET: i32 = 5;
/// Approximate glyph width of the host font, used to center the prompt
const GLYPH_WIDTH: i32 = 4;

/// A primitive the host knows how to draw. Colors are palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear { color: u8 },
    Circle {
        x: i32,
        y: i32,
        r: i32,
        color: u8,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u8,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u8,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: u8,
    },
}

/// Draw target supplied by the host
pub trait Canvas {
    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that records commands, for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Emit the draw calls for the current state
pub fn draw_frame(state: &GameState, settings: &Settings, canvas: &mut impl Canvas) {
    canvas.draw(DrawCommand::Clear { color: BLACK });

    let mid_x = settings.width / 2;

    if state.phase == GamePhase::WaitingToStart {
        let text_width = START_PROMPT.len() as i32 * GLYPH_WIDTH;
        canvas.draw(DrawCommand::Text {
            x: mid_x - text_width / 2,
            y: settings.height / 2,
            text: START_PROMPT.to_string(),
            color: WHITE,
        });
        return;
    }

    let ball = state.ball.cell();
    canvas.draw(DrawCommand::Circle {
        x: ball.x,
        y: ball.y,
        r: settings.ball_size as i32,
        color: WHITE,
    });

    for paddle in [&state.left, &state.right] {
        canvas.draw(DrawCommand::Rect {
            x: paddle.x,
            y: paddle.y,
            w: settings.paddle_width,
            h: settings.paddle_height,
            color: WHITE,
        });
    }

    // Center divider
    canvas.draw(DrawCommand::Line {
        x1: mid_x,
        y1: 0,
        x2: mid_x,
        y2: settings.height,
        color: WHITE,
    });

    canvas.draw(DrawCommand::Text {
        x: mid_x + LEFT_SCORE_OFFSET,
        y: 0,
        text: state.left.score.to_string(),
        color: WHITE,
    });
    canvas.draw(DrawCommand::Text {
        x: mid_x + RIGHT_SCORE_OFFSET,
        y: 0,
        text: state.right.score.to_string(),
        color: WHITE,
    });
}
