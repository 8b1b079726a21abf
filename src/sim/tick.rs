//! Per-frame simulation step
//!
//! One `tick` per display refresh. There is no fixed timestep: velocities are
//! pixels per frame, so simulation speed follows the host refresh rate.

use super::collision::{brick_hit, floor_hit, paddle_hit, wall_reflection};
use super::state::GameState;

/// Input for a single frame (written by the input controller between frames)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Paddle velocity in px/frame: +speed, -speed, or 0
    pub paddle_dx: f32,
}

/// Advance the game by one frame.
///
/// Order is fixed and observable: paddle move/clamp, ball move, walls, paddle,
/// brick scan, floor.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;

    // Paddle: integrate, then clamp to the arena
    state.paddle.dx = input.paddle_dx;
    state.paddle.pos.x += state.paddle.dx;
    if state.paddle.right() > state.arena.width {
        state.paddle.pos.x = state.arena.width - state.paddle.size.x;
    }
    if state.paddle.pos.x < 0.0 {
        state.paddle.pos.x = 0.0;
    }

    // Ball: integrate
    state.ball.pos += state.ball.vel;

    // Walls flip velocity signs. The bottom edge reflects here as well; the
    // floor check at the end of the frame still fires on top of it.
    let walls = wall_reflection(&state.ball, state.arena);
    if walls.reflect_x {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if walls.reflect_y {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle resolves before bricks: the bounce forces the base upward speed,
    // and the brick scan below sees the already-rewritten velocity.
    if paddle_hit(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.speed;
    }

    // Brick scan, columns outer, rows inner. No short-circuit: several bricks
    // can die in one frame. Scoring runs inline, so a refill triggered
    // mid-scan makes the remaining cells visible to this same scan.
    for col in 0..state.bricks.column_count() {
        for row in 0..state.bricks.row_count() {
            if !state.bricks.get(col, row).visible {
                continue;
            }
            if brick_hit(&state.ball, state.bricks.get(col, row)) {
                state.ball.vel.y = -state.ball.vel.y;
                state.bricks.get_mut(col, row).visible = false;
                state.increase_score();
            }
        }
    }

    // Floor: refill the grid and zero the score. The ball is not repositioned;
    // the wall reflection above already turned it around.
    if floor_hit(&state.ball, state.arena) {
        log::debug!("floor hit at frame {}, score reset", state.frame);
        state.bricks.show_all();
        state.score = 0;
    }
}

/// Drives `tick` and owns the only way to stop the loop.
///
/// The loop itself has no end condition; the `running` flag gives render
/// loops and tests a clean shutdown point.
#[derive(Debug)]
pub struct FrameDriver {
    running: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self { running: true }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Stop the loop. `advance` becomes a no-op afterwards.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one frame unless stopped. Returns whether the loop should continue.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput) -> bool {
        if self.running {
            tick(state, input);
        }
        self.running
    }
}
