//! Game state and entity types
//!
//! Plain mutable records; everything the simulation touches frame to frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// The bounded rectangular play area
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// The ball. Never destroyed; wall and brick contact only flip velocity signs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position (pixels, top-left origin, y down)
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Upward speed forced on paddle contact
    pub speed: f32,
}

impl Ball {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Current horizontal velocity (px/frame), written from input each frame
    pub dx: f32,
    /// Steering speed a key press maps to
    pub speed: f32,
}

impl Paddle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// A single destructible brick. Position is fixed by its grid cell; only the
/// visibility flag ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub visible: bool,
}

impl Brick {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The brick grid, columns outer, rows inner. Layout is computed once at
/// construction and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    pub fn new(config: &GameConfig) -> Self {
        let mut columns = Vec::with_capacity(config.brick_columns);
        for col in 0..config.brick_columns {
            let mut rows = Vec::with_capacity(config.brick_rows);
            for row in 0..config.brick_rows {
                let x = col as f32 * (config.brick_width + config.brick_padding)
                    + config.brick_offset_x;
                let y = row as f32 * (config.brick_height + config.brick_padding)
                    + config.brick_offset_y;
                rows.push(Brick {
                    pos: Vec2::new(x, y),
                    size: Vec2::new(config.brick_width, config.brick_height),
                    visible: true,
                });
            }
            columns.push(rows);
        }
        Self { columns }
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> &Brick {
        &self.columns[col][row]
    }

    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut Brick {
        &mut self.columns[col][row]
    }

    /// Iterate all bricks in scan order (columns outer, rows inner)
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    /// Make every brick visible again. Idempotent.
    pub fn show_all(&mut self) {
        for brick in self.columns.iter_mut().flatten() {
            brick.visible = true;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.iter().filter(|b| b.visible).count()
    }
}

/// Complete game state, owned by the frame driver and passed by reference to
/// the simulation step and the render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u32,
    /// Frame counter
    pub frame: u64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };
        let paddle = Paddle {
            pos: Vec2::new(
                config.arena_width / 2.0 - config.paddle_width / 2.0,
                config.arena_height - config.paddle_floor_margin,
            ),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            dx: 0.0,
            speed: config.paddle_speed,
        };
        let ball = Ball {
            pos: Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            vel: Vec2::new(config.ball_start_dx, config.ball_start_dy),
            radius: config.ball_radius,
            speed: config.ball_speed,
        };
        Self {
            arena,
            paddle,
            ball,
            bricks: BrickGrid::new(config),
            score: 0,
            frame: 0,
        }
    }

    /// Score one destroyed brick.
    ///
    /// Every `row_count * row_count` points the whole grid refills, without
    /// touching the score. The threshold is the row count squared, not the
    /// brick total.
    pub fn increase_score(&mut self) {
        self.score += 1;
        let refill_every = (self.bricks.row_count() * self.bricks.row_count()) as u32;
        if refill_every > 0 && self.score.is_multiple_of(refill_every) {
            log::debug!("score {} refills the grid", self.score);
            self.bricks.show_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let grid = BrickGrid::new(&GameConfig::default());
        assert_eq!(grid.column_count(), 9);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.visible_count(), 45);

        // Cell (0,0) sits at the configured offset
        let first = grid.get(0, 0);
        assert_eq!(first.pos, Vec2::new(45.0, 60.0));

        // One column over, one row down: width/height plus padding apart
        assert_eq!(grid.get(1, 0).pos, Vec2::new(125.0, 60.0));
        assert_eq!(grid.get(0, 1).pos, Vec2::new(45.0, 90.0));
    }

    #[test]
    fn test_show_all_idempotent() {
        let mut grid = BrickGrid::new(&GameConfig::default());
        grid.get_mut(3, 2).visible = false;
        grid.get_mut(8, 4).visible = false;

        grid.show_all();
        let after_once: Vec<bool> = grid.iter().map(|b| b.visible).collect();
        grid.show_all();
        let after_twice: Vec<bool> = grid.iter().map(|b| b.visible).collect();

        assert_eq!(grid.visible_count(), 45);
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn test_refill_trigger_is_row_count_squared() {
        let mut state = GameState::new(&GameConfig::default());

        // Hide the whole grid, then walk the score up to the threshold
        for col in 0..state.bricks.column_count() {
            for row in 0..state.bricks.row_count() {
                state.bricks.get_mut(col, row).visible = false;
            }
        }
        for _ in 0..24 {
            state.increase_score();
        }
        assert_eq!(state.score, 24);
        assert_eq!(state.bricks.visible_count(), 0);

        // 25th point: grid refills, score keeps counting
        state.increase_score();
        assert_eq!(state.score, 25);
        assert_eq!(state.bricks.visible_count(), 45);
    }

    #[test]
    fn test_initial_placement() {
        let config = GameConfig::default();
        let state = GameState::new(&config);

        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(state.paddle.pos, Vec2::new(360.0, 580.0));
        assert_eq!(state.score, 0);
    }
}
