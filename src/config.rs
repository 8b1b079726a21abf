//! Fixed startup configuration
//!
//! Everything the game is built from, gathered in one block. None of it is
//! runtime-tunable; `Default` sources the values from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The complete configuration block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena dimensions in pixels
    pub arena_width: f32,
    pub arena_height: f32,

    /// Brick grid shape and layout
    pub brick_columns: usize,
    pub brick_rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_x: f32,
    pub brick_offset_y: f32,

    /// Paddle geometry and steering speed (px/frame)
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance from the paddle top edge to the arena floor
    pub paddle_floor_margin: f32,

    /// Ball geometry and velocities (px/frame)
    pub ball_radius: f32,
    /// Upward speed forced on paddle contact
    pub ball_speed: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_x: BRICK_OFFSET_X,
            brick_offset_y: BRICK_OFFSET_Y,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_floor_margin: PADDLE_FLOOR_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,
        }
    }
}

impl GameConfig {
    /// Log the active configuration at startup
    pub fn log_summary(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::info!("Config: {}", json),
            Err(e) => log::warn!("Config not serializable: {}", e),
        }
    }
}
