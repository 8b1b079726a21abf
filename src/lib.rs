//! Brick Breaker - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Frame-by-frame simulation (movement, collisions, score)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Fixed startup configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Brick grid: columns of rows, laid out once at startup
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Paddle defaults - rides just above the floor
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_FLOOR_MARGIN: f32 = 20.0;

    /// Ball defaults - velocities are pixels per frame
    pub const BALL_RADIUS: f32 = 10.0;
    /// Upward speed forced on paddle contact
    pub const BALL_SPEED: f32 = 1.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;
}
