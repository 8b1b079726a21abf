//! Frame-by-frame simulation module
//!
//! All gameplay logic lives here: movement, collision response, scoring.
//! No rendering or platform dependencies. Velocities are pixels per frame;
//! one tick runs per display refresh.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallReflection, brick_hit, floor_hit, paddle_hit, wall_reflection};
pub use state::{Arena, Ball, Brick, BrickGrid, GameState, Paddle};
pub use tick::{FrameDriver, TickInput, tick};
