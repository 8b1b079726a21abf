//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Segments used to tessellate the ball
const BALL_SEGMENTS: u32 = 32;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.x, top_left.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Build the whole frame: every visible brick, the paddle, the ball
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let brick_count = state.bricks.visible_count();
    let mut vertices = Vec::with_capacity(brick_count * 6 + 6 + (BALL_SEGMENTS * 3) as usize);

    for brick in state.bricks.iter().filter(|b| b.visible) {
        vertices.extend(rect(brick.pos, brick.size, colors::BRICK));
    }
    vertices.extend(rect(state.paddle.pos, state.paddle.size, colors::PADDLE));
    vertices.extend(circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}
