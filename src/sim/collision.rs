//! Collision detection for the four body types
//!
//! Pure predicates over current positions; the simulation step applies every
//! response (sign flips, visibility, score). Nothing here mutates.
//!
//! All bounds are strict inequalities: contact at the exact edge does not
//! register. Grazing misses are part of the observable behavior and stay.

use super::state::{Arena, Ball, Brick, Paddle};

/// Which axes the ball reflects on this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallReflection {
    /// Right edge past the arena width, or left edge past zero
    pub reflect_x: bool,
    /// Bottom edge past the arena height, or top edge past zero
    pub reflect_y: bool,
}

impl WallReflection {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Side and top/bottom wall contact.
///
/// The bottom edge reflects here too; the separate [`floor_hit`] check still
/// signals the loss afterwards.
pub fn wall_reflection(ball: &Ball, arena: Arena) -> WallReflection {
    WallReflection {
        reflect_x: ball.right() > arena.width || ball.left() < 0.0,
        reflect_y: ball.bottom() > arena.height || ball.top() < 0.0,
    }
}

/// Ball strictly inside the paddle's horizontal span with its bottom edge past
/// the paddle's top edge.
///
/// The response (applied by the caller) forces `vel.y = -speed` rather than
/// flipping the sign: paddle bounces always leave at the same base vertical
/// speed, whatever came in. Horizontal velocity is untouched.
pub fn paddle_hit(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() > paddle.left() && ball.right() < paddle.right() && ball.bottom() > paddle.top()
}

/// Ball strictly inside the brick's horizontal span with vertical extents
/// overlapping. The caller flips `vel.y`, hides the brick, and scores.
pub fn brick_hit(ball: &Ball, brick: &Brick) -> bool {
    ball.left() > brick.left()
        && ball.right() < brick.right()
        && ball.bottom() > brick.top()
        && ball.top() < brick.bottom()
}

/// Ball's bottom edge past the arena floor: the loss condition
pub fn floor_hit(ball: &Ball, arena: Arena) -> bool {
    ball.bottom() > arena.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn arena() -> Arena {
        Arena {
            width: 800.0,
            height: 600.0,
        }
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(4.0, -4.0),
            radius: 10.0,
            speed: 1.0,
        }
    }

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 580.0),
            size: Vec2::new(80.0, 10.0),
            dx: 0.0,
            speed: 8.0,
        }
    }

    fn brick_at(x: f32, y: f32) -> Brick {
        Brick {
            pos: Vec2::new(x, y),
            size: Vec2::new(70.0, 20.0),
            visible: true,
        }
    }

    #[test]
    fn test_wall_reflection_sides() {
        // Right edge past the wall
        let result = wall_reflection(&ball_at(795.0, 300.0), arena());
        assert!(result.reflect_x);
        assert!(!result.reflect_y);

        // Left edge past zero
        let result = wall_reflection(&ball_at(5.0, 300.0), arena());
        assert!(result.reflect_x);
        assert!(!result.reflect_y);

        // Well inside: no reflection
        assert_eq!(wall_reflection(&ball_at(400.0, 300.0), arena()), WallReflection::miss());
    }

    #[test]
    fn test_wall_reflection_top_bottom() {
        let result = wall_reflection(&ball_at(400.0, 5.0), arena());
        assert!(!result.reflect_x);
        assert!(result.reflect_y);

        // Bottom edge reflects too, even though it also counts as the floor
        let result = wall_reflection(&ball_at(400.0, 595.0), arena());
        assert!(!result.reflect_x);
        assert!(result.reflect_y);
    }

    #[test]
    fn test_wall_contact_at_exact_edge_is_a_miss() {
        // right() == width exactly: strict comparison, no reflection yet
        let result = wall_reflection(&ball_at(790.0, 300.0), arena());
        assert!(!result.reflect_x);

        // left() == 0 exactly
        let result = wall_reflection(&ball_at(10.0, 300.0), arena());
        assert!(!result.reflect_x);
    }

    #[test]
    fn test_paddle_hit_inside_span() {
        let paddle = paddle_at(360.0);

        // Centered over the paddle, bottom edge past the paddle top
        assert!(paddle_hit(&ball_at(400.0, 575.0), &paddle));

        // Above the paddle top: no contact
        assert!(!paddle_hit(&ball_at(400.0, 560.0), &paddle));
    }

    #[test]
    fn test_paddle_hit_requires_full_horizontal_containment() {
        let paddle = paddle_at(360.0);

        // Left edge exactly on the paddle's left edge: grazing, no hit
        assert!(!paddle_hit(&ball_at(370.0, 575.0), &paddle));

        // Hanging over the paddle's right edge
        assert!(!paddle_hit(&ball_at(435.0, 575.0), &paddle));

        // Just inside both edges
        assert!(paddle_hit(&ball_at(371.0, 575.0), &paddle));
    }

    #[test]
    fn test_brick_hit_overlap() {
        let brick = brick_at(45.0, 60.0);

        // Center of the brick
        assert!(brick_hit(&ball_at(80.0, 70.0), &brick));

        // Below the brick entirely
        assert!(!brick_hit(&ball_at(80.0, 100.0), &brick));

        // Inside horizontally but vertical extents only touch: top() == bottom()
        assert!(!brick_hit(&ball_at(80.0, 90.0), &brick));
    }

    #[test]
    fn test_brick_hit_horizontal_grazing_is_a_miss() {
        let brick = brick_at(45.0, 60.0);

        // left() == brick.left() exactly
        assert!(!brick_hit(&ball_at(55.0, 70.0), &brick));

        // right() == brick.right() exactly
        assert!(!brick_hit(&ball_at(105.0, 70.0), &brick));
    }

    #[test]
    fn test_floor_hit() {
        assert!(!floor_hit(&ball_at(400.0, 300.0), arena()));
        // bottom() == height exactly: not past the floor yet
        assert!(!floor_hit(&ball_at(400.0, 590.0), arena()));
        assert!(floor_hit(&ball_at(400.0, 595.0), arena()));
    }
}
