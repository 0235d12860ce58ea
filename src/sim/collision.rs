//! Collision detection and response for axis-aligned rectangles
//!
//! The ball is resolved against the paddles and the top/bottom walls by
//! minimum translation: push out along the axis of least overlap, then
//! reflect the velocity about that axis.

use glam::Vec2;

use super::entity::Side;
use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal, pointing from the obstacle toward the moving body
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Separate `pos` from the obstacle and reflect `vel` if it still points
    /// into it. Returns whether the velocity was reflected.
    pub fn resolve(&self, pos: &mut Vec2, vel: &mut Vec2) -> bool {
        if !self.hit {
            return false;
        }
        *pos += self.normal * self.penetration;
        if vel.dot(self.normal) < 0.0 {
            *vel = reflect_velocity(*vel, self.normal);
            true
        } else {
            false
        }
    }
}

/// Check overlap between a moving rectangle and a fixed one
///
/// The normal lies on the axis of least overlap and points away from `fixed`.
pub fn rect_rect_collision(moving: &Rect, fixed: &Rect) -> CollisionResult {
    if !moving.intersects(fixed) {
        return CollisionResult::miss();
    }

    let overlap = moving.overlap(fixed);

    let offset = moving.center() - fixed.center();
    let away = |d: f32| if d < 0.0 { -1.0 } else { 1.0 };

    if overlap.x < overlap.y {
        CollisionResult {
            hit: true,
            normal: Vec2::new(away(offset.x), 0.0),
            penetration: overlap.x,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, away(offset.y)),
            penetration: overlap.y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check the top and bottom screen edges
pub fn wall_collision(rect: &Rect, screen_height: f32) -> CollisionResult {
    if rect.min.y < 0.0 {
        return CollisionResult {
            hit: true,
            normal: Vec2::Y,
            penetration: -rect.min.y,
        };
    }

    let bottom = rect.max().y;
    if bottom > screen_height {
        return CollisionResult {
            hit: true,
            normal: Vec2::NEG_Y,
            penetration: bottom - screen_height,
        };
    }

    CollisionResult::miss()
}

/// Side through which a rectangle has completely left the screen, if any
pub fn exit_side(rect: &Rect, screen_width: f32) -> Option<Side> {
    if rect.max().x < 0.0 {
        Some(Side::Left)
    } else if rect.min.x > screen_width {
        Some(Side::Right)
    } else {
        None
    }
}
