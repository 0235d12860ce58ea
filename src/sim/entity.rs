//! Game entities and the fixed roster that names them

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::manager::{EntityId, EntityManager};
use super::rect::Rect;
use crate::settings::Settings;

/// Which half of the court a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing toward this side of the screen
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Closed set of entity kinds; visitors dispatch on this with `match`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ball,
    Paddle(Side),
}

/// A ball or paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner (device pixels)
    pub pos: Vec2,
    /// Pixels per millisecond
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Entity {
    pub fn ball(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            kind: EntityKind::Ball,
            pos,
            vel,
            width: size,
            height: size,
        }
    }

    pub fn paddle(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            kind: EntityKind::Paddle(side),
            pos,
            vel: Vec2::ZERO,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size())
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Top-left corner rounded to integer device coordinates
    pub fn device_top_left(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }

    /// One explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Handles to the one ball and two paddles that exist for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityConstructor {
    pub ball: EntityId,
    pub paddle_left: EntityId,
    pub paddle_right: EntityId,
}

impl EntityConstructor {
    /// Spawn ball, left paddle and right paddle, in that order
    pub fn spawn(manager: &mut EntityManager, settings: &Settings) -> Self {
        let screen = settings.screen_size();
        let ball_pos = screen / 2.0 - Vec2::splat(settings.ball_size / 2.0);
        let ball = manager.spawn(Entity::ball(ball_pos, settings.serve_velocity, settings.ball_size));

        let paddle_y = (screen.y - settings.paddle_height) / 2.0;
        let paddle_left = manager.spawn(Entity::paddle(
            Side::Left,
            Vec2::new(settings.paddle_margin, paddle_y),
            settings.paddle_width,
            settings.paddle_height,
        ));
        let paddle_right = manager.spawn(Entity::paddle(
            Side::Right,
            Vec2::new(screen.x - settings.paddle_margin - settings.paddle_width, paddle_y),
            settings.paddle_width,
            settings.paddle_height,
        ));

        Self {
            ball,
            paddle_left,
            paddle_right,
        }
    }

    pub fn paddle(&self, side: Side) -> EntityId {
        match side {
            Side::Left => self.paddle_left,
            Side::Right => self.paddle_right,
        }
    }
}
