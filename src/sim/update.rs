//! Per-frame update pass
//!
//! Walks the entity manager with its cursor and, for each entity in order:
//! resolves paddle collisions, applies the velocity control law, handles the
//! screen bounds and finally integrates position.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{exit_side, rect_rect_collision, wall_collision};
use super::entity::{Entity, EntityConstructor, EntityKind, Side};
use super::manager::{EntityId, EntityManager};
use super::score::GameEvent;
use crate::option::Visit;
use crate::platform::{InputManager, Touch};
use crate::settings::{PaddleControl, Settings};

/// Updates every entity for one frame and collects the resulting events
pub struct UpdateVisitor<'a, I: InputManager + ?Sized> {
    input: &'a I,
    constructor: &'a EntityConstructor,
    settings: &'a Settings,
    rng: &'a mut Pcg32,
    events: Vec<GameEvent>,
}

impl<'a, I: InputManager + ?Sized> UpdateVisitor<'a, I> {
    pub fn new(
        input: &'a I,
        constructor: &'a EntityConstructor,
        settings: &'a Settings,
        rng: &'a mut Pcg32,
    ) -> Self {
        Self {
            input,
            constructor,
            settings,
            rng,
            events: Vec::new(),
        }
    }

    /// Update all entities in insertion order
    pub fn update_screen(&mut self, manager: &mut EntityManager, dt: f32) {
        manager.reset();
        while manager.get_next().is_some() {
            let id = manager.current_id();
            self.update_entity(manager, id, dt);
        }
    }

    /// Update one entity against the current state of the others
    pub fn update_entity(&mut self, manager: &mut EntityManager, id: EntityId, dt: f32) {
        let ball = *manager.get(self.constructor.ball);
        let left = *manager.get(self.constructor.paddle_left);
        let right = *manager.get(self.constructor.paddle_right);
        let touch = self.input.touch();

        let entity = manager.get_mut(id);
        self.check_collision(entity, &left, &right);
        self.change_velocity(entity, touch, &ball);
        self.check_out_of_bounds(entity);
        entity.integrate(dt);
        if let EntityKind::Paddle(_) = entity.kind {
            self.clamp_paddle(entity);
        }
    }

    /// Events raised so far, in the order they happened
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    /// Ball bounces elastically off either paddle; paddles are unaffected
    fn check_collision(&mut self, entity: &mut Entity, left: &Entity, right: &Entity) {
        if entity.kind != EntityKind::Ball {
            return;
        }

        for paddle in [left, right] {
            let EntityKind::Paddle(side) = paddle.kind else {
                continue;
            };
            let result = rect_rect_collision(&entity.rect(), &paddle.rect());
            if result.resolve(&mut entity.pos, &mut entity.vel) {
                log::debug!("Ball hit {:?} paddle at {:?}", side, entity.pos);
                self.events.push(GameEvent::BallHitPaddle(side));
            }
        }
    }

    fn change_velocity(&self, entity: &mut Entity, touch: Option<Touch>, ball: &Entity) {
        let EntityKind::Paddle(side) = entity.kind else {
            return;
        };

        entity.vel.x = 0.0;
        entity.vel.y = match self.settings.control(side) {
            PaddleControl::Tracking => ball.vel.y - self.settings.tracking_offset,
            PaddleControl::Touch => touch.visit(|| self.settings.drift_speed, |_| 0.0),
        };
    }

    fn check_out_of_bounds(&mut self, entity: &mut Entity) {
        match entity.kind {
            EntityKind::Ball => self.ball_bounds(entity),
            EntityKind::Paddle(_) => self.clamp_paddle(entity),
        }
    }

    fn ball_bounds(&mut self, ball: &mut Entity) {
        if let Some(exited) = exit_side(&ball.rect(), self.settings.screen_width) {
            let scorer = exited.opposite();
            self.events.push(GameEvent::Scored(scorer));
            self.serve(ball, exited);
            return;
        }

        let result = wall_collision(&ball.rect(), self.settings.screen_height);
        if result.resolve(&mut ball.pos, &mut ball.vel) {
            log::debug!("Ball hit wall at {:?}", ball.pos);
            self.events.push(GameEvent::BallHitWall);
        }
    }

    /// Reposition a paddle that has left the screen; velocity is left to the control law
    fn clamp_paddle(&self, paddle: &mut Entity) {
        let max_y = (self.settings.screen_height - paddle.height).max(0.0);
        paddle.pos.y = paddle.pos.y.clamp(0.0, max_y);
    }

    /// Re-centre the ball and send it toward the side that conceded
    fn serve(&mut self, ball: &mut Entity, toward: Side) {
        let serve = self.settings.serve_velocity.abs();
        let vertical = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        ball.pos = self.settings.screen_size() / 2.0 - ball.size() / 2.0;
        ball.vel = Vec2::new(toward.direction() * serve.x, vertical * serve.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct Fixture {
        settings: Settings,
        manager: EntityManager,
        roster: EntityConstructor,
        rng: Pcg32,
    }

    impl Fixture {
        fn new() -> Self {
            let settings = Settings::default();
            let mut manager = EntityManager::new();
            let roster = EntityConstructor::spawn(&mut manager, &settings);
            Self {
                settings,
                manager,
                roster,
                rng: Pcg32::seed_from_u64(7),
            }
        }

        fn run(&mut self, touch: Option<Touch>, dt: f32) -> Vec<GameEvent> {
            let mut visitor = UpdateVisitor::new(&touch, &self.roster, &self.settings, &mut self.rng);
            visitor.update_screen(&mut self.manager, dt);
            visitor.into_events()
        }

        fn ball(&mut self) -> &mut Entity {
            self.manager.get_mut(self.roster.ball)
        }
    }

    #[test]
    fn test_free_ball_integrates() {
        let mut fx = Fixture::new();
        fx.ball().pos = Vec2::new(300.0, 200.0);
        fx.ball().vel = Vec2::new(0.2, -0.1);

        let events = fx.run(None, 10.0);

        assert!(events.is_empty());
        let ball = fx.ball();
        assert!((ball.pos.x - 302.0).abs() < 1e-4);
        assert!((ball.pos.y - 199.0).abs() < 1e-4);
    }

    #[test]
    fn test_touch_paddle_control_law() {
        let mut fx = Fixture::new();
        let right = fx.roster.paddle_right;

        fx.run(Some(Touch { pos: Vec2::ZERO }), 1.0);
        assert_eq!(fx.manager.get(right).vel.y, 0.0);

        fx.run(None, 1.0);
        assert_eq!(fx.manager.get(right).vel.y, 0.30);
    }

    #[test]
    fn test_tracking_paddle_follows_ball_velocity() {
        let mut fx = Fixture::new();
        fx.ball().vel = Vec2::new(0.2, 0.1);

        fx.run(None, 1.0);
        let left = fx.manager.get(fx.roster.paddle_left);
        assert!((left.vel.y - (0.1 - 0.015)).abs() < 1e-6);
        assert_eq!(left.vel.x, 0.0);
    }

    #[test]
    fn test_ball_reflects_off_left_paddle() {
        let mut fx = Fixture::new();
        let paddle = *fx.manager.get(fx.roster.paddle_left);
        // Overlap the paddle's right face by 3px, moving left
        fx.ball().pos = Vec2::new(paddle.rect().max().x - 3.0, paddle.pos.y + 30.0);
        fx.ball().vel = Vec2::new(-0.25, 0.0);

        let events = fx.run(None, 1.0);

        assert!(events.contains(&GameEvent::BallHitPaddle(Side::Left)));
        let ball = *fx.ball();
        assert!((ball.vel.x - 0.25).abs() < 1e-6);
        // Pushed out by 3px, then integrated one step to the right
        assert!((ball.pos.x - (paddle.rect().max().x + 0.25)).abs() < 1e-4);
    }

    #[test]
    fn test_ball_reflects_off_bottom_wall() {
        let mut fx = Fixture::new();
        let bottom = fx.settings.screen_height;
        fx.ball().pos = Vec2::new(400.0, bottom - fx.settings.ball_size + 2.0);
        fx.ball().vel = Vec2::new(0.1, 0.2);

        let events = fx.run(None, 1.0);

        assert_eq!(events, vec![GameEvent::BallHitWall]);
        let ball = *fx.ball();
        assert!((ball.vel.y + 0.2).abs() < 1e-6);
        assert!(ball.rect().max().y <= bottom);
    }

    #[test]
    fn test_ball_exit_scores_and_reserves() {
        let mut fx = Fixture::new();
        fx.ball().pos = Vec2::new(-40.0, 200.0);
        fx.ball().vel = Vec2::new(-0.25, 0.15);

        let events = fx.run(None, 0.0);

        assert_eq!(events, vec![GameEvent::Scored(Side::Right)]);
        let ball = *fx.ball();
        assert_eq!(ball.center(), fx.settings.screen_size() / 2.0);
        // Served toward the side that conceded
        assert!(ball.vel.x < 0.0);
        assert!((ball.vel.y.abs() - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_parked_paddle_keeps_drift_velocity() {
        let mut fx = Fixture::new();
        let right = fx.roster.paddle_right;
        let max_y = fx.settings.screen_height - fx.settings.paddle_height;
        fx.manager.get_mut(right).pos.y = max_y - 1.0;

        // Drifts into the bottom edge and stays parked there
        for _ in 0..200 {
            fx.run(None, 16.0);
            let paddle = fx.manager.get(right);
            assert_eq!(paddle.vel.y, 0.30);
            assert!(paddle.pos.y <= max_y);
        }
        assert_eq!(fx.manager.get(right).pos.y, max_y);
    }

    #[test]
    fn test_paddle_above_screen_is_repositioned() {
        let mut fx = Fixture::new();
        let left = fx.roster.paddle_left;
        fx.manager.get_mut(left).pos.y = -25.0;
        fx.ball().vel = Vec2::new(0.2, -0.3);

        fx.run(None, 10.0);

        let paddle = fx.manager.get(left);
        assert!((paddle.vel.y - (-0.3 - 0.015)).abs() < 1e-6);
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_update_entity_only_touches_target() {
        let mut fx = Fixture::new();
        let before = *fx.manager.get(fx.roster.paddle_right);
        let touch: Option<Touch> = None;

        let mut visitor = UpdateVisitor::new(&touch, &fx.roster, &fx.settings, &mut fx.rng);
        visitor.update_entity(&mut fx.manager, fx.roster.ball, 5.0);
        assert!(visitor.events().is_empty());

        assert_eq!(*fx.manager.get(fx.roster.paddle_right), before);
    }
}
