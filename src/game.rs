//! Game session: one entity roster driven through update and draw passes

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::InputManager;
use crate::renderer::{DrawVisitor, DrawingManager};
use crate::settings::{Settings, SettingsError};
use crate::sim::{Entity, EntityConstructor, EntityId, EntityManager, GameEvent, Score, UpdateVisitor};

/// Everything a host needs to run the game loop
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    manager: EntityManager,
    constructor: EntityConstructor,
    score: Score,
    rng: Pcg32,
    frame: u64,
}

impl Game {
    /// Validate settings and spawn the ball and both paddles
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut manager = EntityManager::new();
        let constructor = EntityConstructor::spawn(&mut manager, &settings);
        log::info!(
            "New game on {}x{} screen (left: {}, right: {})",
            settings.screen_width,
            settings.screen_height,
            settings.left_control.as_str(),
            settings.right_control.as_str()
        );

        Ok(Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            manager,
            constructor,
            score: Score::new(),
            frame: 0,
        })
    }

    /// Advance every entity by `dt` milliseconds
    pub fn update<I: InputManager + ?Sized>(&mut self, input: &I, dt: f32) -> Vec<GameEvent> {
        let mut visitor = UpdateVisitor::new(input, &self.constructor, &self.settings, &mut self.rng);
        visitor.update_screen(&mut self.manager, dt);
        let events = visitor.into_events();

        for event in &events {
            self.score.apply(event);
            if let GameEvent::Scored(side) = event {
                log::info!("Point to {:?}, score {}", side, self.score.label());
            }
        }
        self.frame += 1;
        events
    }

    /// Issue draw calls for the current state
    pub fn draw<D: DrawingManager + ?Sized>(&mut self, drawing_manager: &mut D) {
        let mut visitor = DrawVisitor::new(drawing_manager, &self.settings.palette);
        visitor.draw_screen(&mut self.manager);
        if self.settings.show_score {
            visitor.draw_score(&self.score, self.settings.screen_width);
        }
    }

    /// One frame: update, then draw
    pub fn frame<I, D>(&mut self, input: &I, dt: f32, drawing_manager: &mut D) -> Vec<GameEvent>
    where
        I: InputManager + ?Sized,
        D: DrawingManager + ?Sized,
    {
        let events = self.update(input, dt);
        self.draw(drawing_manager);
        events
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn manager(&self) -> &EntityManager {
        &self.manager
    }

    pub fn constructor(&self) -> &EntityConstructor {
        &self.constructor
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Completed update passes
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        self.manager.get(id)
    }

    /// Direct access for hosts that reposition entities (and for tests)
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        self.manager.get_mut(id)
    }
}
