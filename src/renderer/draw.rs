//! Per-frame draw pass

use glam::IVec2;

use super::DrawingManager;
use crate::consts::SCORE_TEXT_SIZE;
use crate::settings::Palette;
use crate::sim::{Entity, EntityManager, Score};

/// Issues one rectangle per entity through a drawing manager
pub struct DrawVisitor<'a, D: DrawingManager + ?Sized> {
    drawing_manager: &'a mut D,
    palette: &'a Palette,
}

impl<'a, D: DrawingManager + ?Sized> DrawVisitor<'a, D> {
    pub fn new(drawing_manager: &'a mut D, palette: &'a Palette) -> Self {
        Self {
            drawing_manager,
            palette,
        }
    }

    /// Draw every entity in insertion order
    pub fn draw_screen(&mut self, manager: &mut EntityManager) {
        manager.reset();
        while let Some(entity) = manager.get_next() {
            self.draw_entity(entity);
        }
    }

    pub fn draw_entity(&mut self, entity: &Entity) {
        self.drawing_manager.draw_rectangle(
            entity.device_top_left(),
            entity.width,
            entity.height,
            self.palette.colour_for(entity.kind),
        );
    }

    /// Scoreboard centred at the top of the screen
    pub fn draw_score(&mut self, score: &Score, screen_width: f32) {
        let label = score.label();
        // Rough centring: glyphs are about half as wide as they are tall
        let text_width = label.len() as f32 * SCORE_TEXT_SIZE as f32 / 2.0;
        let x = ((screen_width - text_width) / 2.0).round() as i32;
        self.drawing_manager.draw_string(
            &label,
            IVec2::new(x.max(0), 0),
            SCORE_TEXT_SIZE,
            self.palette.score,
        );
    }
}
