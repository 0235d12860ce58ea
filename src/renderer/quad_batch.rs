//! GPU backend: rectangles become clip-space triangles
//!
//! The batch is rebuilt every frame and uploaded as a single vertex buffer
//! (`bytemuck::cast_slice(batch.vertices())`, layout `Vertex::desc()`).

use glam::{IVec2, Vec2};

use super::vertex::{Vertex, colors};
use super::{Colour, DrawingManager};

/// Accumulates quads for one frame
#[derive(Debug, Clone)]
pub struct QuadBatch {
    /// Device-space extent mapped onto clip space [-1, 1]
    screen: Vec2,
    vertices: Vec<Vertex>,
}

impl QuadBatch {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn clear_color(&self) -> [f32; 4] {
        colors::BACKGROUND
    }

    /// Device pixels (origin top-left, y down) to clip space (y up)
    fn to_clip(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.screen.x * 2.0 - 1.0, 1.0 - p.y / self.screen.y * 2.0)
    }
}

impl DrawingManager for QuadBatch {
    fn draw_rectangle(&mut self, top_left: IVec2, width: f32, height: f32, colour: Colour) {
        let min = top_left.as_vec2();
        let a = self.to_clip(min);
        let b = self.to_clip(min + Vec2::new(width, 0.0));
        let c = self.to_clip(min + Vec2::new(0.0, height));
        let d = self.to_clip(min + Vec2::new(width, height));
        let color = colour.rgba();

        // Two triangles
        self.vertices.push(Vertex::new(a.x, a.y, color));
        self.vertices.push(Vertex::new(c.x, c.y, color));
        self.vertices.push(Vertex::new(b.x, b.y, color));

        self.vertices.push(Vertex::new(b.x, b.y, color));
        self.vertices.push(Vertex::new(c.x, c.y, color));
        self.vertices.push(Vertex::new(d.x, d.y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_is_two_triangles() {
        let mut batch = QuadBatch::new(Vec2::new(800.0, 480.0));
        batch.draw_rectangle(IVec2::new(0, 0), 400.0, 240.0, Colour::Hotpink);

        assert_eq!(batch.vertex_count(), 6);
        // Top-left of the screen is clip (-1, 1); the quad ends at the centre
        assert_eq!(batch.vertices()[0].position, [-1.0, 1.0]);
        assert_eq!(batch.vertices()[5].position, [0.0, 0.0]);
        assert!(batch.vertices().iter().all(|v| v.color == Colour::Hotpink.rgba()));
    }

    #[test]
    fn test_text_is_ignored() {
        let mut batch = QuadBatch::new(Vec2::new(800.0, 480.0));
        batch.draw_string("1 : 0", IVec2::ZERO, 24, Colour::White);
        assert_eq!(batch.vertex_count(), 0);

        batch.draw_rectangle(IVec2::new(10, 10), 5.0, 5.0, Colour::Blue);
        batch.clear();
        assert!(batch.vertices().is_empty());
        assert_eq!(batch.clear_color(), colors::BACKGROUND);
    }
}
