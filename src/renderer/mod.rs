//! Rendering module
//!
//! The draw pass talks only to the `DrawingManager` trait. Backends translate
//! the abstract colour and float geometry into their own draw calls:
//! - `DrawList`: records commands for hosts that replay them
//! - `QuadBatch`: GPU triangles (`Vertex`) for a wgpu pipeline
//! - `AsciiCanvas`: character grid for the terminal

pub mod ascii;
pub mod draw;
pub mod quad_batch;
pub mod vertex;

pub use ascii::AsciiCanvas;
pub use draw::DrawVisitor;
pub use quad_batch::QuadBatch;
pub use vertex::Vertex;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Abstract colours understood by every backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    White,
    Black,
    Blue,
    Hotpink,
}

impl Colour {
    /// Linear RGBA for GPU backends
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Colour::White => vertex::colors::WHITE,
            Colour::Black => vertex::colors::BLACK,
            Colour::Blue => vertex::colors::BLUE,
            Colour::Hotpink => vertex::colors::HOTPINK,
        }
    }
}

/// Backend boundary for the draw pass
pub trait DrawingManager {
    fn draw_rectangle(&mut self, top_left: IVec2, width: f32, height: f32, colour: Colour);

    /// Text is optional; backends without a font ignore it
    fn draw_string(&mut self, text: &str, top_left: IVec2, size: u32, colour: Colour) {
        let _ = (top_left, size, colour);
        log::trace!("draw_string ignored by backend: {:?}", text);
    }
}

/// A recorded draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rectangle {
        top_left: IVec2,
        width: f32,
        height: f32,
        colour: Colour,
    },
    Text {
        text: String,
        top_left: IVec2,
        size: u32,
        colour: Colour,
    },
}

/// Records draw requests in call order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rectangle { .. }))
    }
}

impl DrawingManager for DrawList {
    fn draw_rectangle(&mut self, top_left: IVec2, width: f32, height: f32, colour: Colour) {
        self.commands.push(DrawCommand::Rectangle {
            top_left,
            width,
            height,
            colour,
        });
    }

    fn draw_string(&mut self, text: &str, top_left: IVec2, size: u32, colour: Colour) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            top_left,
            size,
            colour,
        });
    }
}
