//! Terminal backend: rasterises draw calls into a character grid

use glam::{IVec2, Vec2};

use super::{Colour, DrawingManager};

/// Character grid covering the whole screen
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    /// Device pixels per cell
    cell: Vec2,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(columns: usize, rows: usize, screen: Vec2) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            cell: screen / Vec2::new(columns as f32, rows as f32),
            cells: vec![' '; columns * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn glyph(colour: Colour) -> char {
        match colour {
            Colour::White => '#',
            Colour::Black => ' ',
            Colour::Blue => '=',
            Colour::Hotpink => '@',
        }
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Option<char> {
        (column < self.columns && row < self.rows).then(|| self.cells[row * self.columns + column])
    }

    /// Grid as text, one line per row
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_cell(&self, p: Vec2) -> Vec2 {
        p / self.cell
    }

    fn put(&mut self, column: i64, row: i64, ch: char) {
        if column < 0 || row < 0 {
            return;
        }
        let (column, row) = (column as usize, row as usize);
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = ch;
        }
    }
}

impl DrawingManager for AsciiCanvas {
    fn draw_rectangle(&mut self, top_left: IVec2, width: f32, height: f32, colour: Colour) {
        let min = top_left.as_vec2();
        let start = self.to_cell(min);
        let end = self.to_cell(min + Vec2::new(width, height));
        let ch = Self::glyph(colour);

        // Anything visible covers at least one cell
        let (c0, r0) = (start.x.floor() as i64, start.y.floor() as i64);
        let c1 = (end.x.ceil() as i64).max(c0 + 1).min(self.columns as i64);
        let r1 = (end.y.ceil() as i64).max(r0 + 1).min(self.rows as i64);

        for row in r0.max(0)..r1 {
            for column in c0.max(0)..c1 {
                self.put(column, row, ch);
            }
        }
    }

    fn draw_string(&mut self, text: &str, top_left: IVec2, _size: u32, _colour: Colour) {
        let cell = self.to_cell(top_left.as_vec2()).floor();
        for (i, ch) in text.chars().enumerate() {
            self.put(cell.x as i64 + i as i64, cell.y as i64, ch);
        }
    }
}
