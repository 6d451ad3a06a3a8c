use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, POSITION_MARGIN, POSITION_STEP};

/// Glyph shape, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Star];

    /// Select a shape by character code (`code mod 4`).
    pub fn from_code(code: u32) -> Self {
        Self::ALL[(code % Self::ALL.len() as u32) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Star => "star",
        }
    }

    /// Terminal symbol for the shape.
    pub fn symbol(&self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::Square => '■',
            Shape::Triangle => '▲',
            Shape::Star => '★',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Glyph color, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Amber,
    Purple,
    Green,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Amber, Color::Purple, Color::Green];

    /// Select a color by character code (`code mod 4`).
    pub fn from_code(code: u32) -> Self {
        Self::ALL[(code % Self::ALL.len() as u32) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Amber => "amber",
            Color::Purple => "purple",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a character code onto one of the three grid positions (10, 43, 76).
pub fn position_from_code(code: u32) -> u8 {
    (code % GRID_SIZE as u32) as u8 * POSITION_STEP + POSITION_MARGIN
}

/// One shape + color + position in a pattern. Positions are percent of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphDescriptor {
    pub shape: Shape,
    pub color: Color,
    pub x: u8,
    pub y: u8,
}

impl GlyphDescriptor {
    /// Grid cell as `(row, col)`.
    pub fn cell(&self) -> (usize, usize) {
        (grid_index(self.y), grid_index(self.x))
    }
}

fn grid_index(pos: u8) -> usize {
    ((pos.saturating_sub(POSITION_MARGIN) / POSITION_STEP) as usize).min(GRID_SIZE - 1)
}

/// Ordered glyphs derived from an address. Index `i` comes from key offset `3 * i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<GlyphDescriptor>);

impl Pattern {
    pub fn new(glyphs: Vec<GlyphDescriptor>) -> Self {
        Self(glyphs)
    }

    pub fn glyphs(&self) -> &[GlyphDescriptor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlyphDescriptor> {
        self.0.iter()
    }

    /// Place glyphs on the 3x3 grid. Later glyphs cover earlier ones in the same cell.
    pub fn grid(&self) -> [[Option<GlyphDescriptor>; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[None; GRID_SIZE]; GRID_SIZE];
        for glyph in &self.0 {
            let (row, col) = glyph.cell();
            grid[row][col] = Some(*glyph);
        }
        grid
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a GlyphDescriptor;
    type IntoIter = std::slice::Iter<'a, GlyphDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(shape: Shape, color: Color, x: u8, y: u8) -> GlyphDescriptor {
        GlyphDescriptor { shape, color, x, y }
    }

    #[test]
    fn test_shape_from_code_order() {
        assert_eq!(Shape::from_code(0), Shape::Circle);
        assert_eq!(Shape::from_code(1), Shape::Square);
        assert_eq!(Shape::from_code(2), Shape::Triangle);
        assert_eq!(Shape::from_code(3), Shape::Star);
        assert_eq!(Shape::from_code('b' as u32), Shape::Triangle);
    }

    #[test]
    fn test_color_from_code_order() {
        assert_eq!(Color::from_code(4), Color::Blue);
        assert_eq!(Color::from_code(5), Color::Amber);
        assert_eq!(Color::from_code(6), Color::Purple);
        assert_eq!(Color::from_code(7), Color::Green);
    }

    #[test]
    fn test_position_from_code() {
        assert_eq!(position_from_code(0), 10);
        assert_eq!(position_from_code(1), 43);
        assert_eq!(position_from_code(2), 76);
        assert_eq!(position_from_code(3), 10);
    }

    #[test]
    fn test_cell_mapping() {
        assert_eq!(glyph(Shape::Star, Color::Blue, 10, 76).cell(), (2, 0));
        assert_eq!(glyph(Shape::Star, Color::Blue, 43, 10).cell(), (0, 1));
    }

    #[test]
    fn test_grid_later_glyph_wins() {
        let pattern = Pattern::new(vec![
            glyph(Shape::Circle, Color::Blue, 10, 10),
            glyph(Shape::Star, Color::Green, 76, 43),
            glyph(Shape::Square, Color::Amber, 10, 10),
        ]);
        let grid = pattern.grid();
        assert_eq!(grid[0][0].map(|g| g.shape), Some(Shape::Square));
        assert_eq!(grid[1][2].map(|g| g.shape), Some(Shape::Star));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_pattern_serializes_as_list() {
        let pattern = Pattern::new(vec![glyph(Shape::Triangle, Color::Purple, 43, 76)]);
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "shape": "triangle", "color": "purple", "x": 43, "y": 76 }])
        );
    }
}
