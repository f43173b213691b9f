//! Cell surface the background layers draw onto.

use folio_core::Rgb;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// A single cell of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCell {
    pub bg: Rgb,
    pub glyph: char,
    pub fg: Rgb,
}

impl SurfaceCell {
    fn blank(bg: Rgb) -> Self {
        Self {
            bg,
            glyph: ' ',
            fg: bg,
        }
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<SurfaceCell>,
}

impl Surface {
    pub fn new(width: u16, height: u16, bg: Rgb) -> Self {
        Self {
            width,
            height,
            cells: vec![SurfaceCell::blank(bg); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reallocate for new dimensions. All cells are reset to `bg`.
    pub fn resize(&mut self, width: u16, height: u16, bg: Rgb) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, SurfaceCell::blank(bg));
    }

    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(SurfaceCell::blank(bg));
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&SurfaceCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut SurfaceCell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Composite `color` over the cell background. Blank glyphs track the
    /// background so they stay invisible.
    pub fn blend_bg(&mut self, x: u16, y: u16, color: Rgb, alpha: f32) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.bg = cell.bg.blend(color, alpha);
            if cell.glyph == ' ' {
                cell.fg = cell.bg;
            } else {
                cell.fg = cell.fg.blend(color, alpha);
            }
        }
    }

    pub fn put_glyph(&mut self, x: u16, y: u16, glyph: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.glyph = glyph;
            cell.fg = fg;
        }
    }

    /// Convert to styled lines for a `Paragraph`.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        Span::styled(
                            cell.glyph.to_string(),
                            Style::new().fg(cell.fg.into()).bg(cell.bg.into()),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut surface = Surface::new(4, 2, Rgb::BLACK);
        assert!(surface.get(4, 0).is_none());
        assert!(surface.get(0, 2).is_none());
        surface.put_glyph(10, 10, '•', Rgb::WHITE);
        surface.blend_bg(10, 10, Rgb::WHITE, 1.0);
        assert!(surface.get(3, 1).is_some());
    }

    #[test]
    fn test_blend_bg_keeps_blank_glyph_invisible() {
        let mut surface = Surface::new(2, 1, Rgb::BLACK);
        surface.blend_bg(0, 0, Rgb::WHITE, 0.5);
        let cell = surface.get(0, 0).unwrap();
        assert_eq!(cell.bg, Rgb::grey(128));
        assert_eq!(cell.fg, cell.bg);
    }

    #[test]
    fn test_resize_resets_cells() {
        let mut surface = Surface::new(2, 2, Rgb::BLACK);
        surface.put_glyph(1, 1, '•', Rgb::WHITE);
        surface.resize(3, 1, Rgb::grey(5));
        assert_eq!((surface.width(), surface.height()), (3, 1));
        assert_eq!(surface.get(1, 0).unwrap().glyph, ' ');
        assert_eq!(surface.get(2, 0).unwrap().bg, Rgb::grey(5));
    }

    #[test]
    fn test_to_lines_shape() {
        let mut surface = Surface::new(3, 2, Rgb::BLACK);
        surface.put_glyph(2, 1, '●', Rgb::WHITE);
        let lines = surface.to_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans.len(), 3);
        assert_eq!(lines[1].spans[2].content, "●");
    }
}
