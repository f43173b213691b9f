//! Static line grid (stateless).

use folio_core::{CellMetrics, GridSettings};

use crate::chars::{GRID_CROSS, GRID_HORIZONTAL, GRID_VERTICAL};
use crate::surface::Surface;

/// Line grid spaced `size_px` virtual pixels apart.
#[derive(Debug, Clone)]
pub struct GridOverlay {
    settings: GridSettings,
}

impl GridOverlay {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Draw grid lines over the surface background.
    pub fn draw(&self, surface: &mut Surface, metrics: &CellMetrics) {
        let size = self.settings.size_px;
        if size <= 0.0 || self.settings.opacity <= 0.0 {
            return;
        }

        let columns: Vec<bool> = (0..surface.width())
            .map(|x| line_in_span(x as f32 * metrics.width_px, metrics.width_px, size))
            .collect();

        for y in 0..surface.height() {
            let horizontal = line_in_span(y as f32 * metrics.height_px, metrics.height_px, size);
            for (x, &vertical) in columns.iter().enumerate() {
                let glyph = match (vertical, horizontal) {
                    (true, true) => GRID_CROSS,
                    (true, false) => GRID_VERTICAL,
                    (false, true) => GRID_HORIZONTAL,
                    (false, false) => continue,
                };
                let x = x as u16;
                if let Some(cell) = surface.get_mut(x, y) {
                    cell.glyph = glyph;
                    cell.fg = cell.bg.blend(self.settings.color, self.settings.opacity);
                }
            }
        }
    }
}

/// Whether the pixel span `[start, start + len)` contains a multiple of `size`.
fn line_in_span(start: f32, len: f32, size: f32) -> bool {
    let next_line = (start / size).ceil() * size;
    next_line < start + len
}
