//! Mapping between terminal cells and virtual pixels.

use serde::{Deserialize, Serialize};

/// How many virtual pixels a single terminal cell covers.
///
/// Pixel-valued settings (grid spacing, header padding, particle positions)
/// are expressed in virtual pixels and converted through these metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub width_px: f32,
    pub height_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Number of columns spanned by a horizontal pixel length.
    pub fn px_to_cols(&self, px: f32) -> u16 {
        (px / self.width_px).round().max(0.0) as u16
    }

    /// Number of rows spanned by a vertical pixel length.
    pub fn px_to_rows(&self, px: f32) -> u16 {
        (px / self.height_px).round().max(0.0) as u16
    }

    /// Pixel size of a `cols` x `rows` area.
    pub fn area_px(&self, cols: u16, rows: u16) -> (f32, f32) {
        (cols as f32 * self.width_px, rows as f32 * self.height_px)
    }

    /// Pixel coordinate of the centre of cell (`col`, `row`).
    pub fn cell_center_px(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.width_px,
            (row as f32 + 0.5) * self.height_px,
        )
    }

    /// Cell containing the pixel coordinate, or `None` when it is negative.
    pub fn px_to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.width_px).floor();
        let row = (y / self.height_px).floor();
        if col > u16::MAX as f32 || row > u16::MAX as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}
