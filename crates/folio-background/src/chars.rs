//! Character constants for background layers.

/// Grid glyph for a cell crossed by a vertical line only.
pub const GRID_VERTICAL: char = '│';

/// Grid glyph for a cell crossed by a horizontal line only.
pub const GRID_HORIZONTAL: char = '─';

/// Grid glyph where a vertical and a horizontal line meet.
pub const GRID_CROSS: char = '┼';

/// Particle glyphs, smallest to largest.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];
