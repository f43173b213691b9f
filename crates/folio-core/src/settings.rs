//! Settings for the background layers.
//!
//! `Default` gives the values the page layout uses. The bare component
//! defaults, which differ for particles and noise, are available through
//! `component_default()`.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Static line grid drawn under everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub enabled: bool,
    /// Spacing between grid lines, in virtual pixels.
    pub size_px: f32,
    pub color: Rgb,
    /// Layer opacity (0.0 - 1.0).
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            size_px: 40.0,
            color: Rgb::grey(0x11),
            opacity: 0.5,
        }
    }
}

/// Drifting, pointer-attracted particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub enabled: bool,
    /// Number of live particles.
    pub quantity: usize,
    /// Resistance to pointer attraction. Larger is stiffer.
    pub staticity: f32,
    /// Divisor applied to each frame's approach toward the pointer offset.
    pub ease: f32,
    /// Base particle radius; each particle adds 0 or 1 on top.
    pub size: f32,
    pub color: Rgb,
    /// Extra drift applied to every particle each frame.
    pub vx: f32,
    pub vy: f32,
    /// Toggling this respawns the whole field.
    pub refresh: bool,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            quantity: 150,
            ease: 80.0,
            refresh: true,
            ..Self::component_default()
        }
    }
}

impl ParticleSettings {
    pub fn component_default() -> Self {
        Self {
            enabled: true,
            quantity: 100,
            staticity: 50.0,
            ease: 50.0,
            size: 0.4,
            color: Rgb::WHITE,
            vx: 0.0,
            vy: 0.0,
            refresh: false,
        }
    }
}

/// Film-grain noise tile, regenerated every few frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    pub enabled: bool,
    /// Side length of the square noise tile, in cells.
    pub pattern_size: usize,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Regenerate the tile every this many frames.
    pub refresh_interval: u32,
    /// Grain alpha out of 255.
    pub alpha: u8,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            pattern_size: 75,
            refresh_interval: 4,
            ..Self::component_default()
        }
    }
}

impl NoiseSettings {
    pub fn component_default() -> Self {
        Self {
            enabled: true,
            pattern_size: 250,
            scale_x: 1.0,
            scale_y: 1.0,
            refresh_interval: 2,
            alpha: 15,
        }
    }
}

/// All three background layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    pub grid: GridSettings,
    pub particles: ParticleSettings,
    pub noise: NoiseSettings,
}
