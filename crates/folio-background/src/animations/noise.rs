//! Film-grain noise (stateful).

use folio_core::{NoiseSettings, Rgb};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::surface::Surface;

/// A square tile of random grey values, tiled across the surface and
/// regenerated every `refresh_interval` frames.
#[derive(Debug)]
pub struct NoiseField {
    settings: NoiseSettings,
    /// `pattern_size` squared grey values, row-major.
    tile: Vec<u8>,
    /// Frames ticked so far; the tile is regenerated on multiples of the
    /// refresh interval.
    frame: u64,
    rng: StdRng,
}

impl NoiseField {
    pub fn new(settings: NoiseSettings, seed: u64) -> Self {
        let side = settings.pattern_size;
        Self {
            settings,
            tile: vec![0; side * side],
            frame: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tile(&self) -> &[u8] {
        &self.tile
    }

    /// Advance one frame. Returns `true` when the tile was regenerated.
    pub fn tick(&mut self) -> bool {
        let interval = u64::from(self.settings.refresh_interval.max(1));
        let regenerate = self.frame % interval == 0;
        if regenerate {
            self.regenerate();
        }
        self.frame += 1;
        regenerate
    }

    fn regenerate(&mut self) {
        self.rng.fill(self.tile.as_mut_slice());
    }

    /// Grey value for surface cell (`x`, `y`).
    pub fn sample(&self, x: u16, y: u16) -> u8 {
        let side = self.settings.pattern_size;
        if side == 0 {
            return 0;
        }
        let tx = (x as f32 / self.settings.scale_x).floor() as usize % side;
        let ty = (y as f32 / self.settings.scale_y).floor() as usize % side;
        self.tile[ty * side + tx]
    }

    /// Blend the tiled grain over the surface background.
    pub fn draw(&self, surface: &mut Surface) {
        let alpha = f32::from(self.settings.alpha) / 255.0;
        if alpha <= 0.0 {
            return;
        }
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                surface.blend_bg(x, y, Rgb::grey(self.sample(x, y)), alpha);
            }
        }
    }
}
