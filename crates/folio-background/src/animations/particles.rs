//! Particle field (stateful).
//!
//! Particles live in virtual-pixel space. Each frame they drift, ease toward
//! an offset proportional to the pointer position, fade in once clear of the
//! container edges and fade out as they approach one. A particle that leaves
//! the canvas is replaced in place by a freshly spawned one, so the field
//! always holds exactly `quantity` particles once seeded.

use folio_core::{CellMetrics, ParticleSettings};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::chars::PARTICLE_CHARS;
use crate::surface::Surface;

/// Distance from an edge, in pixels, over which particles fade.
const EDGE_FADE_PX: f32 = 20.0;

/// Alpha gained per frame while fading in.
const FADE_IN_STEP: f32 = 0.02;

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in canvas pixels, before the pointer offset.
    pub x: f32,
    pub y: f32,
    /// Offset toward the pointer, eased every frame.
    pub translate_x: f32,
    pub translate_y: f32,
    /// Radius in pixels; picks the glyph.
    pub size: f32,
    /// Current opacity (0.0 - 1.0).
    pub alpha: f32,
    /// Opacity the particle fades in to, away from the edges.
    pub target_alpha: f32,
    /// Own drift per frame, added to the field-wide `vx`/`vy`.
    pub dx: f32,
    pub dy: f32,
    /// Pointer attraction strength (0.1 - 4.1).
    pub magnetism: f32,
}

impl Particle {
    /// Distance from the nearest canvas edge, accounting for size.
    fn closest_edge(&self, width: f32, height: f32) -> f32 {
        let x = self.x + self.translate_x;
        let y = self.y + self.translate_y;
        [
            x - self.size,
            width - x - self.size,
            y - self.size,
            height - y - self.size,
        ]
        .into_iter()
        .fold(f32::INFINITY, f32::min)
    }

    fn is_outside(&self, width: f32, height: f32) -> bool {
        self.x < -self.size
            || self.x > width + self.size
            || self.y < -self.size
            || self.y > height + self.size
    }

    fn glyph(&self) -> char {
        let idx = (self.size.max(0.0) as usize).min(PARTICLE_CHARS.len() - 1);
        PARTICLE_CHARS[idx]
    }
}

/// Pointer position relative to the canvas centre.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Pixels right of (positive) or left of the canvas centre.
    pub x: f32,
    /// Pixels below (positive) or above the canvas centre.
    pub y: f32,
}

/// The particle simulation.
#[derive(Debug)]
pub struct ParticleField {
    settings: ParticleSettings,
    /// Live particles; empty until the first resize.
    particles: Vec<Particle>,
    /// Canvas size in pixels.
    width: f32,
    height: f32,
    /// Last pointer position seen inside the canvas.
    pointer: Pointer,
    /// Source for spawn positions, sizes and drift.
    rng: StdRng,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings, seed: u64) -> Self {
        Self {
            settings,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pointer: Pointer::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Canvas size in virtual pixels.
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Adopt a new canvas size and respawn the whole field.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.respawn();
    }

    /// Respawn the whole field at the current size.
    pub fn refresh(&mut self) {
        self.respawn();
    }

    fn respawn(&mut self) {
        self.particles.clear();
        for _ in 0..self.settings.quantity {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        let x = (rng.random::<f32>() * self.width).floor();
        let y = (rng.random::<f32>() * self.height).floor();
        let size = (rng.random::<f32>() * 2.0).floor() + self.settings.size;
        let target_alpha = round_to(rng.random::<f32>() * 0.6 + 0.1, 1);
        let dx = (rng.random::<f32>() - 0.5) * 0.1;
        let dy = (rng.random::<f32>() - 0.5) * 0.1;
        let magnetism = 0.1 + rng.random::<f32>() * 4.0;
        Particle {
            x,
            y,
            translate_x: 0.0,
            translate_y: 0.0,
            size,
            alpha: 0.0,
            target_alpha,
            dx,
            dy,
            magnetism,
        }
    }

    /// Track the pointer. `left`/`top` is the canvas origin in the same
    /// coordinate space as `x`/`y`. Positions outside the canvas are ignored
    /// and the last inside position is kept.
    pub fn pointer_moved(&mut self, x: f32, y: f32, left: f32, top: f32) {
        let (w, h) = (self.width, self.height);
        let rel_x = x - left - w / 2.0;
        let rel_y = y - top - h / 2.0;
        let inside = rel_x < w / 2.0 && rel_x > -w / 2.0 && rel_y < h / 2.0 && rel_y > -h / 2.0;
        if inside {
            self.pointer = Pointer { x: rel_x, y: rel_y };
        }
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;
        let ParticleSettings {
            staticity,
            ease,
            vx,
            vy,
            ..
        } = self.settings;

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];

            let edge = remap_edge(p.closest_edge(w, h));
            if edge > 1.0 {
                p.alpha = (p.alpha + FADE_IN_STEP).min(p.target_alpha);
            } else {
                p.alpha = p.target_alpha * edge;
            }

            p.x += p.dx + vx;
            p.y += p.dy + vy;
            p.translate_x += (pointer.x / (staticity / p.magnetism) - p.translate_x) / ease;
            p.translate_y += (pointer.y / (staticity / p.magnetism) - p.translate_y) / ease;

            if p.is_outside(w, h) {
                self.particles[i] = self.spawn();
            }
        }
    }

    /// Draw visible particles, letting the brightest win a shared cell.
    pub fn draw(&self, surface: &mut Surface, metrics: &CellMetrics) {
        let mut drawn: Vec<f32> = vec![0.0; surface.width() as usize * surface.height() as usize];
        let stride = surface.width() as usize;

        for p in &self.particles {
            if p.alpha <= 0.0 {
                continue;
            }
            let Some((cx, cy)) = metrics.px_to_cell(p.x + p.translate_x, p.y + p.translate_y)
            else {
                continue;
            };
            let Some(cell) = surface.get_mut(cx, cy) else {
                continue;
            };
            let slot = &mut drawn[cy as usize * stride + cx as usize];
            if p.alpha <= *slot {
                continue;
            }
            *slot = p.alpha;
            cell.glyph = p.glyph();
            cell.fg = cell.bg.blend(self.settings.color, p.alpha);
        }
    }
}

/// Map a distance in `[0, EDGE_FADE_PX]` onto `[0, 1]`, clamped below at 0
/// and rounded to two decimals.
fn remap_edge(distance: f32) -> f32 {
    round_to((distance / EDGE_FADE_PX).max(0.0), 2)
}

fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (value * factor).round() / factor
}
