//! Background state management.

use folio_core::{BackgroundSettings, CellMetrics, Rgb};
use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::animations::{grid::GridOverlay, noise::NoiseField, particles::ParticleField};
use crate::surface::Surface;

/// Page background colour underneath every layer.
pub const PAGE_BACKGROUND: Rgb = Rgb::BLACK;

/// Background animation state.
#[derive(Debug)]
pub struct BackgroundState {
    grid: GridOverlay,
    particles: ParticleField,
    noise: NoiseField,
    /// Cell surface reused across frames.
    surface: Surface,
    metrics: CellMetrics,
    /// Area the layers were last sized to.
    last_area: Rect,
    /// Whether the background is drawn at all.
    enabled: bool,
    /// Last seen value of the particle `refresh` setting.
    particle_refresh: bool,
}

impl BackgroundState {
    /// Create a new background state. `seed` drives both random layers.
    pub fn new(settings: BackgroundSettings, metrics: CellMetrics, seed: u64) -> Self {
        let particle_refresh = settings.particles.refresh;
        Self {
            grid: GridOverlay::new(settings.grid),
            particles: ParticleField::new(settings.particles, seed),
            noise: NoiseField::new(settings.noise, seed.wrapping_add(1)),
            surface: Surface::new(0, 0, PAGE_BACKGROUND),
            metrics,
            last_area: Rect::default(),
            enabled: true,
            particle_refresh,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Respawn every particle at the current size.
    pub fn refresh_particles(&mut self) {
        tracing::debug!("refreshing particle field");
        self.particles.refresh();
    }

    /// Apply a new value of the particle `refresh` setting. A change
    /// respawns the field.
    pub fn set_particle_refresh(&mut self, refresh: bool) {
        if refresh != self.particle_refresh {
            self.particle_refresh = refresh;
            self.refresh_particles();
        }
    }

    /// Forward a pointer position (terminal cell) to the particle field.
    pub fn on_pointer(&mut self, column: u16, row: u16) {
        let (x, y) = self.metrics.cell_center_px(column, row);
        let (left, top) = self.metrics.area_px(self.last_area.x, self.last_area.y);
        self.particles.pointer_moved(x, y, left, top);
    }

    /// Advance all layers by one frame and draw them into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.advance(area);
        if self.enabled {
            frame.render_widget(Paragraph::new(self.surface.to_lines()), area);
        }
    }

    /// Advance all layers by one frame and compose the surface.
    ///
    /// Layers keep animating while the background is hidden so that
    /// re-enabling it does not restart the field.
    pub fn advance(&mut self, area: Rect) {
        if area != self.last_area {
            self.resize(area);
        }

        if self.particles.settings().enabled {
            self.particles.step();
        }
        if self.noise.settings().enabled {
            self.noise.tick();
        }

        self.compose();
    }

    fn resize(&mut self, area: Rect) {
        tracing::debug!(width = area.width, height = area.height, "background resized");
        let (w, h) = self.metrics.area_px(area.width, area.height);
        self.particles.resize(w, h);
        self.surface.resize(area.width, area.height, PAGE_BACKGROUND);
        self.last_area = area;
    }

    fn compose(&mut self) {
        self.surface.clear(PAGE_BACKGROUND);
        if self.grid.settings().enabled {
            self.grid.draw(&mut self.surface, &self.metrics);
        }
        if self.particles.settings().enabled {
            self.particles.draw(&mut self.surface, &self.metrics);
        }
        if self.noise.settings().enabled {
            self.noise.draw(&mut self.surface);
        }
    }
}
