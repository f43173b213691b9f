//! Background layers for the folio page.
//!
//! The background is composed of three layers drawn onto a cell surface,
//! bottom to top: a static line grid, a drifting particle field that leans
//! toward the pointer, and a film-grain noise tile that is regenerated
//! every few frames.

mod animations;
mod chars;
mod state;
mod surface;

pub use animations::grid::GridOverlay;
pub use animations::noise::NoiseField;
pub use animations::particles::{Particle, ParticleField, Pointer};
pub use state::{BackgroundState, PAGE_BACKGROUND};
pub use surface::{Surface, SurfaceCell};
