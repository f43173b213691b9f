//! Core types shared by the folio crates.
//!
//! Colours, the cell-to-pixel geometry of the terminal surface, page routes
//! and the settings that drive the background layers.

mod color;
mod metrics;
mod route;
mod settings;

pub use color::{ColorError, Rgb};
pub use metrics::CellMetrics;
pub use route::Route;
pub use settings::{BackgroundSettings, GridSettings, NoiseSettings, ParticleSettings};
