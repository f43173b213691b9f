//! Background layer implementations.

pub mod grid;
pub mod noise;
pub mod particles;
