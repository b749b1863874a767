// src/math/types/mod.rs

pub mod extent;
pub mod grid;
pub mod sample;

pub use extent::CoordinateExtent;
pub use grid::Grid;
pub use sample::StationSample;
