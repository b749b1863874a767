// src/heatmap/mod.rs

pub mod builder;
pub mod config;
pub mod diffusion;
pub mod indexer;
pub mod pipeline;
pub mod rescale;

pub use self::builder::{GridBuilder, PlacedSample, PlacementReport};
pub use self::config::ReconstructionConfig;
pub use self::diffusion::{DiffusionEstimator, DiffusionPhase};
pub use self::indexer::{CoordinateIndexer, GridLayout};
pub use self::pipeline::{ReconstructedField, Reconstruction};
pub use self::rescale::RangeRescaler;
