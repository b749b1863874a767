// ./src/lib.rs

//! Rekonstruktion eines dichten Heatmap-Feldes aus wenigen georeferenzierten
//! Messwerten (z.B. Dürrerisiko je Wetterstation).
//!
//! Ablauf: `CoordinateIndexer` -> `GridBuilder` -> `DiffusionEstimator` -> `RangeRescaler`,
//! zusammengefasst in [`heatmap::Reconstruction`].

pub mod heatmap;
pub mod io;
pub mod math;

pub mod prelude {
    pub use crate::heatmap::{
        CoordinateIndexer, DiffusionEstimator, DiffusionPhase, GridBuilder, GridLayout,
        PlacementReport, RangeRescaler, ReconstructedField, Reconstruction, ReconstructionConfig,
    };
    pub use crate::io::{FieldExport, FieldSummary, StationCatalog};
    pub use crate::math::prelude::*;
}
