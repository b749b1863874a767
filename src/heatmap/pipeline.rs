// src/heatmap/pipeline.rs

use crate::heatmap::{
    builder::{GridBuilder, PlacementReport},
    config::ReconstructionConfig,
    diffusion::DiffusionEstimator,
    indexer::{CoordinateIndexer, GridLayout},
    rescale::RangeRescaler,
};
use crate::math::{
    error::{MathError, MathResult},
    types::{Grid, StationSample},
};
use tracing::info;

/// Ergebnis einer Rekonstruktion: das dichte Feld plus das Layout, mit dem ein
/// Renderer Stationskoordinaten zurück auf das Gitter abbilden kann.
#[derive(Debug, Clone)]
pub struct ReconstructedField {
    pub grid: Grid,
    pub layout: GridLayout,
    pub placement: PlacementReport,
}

/// Orchestriert Indizierung, Platzierung, Diffusion und Skalierung.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    config: ReconstructionConfig,
    indexer: CoordinateIndexer,
    diffusion: DiffusionEstimator,
    rescaler: RangeRescaler,
}

impl Reconstruction {
    pub fn new(config: ReconstructionConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self {
            indexer: CoordinateIndexer::new(config.quantization_scale)?,
            diffusion: DiffusionEstimator::new(&config)?,
            rescaler: RangeRescaler::new(config.target_min, config.target_max)?,
            config,
        })
    }

    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    pub fn indexer(&self) -> &CoordinateIndexer {
        &self.indexer
    }

    /// Leitet das Layout aus den Messpunkten ab und rekonstruiert das Feld.
    pub fn run(&self, samples: &[StationSample]) -> MathResult<ReconstructedField> {
        let layout = self.indexer.layout(samples)?;
        self.run_with_layout(samples, layout)
    }

    /// Rekonstruiert auf einem vorgegebenen Layout (z.B. einer festen Referenzregion).
    /// Punkte außerhalb des Layouts werden übersprungen.
    pub fn run_with_layout(
        &self,
        samples: &[StationSample],
        layout: GridLayout,
    ) -> MathResult<ReconstructedField> {
        if samples.is_empty() {
            return Err(MathError::InvalidInput {
                message: "Reconstruction needs at least one sample".to_string(),
            });
        }

        let (sparse, placement) = GridBuilder::new(layout).build(samples);
        let dense = self.diffusion.run(sparse);
        let grid = self.rescaler.rescale(dense);

        info!(
            "Reconstruction: {}x{} grid from {} samples ({} skipped), {} cells without data",
            grid.rows(),
            grid.cols(),
            placement.placed.len(),
            placement.skipped.len(),
            grid.count_zero()
        );

        Ok(ReconstructedField {
            grid,
            layout,
            placement,
        })
    }
}
