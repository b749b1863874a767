// src/heatmap/builder.rs

use crate::heatmap::indexer::GridLayout;
use crate::math::types::{Grid, StationSample};
use serde::Serialize;
use tracing::{debug, warn};

/// Ein Messpunkt, der erfolgreich einer Gitterzelle zugeordnet wurde.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSample {
    pub name: String,
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Protokoll der Platzierung: gesetzte, verworfene und überschriebene Punkte.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementReport {
    pub placed: Vec<PlacedSample>,
    /// Punkte, deren Index außerhalb des Gitters lag.
    pub skipped: Vec<String>,
    /// Punkte, deren Zelle von einem späteren Punkt überschrieben wurde.
    pub overwritten: Vec<String>,
}

/// Schreibt die Messwerte in ein ansonsten leeres Gitter.
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder {
    layout: GridLayout,
}

impl GridBuilder {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    /// Baut das dünn besetzte Startgitter.
    ///
    /// Punkte außerhalb des Gitters werden übersprungen. Fallen zwei Punkte in
    /// dieselbe Zelle, gewinnt der spätere (keine Mittelung).
    pub fn build(&self, samples: &[StationSample]) -> (Grid, PlacementReport) {
        let mut grid = Grid::zeros(self.layout.rows, self.layout.cols);
        let mut report = PlacementReport::default();

        for sample in samples {
            let Some((row, col)) = self.layout.cell_of(sample.latitude(), sample.longitude())
            else {
                let (row, col) = self.layout.index_of(sample.latitude(), sample.longitude());
                warn!(
                    "GridBuilder: sample '{}' at ({}, {}) maps to ({}, {}) outside {}x{} grid, skipped",
                    sample.name(),
                    sample.latitude(),
                    sample.longitude(),
                    row,
                    col,
                    self.layout.rows,
                    self.layout.cols
                );
                report.skipped.push(sample.name().to_string());
                continue;
            };

            if let Some(pos) = report
                .placed
                .iter()
                .position(|p| p.row == row && p.col == col)
            {
                let previous = report.placed.remove(pos);
                debug!(
                    "GridBuilder: sample '{}' overwrites '{}' at ({}, {})",
                    sample.name(),
                    previous.name,
                    row,
                    col
                );
                report.overwritten.push(previous.name);
            }

            grid.set(row, col, sample.value());
            report.placed.push(PlacedSample {
                name: sample.name().to_string(),
                row,
                col,
                value: sample.value(),
            });
        }

        debug!(
            "GridBuilder: placed {} samples, skipped {}, overwritten {}",
            report.placed.len(),
            report.skipped.len(),
            report.overwritten.len()
        );

        (grid, report)
    }
}
