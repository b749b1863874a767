// src/io/export.rs

use crate::heatmap::{PlacedSample, ReconstructedField};
use crate::io::error::{FieldIoError, FieldIoResult};
use crate::math::types::{CoordinateExtent, Grid};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Übergabeformat an einen externen Renderer: Werte zeilenweise (Zeile 0 = Norden),
/// dazu Puffer und Ausdehnung, um Stationen wieder auf das Gitter zu legen.
#[derive(Debug, Clone, Serialize)]
pub struct FieldExport {
    pub rows: usize,
    pub cols: usize,
    pub top_buffer: usize,
    pub left_buffer: usize,
    pub quantization_scale: f64,
    pub extent: CoordinateExtent,
    pub stations: Vec<PlacedSample>,
    pub summary: FieldSummary,
    pub values: Vec<Vec<f64>>,
}

impl FieldExport {
    pub fn from_field(field: &ReconstructedField) -> Self {
        Self {
            rows: field.layout.rows,
            cols: field.layout.cols,
            top_buffer: field.layout.top_buffer,
            left_buffer: field.layout.left_buffer,
            quantization_scale: field.layout.quantization_scale,
            extent: field.layout.extent,
            stations: field.placement.placed.clone(),
            summary: FieldSummary::from_grid(&field.grid),
            values: field.grid.to_rows(),
        }
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> FieldIoResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| FieldIoError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(|source| FieldIoError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!("Field written to {}", path.display());
        Ok(())
    }
}

/// Kennzahlen eines Gitters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub rows: usize,
    pub cols: usize,
    pub zero_cells: usize,
    pub min_positive: Option<f64>,
    pub max_positive: Option<f64>,
}

impl FieldSummary {
    pub fn from_grid(grid: &Grid) -> Self {
        let range = grid.positive_range();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            zero_cells: grid.count_zero(),
            min_positive: range.map(|(min, _)| min),
            max_positive: range.map(|(_, max)| max),
        }
    }
}
