// src/heatmap/indexer.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{CoordinateExtent, StationSample},
    utils::{
        constants::{DIMENSION_MULTIPLE, MIN_BUFFER},
        quantization::quantize,
        rounding::ceil_to_multiple,
    },
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ergebnis der Koordinaten-Indizierung: Gittergröße, Randpuffer und die
/// Referenzausdehnung, aus der beides abgeleitet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub top_buffer: usize,
    pub left_buffer: usize,
    /// Quantisierte Spannweite in Nord-Süd-Richtung (Zeilen).
    pub lat_span: usize,
    /// Quantisierte Spannweite in West-Ost-Richtung (Spalten).
    pub lon_span: usize,
    pub extent: CoordinateExtent,
    pub quantization_scale: f64,
}

impl GridLayout {
    /// Zeilen- und Spaltenindex (vorzeichenbehaftet, ungeprüft) einer Koordinate.
    ///
    /// Die Zeile zählt ab der nördlichsten Breite nach Süden (Norden oben),
    /// die Spalte ab der westlichsten Länge nach Osten.
    pub fn index_of(&self, latitude: f64, longitude: f64) -> (i64, i64) {
        let s = self.quantization_scale;
        let row = quantize(self.extent.max_lat, s) - quantize(latitude, s) + self.top_buffer as i64;
        let col =
            quantize(longitude, s) - quantize(self.extent.min_lon, s) + self.left_buffer as i64;
        (row, col)
    }

    /// Wie `index_of`, aber `None` außerhalb des Gitters.
    pub fn cell_of(&self, latitude: f64, longitude: f64) -> Option<(usize, usize)> {
        let (row, col) = self.index_of(latitude, longitude);
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

/// Leitet Gitterdimensionen und Puffer aus der Ausdehnung der Messpunkte ab.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateIndexer {
    quantization_scale: f64,
}

impl CoordinateIndexer {
    pub fn new(quantization_scale: f64) -> MathResult<Self> {
        if !quantization_scale.is_finite() || quantization_scale <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Quantization scale must be positive and finite, got {}",
                    quantization_scale
                ),
            });
        }
        Ok(Self { quantization_scale })
    }

    pub fn layout(&self, samples: &[StationSample]) -> MathResult<GridLayout> {
        let extent = CoordinateExtent::from_samples(samples)?;
        Ok(self.layout_for_extent(extent))
    }

    /// Gittergröße und Puffer für eine gegebene Ausdehnung.
    pub fn layout_for_extent(&self, extent: CoordinateExtent) -> GridLayout {
        let s = self.quantization_scale;
        let lat_span = (quantize(extent.max_lat, s) - quantize(extent.min_lat, s)).max(0) as usize;
        let lon_span = (quantize(extent.max_lon, s) - quantize(extent.min_lon, s)).max(0) as usize;

        let (rows, top_buffer) = axis_dimension(lat_span);
        let (cols, left_buffer) = axis_dimension(lon_span);

        debug!(
            "CoordinateIndexer: spans {}x{} -> grid {}x{}, buffers top={} left={}",
            lat_span, lon_span, rows, cols, top_buffer, left_buffer
        );

        GridLayout {
            rows,
            cols,
            top_buffer,
            left_buffer,
            lat_span,
            lon_span,
            extent,
            quantization_scale: s,
        }
    }
}

/// Dimension und Puffer einer Achse.
///
/// Eine Spannweite `span` belegt `span + 1` Zellen. Die Dimension ist das kleinste
/// Vielfache von 10, das diese Zellen plus `MIN_BUFFER` auf jeder Seite fasst;
/// der Puffer verteilt den Überschuss gleichmäßig (mindestens `MIN_BUFFER`).
fn axis_dimension(span: usize) -> (usize, usize) {
    let occupied = span + 1;
    let dim = ceil_to_multiple(occupied + 2 * MIN_BUFFER, DIMENSION_MULTIPLE);
    let buffer = ((dim - occupied) / 2).max(MIN_BUFFER);
    (dim, buffer)
}
