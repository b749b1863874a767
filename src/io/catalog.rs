// src/io/catalog.rs

//! Einlesen der Stationstabelle `{ "<Name>": { "latitude": .., "longitude": .., "<Feld>": .. } }`.

use crate::io::error::{FieldIoError, FieldIoResult};
use crate::math::types::StationSample;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Standard-Skalarfeld, das über das Gitter verteilt wird.
pub const DEFAULT_VALUE_FIELD: &str = "mean_risk";

#[derive(Debug, Deserialize)]
struct StationRecord {
    latitude: f64,
    longitude: f64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Eingelesene Stationen, nach Namen sortiert.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    pub samples: Vec<StationSample>,
    /// Stationen ohne (numerisches) Wertefeld.
    pub missing_value: Vec<String>,
}

impl StationCatalog {
    pub fn from_json_str(json: &str, value_field: &str) -> FieldIoResult<Self> {
        let records: BTreeMap<String, StationRecord> = serde_json::from_str(json)?;
        Self::from_records(records, value_field)
    }

    pub fn from_path(path: impl AsRef<Path>, value_field: &str) -> FieldIoResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FieldIoError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!("StationCatalog: reading {}", path.display());
        Self::from_json_str(&json, value_field)
    }

    fn from_records(
        records: BTreeMap<String, StationRecord>,
        value_field: &str,
    ) -> FieldIoResult<Self> {
        let mut catalog = Self::default();

        for (name, record) in records {
            let Some(value) = record.fields.get(value_field).and_then(Value::as_f64) else {
                warn!(
                    "StationCatalog: station '{}' has no numeric '{}' field, skipped",
                    name, value_field
                );
                catalog.missing_value.push(name);
                continue;
            };

            let sample = StationSample::new(name, record.latitude, record.longitude, value)?;
            catalog.samples.push(sample);
        }

        if catalog.samples.is_empty() {
            return Err(FieldIoError::NoStations {
                value_field: value_field.to_string(),
            });
        }

        debug!(
            "StationCatalog: {} stations loaded, {} without '{}'",
            catalog.samples.len(),
            catalog.missing_value.len(),
            value_field
        );
        Ok(catalog)
    }
}
