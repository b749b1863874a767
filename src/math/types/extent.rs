// src/math/types/extent.rs

use crate::math::{
    error::{MathError, MathResult},
    types::StationSample,
};
use geo::{BoundingRect, MultiPoint};
use serde::{Deserialize, Serialize};

/// Geographische Ausdehnung (Bounding Box in Grad) aller Messpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateExtent {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CoordinateExtent {
    /// Bestimmt die Ausdehnung über `geo::BoundingRect`.
    /// Eine leere Menge hat keine messbare Ausdehnung.
    pub fn from_samples(samples: &[StationSample]) -> MathResult<Self> {
        let points: MultiPoint<f64> = samples.iter().map(StationSample::point).collect();

        let rect = points.bounding_rect().ok_or_else(|| MathError::InvalidInput {
            message: "Cannot derive a coordinate extent from an empty sample set".to_string(),
        })?;

        Ok(Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lon: rect.min().x,
            max_lon: rect.max().x,
        })
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_from_samples() {
        let samples = vec![
            StationSample::new("P1", -33.80, 151.00, 5.0).unwrap(),
            StationSample::new("P2", -34.50, 150.00, 1.0).unwrap(),
            StationSample::new("P3", -34.00, 150.50, 2.0).unwrap(),
        ];
        let extent = CoordinateExtent::from_samples(&samples).unwrap();
        assert_eq!(extent.min_lat, -34.50);
        assert_eq!(extent.max_lat, -33.80);
        assert_eq!(extent.min_lon, 150.00);
        assert_eq!(extent.max_lon, 151.00);
        assert!(extent.contains(-34.0, 150.5));
        assert!(!extent.contains(-35.0, 150.5));
    }

    #[test]
    fn test_empty_samples_fail() {
        assert!(matches!(
            CoordinateExtent::from_samples(&[]),
            Err(MathError::InvalidInput { .. })
        ));
    }
}
