// src/math/types/sample.rs

use crate::math::error::{MathError, MathResult};
use serde::Serialize;

/// Ein benannter Messpunkt mit geographischer Position und Skalarwert
/// (z.B. mittleres Dürrerisiko einer Wetterstation).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSample {
    name: String,
    latitude: f64,
    longitude: f64,
    value: f64,
}

impl StationSample {
    /// Erstellt einen neuen Messpunkt und prüft Wertebereiche.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        value: f64,
    ) -> MathResult<Self> {
        let name = name.into();

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(MathError::InvalidInput {
                message: format!("Station '{}': latitude {} outside [-90, 90]", name, latitude),
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(MathError::InvalidInput {
                message: format!(
                    "Station '{}': longitude {} outside [-180, 180]",
                    name, longitude
                ),
            });
        }
        if !value.is_finite() {
            return Err(MathError::InvalidInput {
                message: format!("Station '{}': value {} is not finite", name, value),
            });
        }

        Ok(Self {
            name,
            latitude,
            longitude,
            value,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position als `geo::Point` (x = Länge, y = Breite).
    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sample() {
        let s = StationSample::new("Randwick", -33.91, 151.24, 3.25).unwrap();
        assert_eq!(s.name(), "Randwick");
        assert_eq!(s.point().x(), 151.24);
        assert_eq!(s.point().y(), -33.91);
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        assert!(matches!(
            StationSample::new("a", -91.0, 0.0, 1.0),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            StationSample::new("b", 0.0, 180.5, 1.0),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(StationSample::new("c", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_value() {
        assert!(StationSample::new("d", 0.0, 0.0, f64::INFINITY).is_err());
    }
}
