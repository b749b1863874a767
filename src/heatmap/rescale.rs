// src/heatmap/rescale.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Grid,
};
use tracing::debug;

/// Bildet alle positiven Zellen linear auf `[target_min, target_max]` ab.
/// Zellen mit exakt 0.0 ("keine Daten") bleiben unberührt und zählen nicht
/// zu Minimum und Maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRescaler {
    target_min: f64,
    target_max: f64,
}

impl RangeRescaler {
    pub fn new(target_min: f64, target_max: f64) -> MathResult<Self> {
        if !target_min.is_finite()
            || !target_max.is_finite()
            || target_min <= 0.0
            || target_max < target_min
        {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Target range must satisfy 0 < min <= max, got [{}, {}]",
                    target_min, target_max
                ),
            });
        }
        Ok(Self {
            target_min,
            target_max,
        })
    }

    pub fn rescale(&self, mut grid: Grid) -> Grid {
        let Some((min, max)) = grid.positive_range() else {
            debug!("RangeRescaler: no positive cells, grid unchanged");
            return grid;
        };

        if max == min {
            debug!(
                "RangeRescaler: single distinct value {}, positive cells set to {}",
                min, self.target_min
            );
            for v in grid.as_mut_slice().iter_mut().filter(|v| **v > 0.0) {
                *v = self.target_min;
            }
            return grid;
        }

        let factor = (self.target_max - self.target_min) / (max - min);
        for v in grid.as_mut_slice().iter_mut().filter(|v| **v > 0.0) {
            *v = self.target_min + (*v - min) * factor;
        }
        debug!(
            "RangeRescaler: [{}, {}] -> [{}, {}]",
            min, max, self.target_min, self.target_max
        );
        grid
    }
}
