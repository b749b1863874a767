// src/math/algorithms/kernel.rs

use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Gewichtsverlauf in Abhängigkeit vom Abstand zur Kernelmitte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelFalloff {
    /// Logistischer Abfall `w(d) = 1 / (1 + exp(steepness * (d - midpoint)))`.
    Logistic { steepness: f64, midpoint: f64 },
    /// Alle Gewichte 1.0 (einfacher Box-Mittelwert).
    Uniform,
}

impl Default for KernelFalloff {
    fn default() -> Self {
        KernelFalloff::Logistic {
            steepness: 5.0,
            midpoint: 1.5,
        }
    }
}

impl KernelFalloff {
    /// Gewicht für einen Nachbarn im euklidischen Abstand `distance`.
    /// Die Mitte (`distance == 0`) hat immer Gewicht 1.0.
    pub fn weight(&self, distance: f64) -> f64 {
        if distance == 0.0 {
            return 1.0;
        }
        match *self {
            KernelFalloff::Logistic {
                steepness,
                midpoint,
            } => 1.0 / (1.0 + (steepness * (distance - midpoint)).exp()),
            KernelFalloff::Uniform => 1.0,
        }
    }

    pub fn validate(&self) -> MathResult<()> {
        if let KernelFalloff::Logistic {
            steepness,
            midpoint,
        } = *self
        {
            if !steepness.is_finite() || !midpoint.is_finite() {
                return Err(MathError::InvalidConfiguration {
                    message: format!(
                        "Logistic falloff needs finite parameters, got steepness={}, midpoint={}",
                        steepness, midpoint
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Quadratischer Gewichtskernel (size x size, zeilenweise gespeichert).
#[derive(Debug, Clone, PartialEq)]
pub struct WeightKernel {
    size: usize,
    weights: Vec<f64>,
}

impl WeightKernel {
    /// Baut den Kernel für eine ungerade Kantenlänge >= 3.
    pub fn new(size: usize, falloff: KernelFalloff) -> MathResult<Self> {
        if size < 3 || size % 2 == 0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Kernel size must be odd and at least 3, got {}", size),
            });
        }
        falloff.validate()?;

        let radius = (size / 2) as isize;
        let mut weights = Vec::with_capacity(size * size);
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let distance = ((dr * dr + dc * dc) as f64).sqrt();
                weights.push(falloff.weight(distance));
            }
        }

        Ok(Self { size, weights })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Gewicht an Offset (dr, dc) relativ zur Mitte.
    pub fn weight_at(&self, dr: isize, dc: isize) -> f64 {
        let r = self.radius() as isize;
        let idx = ((dr + r) as usize) * self.size + (dc + r) as usize;
        self.weights[idx]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
