// src/heatmap/config.rs

use crate::math::{
    algorithms::KernelFalloff,
    error::{MathError, MathResult},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Konfiguration einer Feld-Rekonstruktion (Quantisierung, Diffusion, Skalierung).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Faktor Grad -> Gittereinheiten (300 ≈ 370 m pro Zelle in Nord-Süd-Richtung).
    pub quantization_scale: f64,
    /// Kantenlänge des Nachbarschaftsfensters (ungerade, >= 3).
    pub kernel_size: usize,
    /// Gewichtsverlauf des Diffusionskernels.
    pub falloff: KernelFalloff,
    /// Anteil α, mit dem der gewichtete Mittelwert in eine Zelle einfließt.
    pub diffusion_rate: f64,
    /// Iterationen der globalen Phase (Nullen zählen im Mittelwert mit).
    pub global_iterations: usize,
    /// Iterationen der Verfeinerungsphase (Nullen werden ignoriert).
    pub refinement_iterations: usize,
    /// Zielbereich der Ausgabe.
    pub target_min: f64,
    pub target_max: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            quantization_scale: 300.0,
            kernel_size: 3,
            falloff: KernelFalloff::default(),
            diffusion_rate: 0.5,
            global_iterations: 100,
            refinement_iterations: 100,
            target_min: 1.0,
            target_max: 5.0,
        }
    }
}

impl ReconstructionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantization_scale(mut self, scale: f64) -> Self {
        self.quantization_scale = scale;
        self
    }

    pub fn with_kernel_size(mut self, size: usize) -> Self {
        self.kernel_size = size;
        self
    }

    pub fn with_falloff(mut self, falloff: KernelFalloff) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_diffusion_rate(mut self, rate: f64) -> Self {
        self.diffusion_rate = rate;
        self
    }

    pub fn with_iterations(mut self, global: usize, refinement: usize) -> Self {
        self.global_iterations = global;
        self.refinement_iterations = refinement;
        self
    }

    pub fn with_target_range(mut self, min: f64, max: f64) -> Self {
        self.target_min = min;
        self.target_max = max;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.quantization_scale.is_finite() || self.quantization_scale <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Quantization scale must be positive and finite, got {}",
                    self.quantization_scale
                ),
            });
        }
        if self.kernel_size < 3 || self.kernel_size % 2 == 0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Kernel size must be odd and at least 3, got {}",
                    self.kernel_size
                ),
            });
        }
        self.falloff.validate()?;
        if !(self.diffusion_rate > 0.0 && self.diffusion_rate <= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Diffusion rate must lie in (0, 1], got {}",
                    self.diffusion_rate
                ),
            });
        }
        // Zielminimum > 0, sonst fielen skalierte Zellen aus der Menge der positiven Zellen.
        if !self.target_min.is_finite()
            || !self.target_max.is_finite()
            || self.target_min <= 0.0
            || self.target_max < self.target_min
        {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Target range must satisfy 0 < min <= max, got [{}, {}]",
                    self.target_min, self.target_max
                ),
            });
        }
        if self.global_iterations == 0 && self.refinement_iterations == 0 {
            warn!("ReconstructionConfig: both diffusion phases have zero iterations, the grid stays sparse.");
        }
        Ok(())
    }
}
