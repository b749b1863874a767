// src/heatmap/diffusion.rs

use crate::heatmap::config::ReconstructionConfig;
use crate::math::{
    algorithms::{WeightKernel, convolve, maximum_filter, nonzero_mask},
    error::MathResult,
    types::Grid,
};
use tracing::debug;

/// Die zwei Phasen der Diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusionPhase {
    /// Gewichteter Mittelwert über die volle Nachbarschaft, Nullen eingeschlossen.
    /// Damit wandern Werte auch in noch leere Bereiche hinaus.
    Global,
    /// Gewichteter Mittelwert nur über gesetzte Nachbarn (`v != 0`).
    Refinement,
}

/// Füllt ungesetzte Zellen durch lokale gewichtete Mittelung.
///
/// Eine Zelle, die gleich dem Maximum ihrer Nachbarschaft ist, bleibt
/// unverändert. So werden echte Messwerte (und Grate hoher Werte, die während
/// der Diffusion entstehen) nicht durch die Mittelung ausgewaschen. Alle anderen
/// Zellen werden mit `new = (1 - α) * old + α * avg` aktualisiert.
///
/// Jede Iteration liest nur das Gitter der vorherigen Iteration. Abbruch nach
/// einer festen Anzahl Iterationen je Phase, ohne Konvergenztest.
#[derive(Debug, Clone)]
pub struct DiffusionEstimator {
    kernel: WeightKernel,
    diffusion_rate: f64,
    global_iterations: usize,
    refinement_iterations: usize,
}

impl DiffusionEstimator {
    pub fn new(config: &ReconstructionConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self {
            kernel: WeightKernel::new(config.kernel_size, config.falloff)?,
            diffusion_rate: config.diffusion_rate,
            global_iterations: config.global_iterations,
            refinement_iterations: config.refinement_iterations,
        })
    }

    pub fn kernel(&self) -> &WeightKernel {
        &self.kernel
    }

    /// Führt beide Phasen nacheinander aus und gibt das dichte Gitter zurück.
    pub fn run(&self, grid: Grid) -> Grid {
        let grid = self.run_phase(grid, DiffusionPhase::Global, self.global_iterations);
        self.run_phase(grid, DiffusionPhase::Refinement, self.refinement_iterations)
    }

    pub fn run_phase(&self, mut grid: Grid, phase: DiffusionPhase, iterations: usize) -> Grid {
        let zeros_before = grid.count_zero();
        for _ in 0..iterations {
            grid = self.step(&grid, phase);
        }
        debug!(
            "DiffusionEstimator: {:?} phase, {} iterations, zero cells {} -> {}",
            phase,
            iterations,
            zeros_before,
            grid.count_zero()
        );
        grid
    }

    /// Eine Iteration: liest ausschließlich `grid`, schreibt in ein neues Gitter.
    pub fn step(&self, grid: &Grid, phase: DiffusionPhase) -> Grid {
        let local_max = maximum_filter(grid, self.kernel.size());
        let weighted_sum = convolve(grid, &self.kernel);
        let weight_total = match phase {
            DiffusionPhase::Global => None,
            DiffusionPhase::Refinement => Some(convolve(&nonzero_mask(grid), &self.kernel)),
        };
        let kernel_sum = self.kernel.sum();
        let alpha = self.diffusion_rate;

        let mut next = grid.clone();
        let old = grid.as_slice();
        let max = local_max.as_slice();
        let sum = weighted_sum.as_slice();

        for (i, cell) in next.as_mut_slice().iter_mut().enumerate() {
            if old[i] >= max[i] {
                continue;
            }
            let denominator = match &weight_total {
                None => kernel_sum,
                Some(weights) => weights.as_slice()[i],
            };
            let average = if denominator > 0.0 {
                sum[i] / denominator
            } else {
                0.0
            };
            *cell = (1.0 - alpha) * old[i] + alpha * average;
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::algorithms::KernelFalloff;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn estimator() -> DiffusionEstimator {
        DiffusionEstimator::new(&ReconstructionConfig::default()).unwrap()
    }

    fn random_sparse_grid(rng: &mut StdRng, rows: usize, cols: usize, seeds: usize) -> Grid {
        let mut grid = Grid::zeros(rows, cols);
        for _ in 0..seeds {
            let r = rng.random_range(0..rows);
            let c = rng.random_range(0..cols);
            grid.set(r, c, rng.random_range(0.5..5.0));
        }
        grid
    }

    /// Zellen, die strikt größer als alle anderen Zellen ihres 3x3-Fensters sind.
    fn strict_local_maxima(grid: &Grid) -> Vec<(usize, usize, f64)> {
        let mut result = Vec::new();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let v = grid.get(r, c).unwrap();
                let mut strict = true;
                for dr in -1isize..=1 {
                    for dc in -1isize..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let rr = (r as isize + dr).clamp(0, grid.rows() as isize - 1) as usize;
                        let cc = (c as isize + dc).clamp(0, grid.cols() as isize - 1) as usize;
                        if (rr, cc) != (r, c) && grid.get(rr, cc).unwrap() >= v {
                            strict = false;
                        }
                    }
                }
                if strict {
                    result.push((r, c, v));
                }
            }
        }
        result
    }

    #[test]
    fn test_global_step_single_seed() {
        let est = estimator();
        let mut grid = Grid::zeros(5, 5);
        grid.set(2, 2, 4.0);

        let next = est.step(&grid, DiffusionPhase::Global);
        let kernel = est.kernel();

        // Saat ist lokales Maximum und bleibt
        assert_eq!(next.get(2, 2), Some(4.0));
        // Direkter Nachbar: 0.5 * (w_edge * 4 / Σw)
        let expected_edge = 0.5 * kernel.weight_at(0, 1) * 4.0 / kernel.sum();
        assert_relative_eq!(next.get(2, 3).unwrap(), expected_edge, epsilon = 1e-12);
        let expected_diag = 0.5 * kernel.weight_at(1, 1) * 4.0 / kernel.sum();
        assert_relative_eq!(next.get(1, 1).unwrap(), expected_diag, epsilon = 1e-12);
        // Außerhalb des Fensters bleibt alles leer
        assert_eq!(next.get(0, 0), Some(0.0));
        assert_eq!(next.count_nonzero(), 9);
    }

    #[test]
    fn test_refinement_step_ignores_zeros() {
        let est = estimator();
        let mut grid = Grid::zeros(5, 5);
        grid.set(2, 2, 4.0);

        let next = est.step(&grid, DiffusionPhase::Refinement);
        // Einziger gesetzter Nachbar ist die Saat -> Mittelwert 4.0, halbe Rate
        assert_relative_eq!(next.get(2, 3).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(next.get(1, 1).unwrap(), 2.0, epsilon = 1e-12);
        // Ohne gesetzte Nachbarn bleibt die Zelle 0
        assert_eq!(next.get(0, 4), Some(0.0));
    }

    #[test]
    fn test_refinement_weighted_average_of_set_neighbours() {
        let est = estimator();
        let mut grid = Grid::zeros(3, 3);
        grid.set(1, 0, 2.0);
        grid.set(1, 2, 4.0);
        grid.set(0, 1, 1.0);

        let next = est.step(&grid, DiffusionPhase::Refinement);
        let k = est.kernel();
        let w_edge = k.weight_at(0, 1);
        // Zentrum (1,1) = 0: nur die drei gesetzten Kantennachbarn zählen
        let average = (w_edge * 2.0 + w_edge * 4.0 + w_edge * 1.0) / (3.0 * w_edge);
        assert_relative_eq!(next.get(1, 1).unwrap(), 0.5 * average, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_falloff_matches_box_mean() {
        let config = ReconstructionConfig::default()
            .with_falloff(KernelFalloff::Uniform)
            .with_diffusion_rate(1.0);
        let est = DiffusionEstimator::new(&config).unwrap();
        let mut grid = Grid::zeros(3, 3);
        grid.set(1, 1, 9.0);
        grid.set(0, 0, 1.0);

        let next = est.step(&grid, DiffusionPhase::Global);
        // (0,1): Fenster mit replizierten Rändern enthält (0,0) zweimal und (1,1) einmal
        assert_relative_eq!(next.get(0, 1).unwrap(), (2.0 * 1.0 + 9.0) / 9.0, epsilon = 1e-12);
        assert_eq!(next.get(1, 1), Some(9.0));
    }

    #[test]
    fn test_peak_preservation_every_iteration() {
        let est = estimator();
        let mut rng = StdRng::seed_from_u64(42);
        for phase in [DiffusionPhase::Global, DiffusionPhase::Refinement] {
            let mut grid = random_sparse_grid(&mut rng, 24, 31, 12);
            for iteration in 0..40 {
                let peaks = strict_local_maxima(&grid);
                let next = est.step(&grid, phase);
                for (r, c, v) in peaks {
                    assert_eq!(
                        next.get(r, c),
                        Some(v),
                        "{:?} iteration {}: peak at ({}, {}) changed",
                        phase,
                        iteration,
                        r,
                        c
                    );
                }
                grid = next;
            }
        }
    }

    #[test]
    fn test_zero_count_non_increasing() {
        let est = estimator();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut grid = random_sparse_grid(&mut rng, 30, 20, 6);
        let mut zeros = grid.count_zero();

        for phase in [DiffusionPhase::Global, DiffusionPhase::Refinement] {
            for _ in 0..30 {
                grid = est.step(&grid, phase);
                let now = grid.count_zero();
                assert!(now <= zeros, "{:?}: zero cells grew from {} to {}", phase, zeros, now);
                zeros = now;
            }
        }
        // Kleines Gitter: nach 60 Iterationen ist alles erreicht
        assert_eq!(zeros, 0);
    }

    #[test]
    fn test_run_fills_reachable_cells_and_keeps_bounds() {
        let config = ReconstructionConfig::default().with_iterations(20, 20);
        let est = DiffusionEstimator::new(&config).unwrap();
        let mut grid = Grid::zeros(30, 30);
        grid.set(5, 5, 5.0);
        grid.set(24, 20, 1.0);

        let out = est.run(grid);
        assert_eq!(out.get(5, 5), Some(5.0));
        assert_eq!(out.argmax(), Some(((5, 5), 5.0)));
        assert_eq!(out.count_zero(), 0);
        for v in out.as_slice() {
            assert!(*v > 0.0 && *v <= 5.0);
        }
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let config = ReconstructionConfig::default().with_iterations(0, 0);
        let est = DiffusionEstimator::new(&config).unwrap();
        let mut grid = Grid::zeros(10, 10);
        grid.set(3, 3, 2.0);
        assert_eq!(est.run(grid.clone()), grid);
    }
}
