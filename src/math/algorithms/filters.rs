// src/math/algorithms/filters.rs

//! Nachbarschaftsfilter auf `Grid` mit geklemmten Rändern
//! (Randzellen werden repliziert, entspricht "nearest").
//!
//! Beide Filter lesen ausschließlich aus dem Eingabegitter und schreiben in ein
//! neues Gitter.

use crate::math::{algorithms::kernel::WeightKernel, types::Grid};

#[inline]
fn clamp_index(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).clamp(0, len as isize - 1) as usize
}

/// Lokales Maximum in einem `size x size`-Fenster um jede Zelle.
pub fn maximum_filter(grid: &Grid, size: usize) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut out = Grid::zeros(rows, cols);
    if rows == 0 || cols == 0 {
        return out;
    }

    let radius = (size / 2) as isize;
    let src = grid.as_slice();
    let dst = out.as_mut_slice();

    for c in 0..cols {
        for r in 0..rows {
            let mut max = f64::NEG_INFINITY;
            for dc in -radius..=radius {
                let cc = clamp_index(c, dc, cols);
                for dr in -radius..=radius {
                    let rr = clamp_index(r, dr, rows);
                    max = max.max(src[rr + cc * rows]);
                }
            }
            dst[r + c * rows] = max;
        }
    }

    out
}

/// Gewichtete Summe `Σ w * v` über das Kernelfenster jeder Zelle.
pub fn convolve(grid: &Grid, kernel: &WeightKernel) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut out = Grid::zeros(rows, cols);
    if rows == 0 || cols == 0 {
        return out;
    }

    let radius = kernel.radius() as isize;
    let src = grid.as_slice();
    let dst = out.as_mut_slice();

    for c in 0..cols {
        for r in 0..rows {
            let mut acc = 0.0;
            for dr in -radius..=radius {
                let rr = clamp_index(r, dr, rows);
                for dc in -radius..=radius {
                    let cc = clamp_index(c, dc, cols);
                    acc += kernel.weight_at(dr, dc) * src[rr + cc * rows];
                }
            }
            dst[r + c * rows] = acc;
        }
    }

    out
}

/// 1.0 für gesetzte Zellen (`v != 0`), sonst 0.0.
pub fn nonzero_mask(grid: &Grid) -> Grid {
    Grid::from_matrix(
        grid.matrix()
            .map(|v| if v != 0.0 { 1.0 } else { 0.0 }),
    )
}
