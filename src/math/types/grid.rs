// src/math/types/grid.rs

use crate::math::error::{MathError, MathResult};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Zweidimensionales Skalarfeld `rows x cols` mit f64-Werten.
/// `0.0` bedeutet "nicht gesetzt / keine Daten".
///
/// Intern eine `nalgebra::DMatrix` (spaltenweise gespeichert); die Filter in
/// `math::algorithms::filters` arbeiten direkt auf diesem Speicherlayout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    data: DMatrix<f64>,
}

impl Grid {
    /// Erstellt ein neues, mit Nullen initialisiertes Gitter.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::zeros(rows, cols),
        }
    }

    /// Erstellt ein Gitter aus zeilenweise (row-major) angeordneten Werten.
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> MathResult<Self> {
        if values.len() != rows * cols {
            return Err(MathError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: values.len() / cols.max(1),
                cols,
            });
        }
        Ok(Self {
            data: DMatrix::from_row_slice(rows, cols, values),
        })
    }

    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Setzt einen Wert; gibt `false` zurück, wenn der Index außerhalb liegt.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.data.get_mut((row, col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Rohdaten in spaltenweiser Reihenfolge (Index = row + col * rows).
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    /// Werte als verschachtelte Zeilen (für Export/Renderer).
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn count_zero(&self) -> usize {
        self.data.iter().filter(|v| **v == 0.0).count()
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.len() - self.count_zero()
    }

    /// Minimum und Maximum aller strikt positiven Zellen.
    pub fn positive_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// Position und Wert des globalen Maximums (erste Fundstelle in Speicherreihenfolge).
    pub fn argmax(&self) -> Option<((usize, usize), f64)> {
        let rows = self.rows();
        self.as_slice()
            .iter()
            .copied()
            .enumerate()
            .fold(None, |acc: Option<(usize, f64)>, (i, v)| match acc {
                Some((_, best)) if best >= v => acc,
                _ => Some((i, v)),
            })
            .map(|(i, v)| ((i % rows, i / rows), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_set() {
        let mut g = Grid::zeros(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count_zero(), 12);
        assert!(g.set(2, 3, 1.5));
        assert!(!g.set(3, 0, 1.0));
        assert_eq!(g.get(2, 3), Some(1.5));
        assert_eq!(g.get(0, 4), None);
        assert_eq!(g.count_nonzero(), 1);
    }

    #[test]
    fn test_row_major_roundtrip_layout() {
        let g = Grid::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(g.get(0, 2), Some(3.0));
        assert_eq!(g.get(1, 0), Some(4.0));
        assert_eq!(g.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        // Spaltenweise Speicherung
        assert_eq!(g.as_slice()[1], 4.0);
    }

    #[test]
    fn test_row_major_length_mismatch() {
        assert!(matches!(
            Grid::from_row_major(2, 2, &[1.0, 2.0, 3.0]),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_positive_range_and_argmax() {
        let g = Grid::from_row_major(2, 2, &[0.0, 2.0, -1.0, 7.0]).unwrap();
        assert_eq!(g.positive_range(), Some((2.0, 7.0)));
        assert_eq!(g.argmax(), Some(((1, 1), 7.0)));
        assert_eq!(Grid::zeros(2, 2).positive_range(), None);
    }
}
