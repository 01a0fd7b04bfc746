use crate::prelude::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::ops::{Index, IndexMut};

pub mod ops;

/// A dense row-major matrix of `f32` values.
///
/// The backing buffer is a single owned `Vec`; rows are contiguous slices
/// of it, so `m[row][col]` addresses one cell.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Matrix {
    data: Vec<f32>,
    dim: (usize, usize),
}

impl Matrix {
    /// Creates a zero-filled matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            dim: (rows, cols),
        }
    }

    pub fn from_array<const R: usize, const C: usize>(arr: [[f32; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    pub fn from_vec(vec: Vec<Vec<f32>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionErr);
            }

            for x in row {
                data.push(x);
            }
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    /// Builds a `(len, 1)` column vector, the shape the network feeds
    /// through its layers.
    pub fn from_col(col_vec: Vec<f32>) -> Self {
        Self {
            dim: (col_vec.len(), 1),
            data: col_vec,
        }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    pub fn clone_col_to_vec(&self, col: usize) -> Vec<f32> {
        (0..self.rows()).map(|row| self[row][col]).collect()
    }

    /// Applies a function to every element of the matrix
    pub fn map<F: Fn(f32) -> f32>(&mut self, f: F) {
        for x in &mut self.data {
            *x = f(*x);
        }
    }

    /// Sets every element to a uniformly random value in [-1, 1].
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        let die = Uniform::from(-1.0f32..=1.0);
        for x in &mut self.data {
            *x = die.sample(rng);
        }
    }

    /// Replaces each element, independently with probability `rate`, by a
    /// fresh uniformly random value in [-1, 1]. Used for evolutionary-style
    /// weight perturbation rather than gradient descent.
    pub fn mutate(&mut self, rate: f32, rng: &mut impl Rng) {
        let die = Uniform::from(-1.0f32..=1.0);
        for x in &mut self.data {
            if rng.gen::<f32>() < rate {
                *x = die.sample(rng);
            }
        }
    }

    /// Whether both matrices have the same shape and no pair of elements
    /// differs by more than `err`. Useful when accounting for float
    /// inaccuracies.
    pub fn approx_eq(&self, other: &Matrix, err: f32) -> bool {
        if self.dim != other.dim {
            return false;
        }

        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() <= err)
    }
}

impl Index<usize> for Matrix {
    type Output = [f32];
    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row * self.dim.1..(row + 1) * self.dim.1]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.data[row * self.dim.1..(row + 1) * self.dim.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn access_matrix_from_array() {
        let matrix = Matrix::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(matrix[0][1], 2.0);
        assert_eq!(matrix[1][2], 6.0);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[1][1], 5.0);
    }

    #[test]
    fn matrix_from_vec() {
        let vec = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let matrix = Matrix::from_vec(vec).unwrap();

        assert_eq!(matrix.dim(), (2, 3));
        assert_eq!(matrix[0][1], 2.0);
        assert_eq!(matrix[1][2], 6.0);
    }

    #[test]
    fn matrix_from_vec_err() {
        let vec = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        let matrix = Matrix::from_vec(vec);

        assert_eq!(matrix, Err(Error::DimensionErr));

        let vec = vec![vec![1.0], vec![4.0, 5.0], vec![1.0]];
        let matrix = Matrix::from_vec(vec);

        assert_eq!(matrix, Err(Error::DimensionErr));
    }

    #[test]
    fn column_round_trip() {
        let matrix = Matrix::from_col(vec![1.5, -2.0, 0.25]);

        assert_eq!(matrix.dim(), (3, 1));
        assert_eq!(matrix.clone_col_to_vec(0), vec![1.5, -2.0, 0.25]);
    }

    #[test]
    fn new_is_zero_filled() {
        let matrix = Matrix::new(3, 2);

        assert_eq!(matrix.dim(), (3, 2));
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(matrix[row][col], 0.0);
            }
        }
    }

    #[test]
    fn take_drains_into_empty() {
        let mut matrix = Matrix::from_array([[1.0, 2.0]]);
        let taken = std::mem::take(&mut matrix);

        assert_eq!(taken.dim(), (1, 2));
        assert_eq!(matrix.dim(), (0, 0));
    }

    #[test]
    fn matrix_map() {
        let mut matrix = Matrix::from_array([[1.0, 2.0], [2.0, 2.0], [4.0, 8.0]]);

        matrix.map(|x| x / 2.0);

        assert_eq!(
            matrix,
            Matrix::from_array([[0.5, 1.0], [1.0, 1.0], [2.0, 4.0]])
        );
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut matrix = Matrix::new(10, 10);
        matrix.randomize(&mut rng);

        for row in 0..10 {
            for col in 0..10 {
                let x = matrix[row][col];
                assert!((-1.0..=1.0).contains(&x));
            }
        }
    }

    #[test]
    fn mutate_rate_zero_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut matrix = Matrix::new(5, 5);
        matrix.randomize(&mut rng);

        let before = matrix.clone();
        matrix.mutate(0.0, &mut rng);

        assert_eq!(matrix, before);
    }

    #[test]
    fn mutate_rate_one_replaces_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut matrix = Matrix::new(10, 10);
        matrix.randomize(&mut rng);

        let before = matrix.clone();
        matrix.mutate(1.0, &mut rng);

        assert_ne!(matrix, before);
        for row in 0..10 {
            for col in 0..10 {
                let x = matrix[row][col];
                assert!((-1.0..=1.0).contains(&x));
            }
        }
    }

    #[test]
    fn approx_eq_zero_err_matches_exact_equality() {
        let a = Matrix::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = a.clone();
        let c = Matrix::from_array([[1.0, 2.0], [3.0, 4.000001]]);

        assert!(a.approx_eq(&b, 0.0));
        assert_eq!(a == b, a.approx_eq(&b, 0.0));
        assert_eq!(a == c, a.approx_eq(&c, 0.0));
    }

    #[test]
    fn approx_eq_within_tolerance() {
        let a = Matrix::from_array([[1.0, 2.0]]);
        let b = Matrix::from_array([[1.05, 1.95]]);

        assert!(a.approx_eq(&b, 0.1));
        assert!(!a.approx_eq(&b, 0.01));
    }

    #[test]
    fn approx_eq_shape_mismatch_is_false() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(3, 2);

        assert!(!a.approx_eq(&b, 100.0));
        assert!(a != b);
    }
}
