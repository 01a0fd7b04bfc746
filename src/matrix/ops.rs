use super::Matrix;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

// A mismatched operand in arithmetic is not an error: the receiver simply
// comes back unchanged. Only `Matrix::from_vec` rejects bad shapes outright.

impl Matrix {
    /// Returns a new matrix whose rows are this matrix's columns and
    /// whose columns are this matrix's rows. Never mutates the receiver.
    pub fn transposed(&self) -> Matrix {
        let mut m = Matrix::new(self.cols(), self.rows());

        for y in 0..self.rows() {
            for x in 0..self.cols() {
                m[x][y] = self[y][x];
            }
        }
        m
    }

    /// Standard matrix multiplication. The result has this matrix's row
    /// count and `mat`'s column count. If `mat`'s rows don't match this
    /// matrix's columns, a copy of the receiver is returned unchanged.
    pub fn product(&self, mat: &Matrix) -> Matrix {
        if mat.rows() != self.cols() {
            return self.clone();
        }

        let mut m = Matrix::new(self.rows(), mat.cols());
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += self[i][k] * mat[k][j];
                }
                m[i][j] = sum;
            }
        }
        m
    }
}

impl Add<f32> for &Matrix {
    type Output = Matrix;
    fn add(self, num: f32) -> Matrix {
        let mut m = self.clone();
        m += num;
        m
    }
}

impl AddAssign<f32> for Matrix {
    fn add_assign(&mut self, num: f32) {
        for x in &mut self.data {
            *x += num;
        }
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;
    fn mul(self, mul: f32) -> Matrix {
        let mut m = self.clone();
        m *= mul;
        m
    }
}

impl MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, mul: f32) {
        for x in &mut self.data {
            *x *= mul;
        }
    }
}

/// Adds two matrices element-wise.
impl Add<&Matrix> for &Matrix {
    type Output = Matrix;
    fn add(self, mat: &Matrix) -> Matrix {
        let mut m = self.clone();
        m += mat;
        m
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, mat: &Matrix) {
        if mat.dim != self.dim {
            // columns and rows don't match
            return;
        }

        for (x, y) in self.data.iter_mut().zip(&mat.data) {
            *x += y;
        }
    }
}

/// Subtracts two matrices element-wise.
impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;
    fn sub(self, mat: &Matrix) -> Matrix {
        let mut m = self.clone();
        m -= mat;
        m
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, mat: &Matrix) {
        if mat.dim != self.dim {
            // columns and rows don't match
            return;
        }

        for (x, y) in self.data.iter_mut().zip(&mat.data) {
            *x -= y;
        }
    }
}

/// Multiplies two matrices element-wise (the Hadamard product).
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, mat: &Matrix) -> Matrix {
        let mut m = self.clone();
        m *= mat;
        m
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, mat: &Matrix) {
        if mat.dim != self.dim {
            // columns and rows don't match
            return;
        }

        for (x, y) in self.data.iter_mut().zip(&mat.data) {
            *x *= y;
        }
    }
}
