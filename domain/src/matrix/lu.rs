//! LU factorisation with partial pivoting.
//!
//! Backs the determinant and the matrix inverse used by negative powers.
//! Doolittle form: `P·A = L·U`, with `L` unit lower triangular and `U` upper
//! triangular, both kept in one row-major buffer.

use crate::matrix::entities::Matrix;

/// Factorisation of a square matrix
#[derive(Debug, Clone)]
pub(crate) struct LuDecomposition {
    n: usize,
    /// Strict lower part holds `L` (unit diagonal implied), upper part holds `U`
    lu: Vec<f64>,
    /// `perm[i]` is the row of the original matrix now at row `i`
    perm: Vec<usize>,
    /// Sign of the row permutation, +1 or -1
    sign: f64,
    singular: bool,
}

impl LuDecomposition {
    /// Factor a square matrix.
    ///
    /// # Panics
    /// Panics if `matrix` is not square; callers check the shape first.
    pub(crate) fn new(matrix: &Matrix) -> Self {
        assert!(matrix.is_square(), "LU factorisation needs a square matrix");
        let n = matrix.nrows();
        let mut lu = matrix.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;
        let mut singular = false;

        let scale = lu.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let tolerance = n as f64 * f64::EPSILON * scale;

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_abs = 0.0;
            for r in k..n {
                let abs = lu[r * n + k].abs();
                if abs > pivot_abs {
                    pivot_abs = abs;
                    pivot_row = r;
                }
            }

            if pivot_row != k {
                for c in 0..n {
                    lu.swap(k * n + c, pivot_row * n + c);
                }
                perm.swap(k, pivot_row);
                sign = -sign;
            }

            if pivot_abs <= tolerance {
                singular = true;
            }
            if pivot_abs == 0.0 {
                // Column already eliminated below the diagonal.
                continue;
            }

            let pivot = lu[k * n + k];
            for r in (k + 1)..n {
                let factor = lu[r * n + k] / pivot;
                lu[r * n + k] = factor;
                for c in (k + 1)..n {
                    lu[r * n + c] -= factor * lu[k * n + c];
                }
            }
        }

        Self {
            n,
            lu,
            perm,
            sign,
            singular,
        }
    }

    /// True if a pivot vanished (relative to the matrix scale)
    pub(crate) fn is_singular(&self) -> bool {
        self.singular
    }

    /// Determinant as computed from the factors, without special-casing
    /// nearly singular input.
    ///
    /// The pivot product is accumulated as a mantissa and a separate binary
    /// exponent, so intermediate products never overflow or underflow; only
    /// a final value outside the `f64` range comes out as `inf` or `0.0`.
    pub(crate) fn determinant(&self) -> f64 {
        let mut mantissa = self.sign;
        let mut exponent: i64 = 0;
        for i in 0..self.n {
            let (m, e) = frexp(mantissa * self.lu[i * self.n + i]);
            mantissa = m;
            exponent += i64::from(e);
            if mantissa == 0.0 {
                return 0.0;
            }
        }
        ldexp(mantissa, exponent)
    }

    /// Inverse of the factored matrix, or `None` if it is singular.
    pub(crate) fn inverse(&self) -> Option<Matrix> {
        if self.is_singular() {
            return None;
        }
        let n = self.n;
        let mut inverse = vec![0.0; n * n];
        let mut column = vec![0.0; n];

        for j in 0..n {
            for (i, value) in column.iter_mut().enumerate() {
                *value = if self.perm[i] == j { 1.0 } else { 0.0 };
            }

            // Forward substitution, L has a unit diagonal.
            for i in 0..n {
                let mut sum = column[i];
                for k in 0..i {
                    sum -= self.lu[i * n + k] * column[k];
                }
                column[i] = sum;
            }

            // Back substitution.
            for i in (0..n).rev() {
                let mut sum = column[i];
                for k in (i + 1)..n {
                    sum -= self.lu[i * n + k] * column[k];
                }
                column[i] = sum / self.lu[i * n + i];
            }

            for i in 0..n {
                inverse[i * n + j] = column[i];
            }
        }

        Some(Matrix::from_parts(n, n, inverse))
    }
}

/// Split a finite `x` into `m * 2^e` with `0.5 <= |m| < 1`; zero and
/// non-finite values come back unchanged with `e == 0`.
fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased == 0 {
        // Subnormal: scale into the normal range first.
        let (m, e) = frexp(x * 2f64.powi(64));
        return (m, e - 64);
    }
    let mantissa = f64::from_bits((bits & !(0x7ff << 52)) | (1022 << 52));
    (mantissa, biased - 1022)
}

/// `m * 2^e`, applied in two halves so a representable result is not lost
/// to an intermediate `2^e` overflowing or underflowing.
fn ldexp(m: f64, e: i64) -> f64 {
    let e = e.clamp(-4096, 4096) as i32;
    let half = e / 2;
    m * 2f64.powi(half) * 2f64.powi(e - half)
}
