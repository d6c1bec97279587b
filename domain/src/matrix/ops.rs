//! Matrix operations.
//!
//! Every function takes its operands by reference and returns a fresh
//! matrix. Shape preconditions are checked first and reported as
//! [`MatrixError::Shape`]; a result that overflowed to a non-finite value
//! is reported as [`MatrixError::Numeric`] rather than returned.
//!
//! | Function | Requirement |
//! |----------|-------------|
//! | [`add`], [`subtract`] | same shape |
//! | [`multiply`] | `a.ncols() == b.nrows()` |
//! | [`determinant`] | square |
//! | [`transpose`] | none |
//! | [`power`] | square, invertible when `n < 0` |

use crate::core::error::MatrixError;
use crate::core::shape::ShapeRequirement;
use crate::matrix::entities::Matrix;
use crate::matrix::lu::LuDecomposition;
use crate::operation::kind::OperationKind;

/// Elementwise sum of two matrices of the same shape.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(OperationKind::Add, a, b, |x, y| x + y)
}

/// Elementwise difference `a - b` of two matrices of the same shape.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(OperationKind::Subtract, a, b, |x, y| x - y)
}

/// Matrix product of an RxK and a KxC matrix.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::shape(
            OperationKind::Multiply,
            ShapeRequirement::Rows(a.ncols()),
            b.shape(),
        ));
    }
    finite(OperationKind::Multiply, matmul(a, b))
}

/// Determinant of a square matrix, computed through LU factorisation.
pub fn determinant(a: &Matrix) -> Result<f64, MatrixError> {
    require_square(OperationKind::Determinant, a)?;
    let det = LuDecomposition::new(a).determinant();
    if det.is_finite() {
        Ok(det)
    } else {
        Err(MatrixError::numeric(
            OperationKind::Determinant,
            "determinant is out of the representable range",
        ))
    }
}

/// Transpose: `result[j][i] == a[i][j]`. Never fails.
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = (a.nrows(), a.ncols());
    let src = a.as_slice();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(src[i * cols + j]);
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// Integer power of a square matrix.
///
/// `n == 0` gives the identity of the same size; `n < 0` raises the inverse
/// to `|n|`. Uses binary exponentiation, so the cost grows with `log2(|n|)`.
pub fn power(a: &Matrix, n: i64) -> Result<Matrix, MatrixError> {
    require_square(OperationKind::Power, a)?;

    let base = if n < 0 {
        invert(OperationKind::Power, a)?
    } else {
        a.clone()
    };

    let mut exponent = n.unsigned_abs();
    let mut result = Matrix::identity(a.nrows())?;
    let mut square = base;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = matmul(&result, &square);
        }
        exponent >>= 1;
        if exponent > 0 {
            square = matmul(&square, &square);
        }
        if !result.is_finite() || !square.is_finite() {
            return Err(overflow(OperationKind::Power));
        }
    }
    Ok(result)
}

fn elementwise(
    operation: OperationKind,
    a: &Matrix,
    b: &Matrix,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::shape(
            operation,
            ShapeRequirement::SameAs(a.shape()),
            b.shape(),
        ));
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    finite(operation, Matrix::from_parts(a.nrows(), a.ncols(), data))
}

fn matmul(a: &Matrix, b: &Matrix) -> Matrix {
    let (rows, inner, cols) = (a.nrows(), a.ncols(), b.ncols());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for k in 0..inner {
            let factor = lhs[i * inner + k];
            for j in 0..cols {
                data[i * cols + j] += factor * rhs[k * cols + j];
            }
        }
    }
    Matrix::from_parts(rows, cols, data)
}

fn invert(operation: OperationKind, a: &Matrix) -> Result<Matrix, MatrixError> {
    require_square(operation, a)?;
    let inverse = LuDecomposition::new(a)
        .inverse()
        .ok_or_else(|| MatrixError::numeric(operation, "matrix is singular and has no inverse"))?;
    finite(operation, inverse)
}

fn require_square(operation: OperationKind, a: &Matrix) -> Result<(), MatrixError> {
    if a.is_square() {
        Ok(())
    } else {
        Err(MatrixError::shape(
            operation,
            ShapeRequirement::Square,
            a.shape(),
        ))
    }
}

fn finite(operation: OperationKind, m: Matrix) -> Result<Matrix, MatrixError> {
    if m.is_finite() {
        Ok(m)
    } else {
        Err(overflow(operation))
    }
}

fn overflow(operation: OperationKind) -> MatrixError {
    MatrixError::numeric(operation, "result is out of the representable range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Shape;

    const TOL: f64 = 1e-9;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn a2() -> Matrix {
        m(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
    }

    fn samples() -> Vec<Matrix> {
        vec![
            m(vec![vec![1.0]]),
            a2(),
            m(vec![vec![1.5, -2.0, 0.25], vec![3.0, 0.0, -7.5]]),
            m(vec![
                vec![2.0, -1.0, 0.0],
                vec![-1.0, 2.0, -1.0],
                vec![0.0, -1.0, 2.0],
            ]),
        ]
    }

    // ==================== Concrete scenarios ====================

    #[test]
    fn test_add_scenario() {
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(add(&a2(), &b).unwrap(), m(vec![vec![6.0, 8.0], vec![10.0, 12.0]]));
    }

    #[test]
    fn test_multiply_scenario() {
        let b = m(vec![vec![2.0, 0.0], vec![1.0, 2.0]]);
        assert_eq!(
            multiply(&a2(), &b).unwrap(),
            m(vec![vec![4.0, 4.0], vec![10.0, 8.0]])
        );
    }

    #[test]
    fn test_determinant_scenario() {
        assert!((determinant(&a2()).unwrap() - (-2.0)).abs() < TOL);
    }

    #[test]
    fn test_transpose_scenario() {
        assert_eq!(transpose(&a2()), m(vec![vec![1.0, 3.0], vec![2.0, 4.0]]));
    }

    #[test]
    fn test_power_zero_scenario() {
        assert_eq!(power(&a2(), 0).unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_add_shape_mismatch_scenario() {
        let err = add(&m(vec![vec![1.0, 2.0]]), &a2()).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Shape {
                operation: OperationKind::Add,
                expected: ShapeRequirement::SameAs(Shape::new(1, 2)),
                actual: Shape::new(2, 2),
            }
        );
    }

    // ==================== Algebraic properties ====================

    #[test]
    fn test_add_commutative_and_associative() {
        for a in samples() {
            let b = transpose(&transpose(&a)); // same shape, same values
            let c = power_like(&a);
            assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
            let left = add(&add(&a, &b).unwrap(), &c).unwrap();
            let right = add(&a, &add(&b, &c).unwrap()).unwrap();
            assert!(left.approx_eq(&right, TOL));
        }
    }

    /// A matrix of the same shape with different values
    fn power_like(a: &Matrix) -> Matrix {
        let data = a.as_slice().iter().map(|v| v * v - 1.0).collect();
        Matrix::from_vec(a.nrows(), a.ncols(), data).unwrap()
    }

    #[test]
    fn test_transpose_involutive() {
        for a in samples() {
            assert_eq!(transpose(&transpose(&a)), a);
            assert_eq!(transpose(&a).shape(), a.shape().transposed());
        }
    }

    #[test]
    fn test_multiply_shape_law() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]); // 2x3
        let b = m(vec![vec![1.0], vec![0.0], vec![-1.0]]); // 3x1
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), Shape::new(2, 1));
        assert_eq!(product.to_rows(), vec![vec![-2.0], vec![-2.0]]);

        let err = multiply(&b, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Shape {
                operation: OperationKind::Multiply,
                expected: ShapeRequirement::Rows(1),
                actual: Shape::new(3, 1),
            }
        );
    }

    #[test]
    fn test_power_laws() {
        for a in samples().into_iter().filter(Matrix::is_square) {
            assert_eq!(power(&a, 0).unwrap(), Matrix::identity(a.nrows()).unwrap());
            assert!(power(&a, 1).unwrap().approx_eq(&a, TOL));
            let squared = multiply(&a, &a).unwrap();
            assert!(power(&a, 2).unwrap().approx_eq(&squared, TOL));
            let cubed = multiply(&squared, &a).unwrap();
            assert!(power(&a, 3).unwrap().approx_eq(&cubed, TOL));
        }
    }

    #[test]
    fn test_power_large_exponent_matches_repeated_multiplication() {
        let a = m(vec![vec![1.0, 1.0], vec![1.0, 0.0]]);
        let mut expected = Matrix::identity(2).unwrap();
        for _ in 0..10 {
            expected = multiply(&expected, &a).unwrap();
        }
        // Fibonacci: [[F11, F10], [F10, F9]]
        assert_eq!(power(&a, 10).unwrap(), expected);
        assert_eq!(expected.row(0), &[89.0, 55.0]);
    }

    #[test]
    fn test_negative_power() {
        let inv = power(&a2(), -1).unwrap();
        assert!(inv.approx_eq(&m(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]), TOL));

        let product = multiply(&power(&a2(), -2).unwrap(), &power(&a2(), 2).unwrap()).unwrap();
        assert!(product.approx_eq(&Matrix::identity(2).unwrap(), 1e-8));
    }

    #[test]
    fn test_negative_power_singular() {
        let singular = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let err = power(&singular, -1).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Numeric {
                operation: OperationKind::Power,
                ..
            }
        ));
        // Non-negative powers of a singular matrix are fine.
        assert!(power(&singular, 2).is_ok());
    }

    #[test]
    fn test_power_extreme_exponent_does_not_panic() {
        assert!(power(&Matrix::identity(2).unwrap(), i64::MIN).is_ok());
        assert!(power(&Matrix::identity(2).unwrap(), i64::MAX).is_ok());
    }

    #[test]
    fn test_power_non_square() {
        let err = power(&m(vec![vec![1.0, 2.0]]), 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Shape {
                operation: OperationKind::Power,
                expected: ShapeRequirement::Square,
                actual: Shape::new(1, 2),
            }
        );
    }

    #[test]
    fn test_power_overflow_is_numeric_error() {
        let big = m(vec![vec![1e200, 0.0], vec![0.0, 1e200]]);
        let err = power(&big, 3).unwrap_err();
        assert_eq!(err.category(), "numeric");
    }

    #[test]
    fn test_determinant_2x2_formula() {
        let cases = [(1.0, 2.0, 3.0, 4.0), (0.5, -3.0, 2.0, 7.25), (0.0, 1.0, 1.0, 0.0)];
        for (a, b, c, d) in cases {
            let det = determinant(&m(vec![vec![a, b], vec![c, d]])).unwrap();
            assert!((det - (a * d - b * c)).abs() < TOL);
        }
    }

    #[test]
    fn test_determinant_non_square() {
        let err = determinant(&m(vec![vec![1.0, 2.0, 3.0]])).unwrap_err();
        assert_eq!(err.category(), "shape");
    }

    #[test]
    fn test_determinant_singular_is_computed_value() {
        let det = determinant(&m(vec![vec![1.0, 2.0], vec![2.0, 4.0]])).unwrap();
        assert!(det.abs() < TOL);
    }

    fn diag(values: &[f64]) -> Matrix {
        let n = values.len();
        let mut rows = vec![vec![0.0; n]; n];
        for (i, &v) in values.iter().enumerate() {
            rows[i][i] = v;
        }
        m(rows)
    }

    #[test]
    fn test_determinant_with_huge_pivots_in_range() {
        let det = determinant(&diag(&[1e200, 1e200, 1e-200])).unwrap();
        assert!((det / 1e200 - 1.0).abs() < 1e-12, "det = {}", det);
    }

    #[test]
    fn test_determinant_with_tiny_pivots_in_range() {
        let det = determinant(&diag(&[1e-200, 1e-200, 1e200])).unwrap();
        assert!((det / 1e-200 - 1.0).abs() < 1e-12, "det = {}", det);
    }

    #[test]
    fn test_determinant_out_of_range_is_numeric_error() {
        let err = determinant(&diag(&[1e200, 1e200])).unwrap_err();
        assert_eq!(err.category(), "numeric");
    }

    #[test]
    fn test_subtract() {
        let diff = subtract(&a2(), &a2()).unwrap();
        assert_eq!(diff, m(vec![vec![0.0, 0.0], vec![0.0, 0.0]]));
        assert!(subtract(&a2(), &m(vec![vec![1.0]])).is_err());
    }

    #[test]
    fn test_operands_untouched() {
        let a = a2();
        let before = a.clone();
        let _ = add(&a, &a).unwrap();
        let _ = power(&a, 5).unwrap();
        let _ = transpose(&a);
        assert_eq!(a, before);
    }
}
