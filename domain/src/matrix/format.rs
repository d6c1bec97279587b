//! Matrix to text rendering.
//!
//! Output is the same grid the parser accepts: one row per line, values
//! separated by a single space, every value printed with the same number of
//! fractional digits. A value that rounds to zero is printed without a sign,
//! so `-0.001` at two digits is `0.00`, not `-0.00`.

use crate::matrix::entities::Matrix;

/// Fractional digits used when the caller has no preference
pub const DEFAULT_PRECISION: usize = 2;

/// Render a matrix with `precision` fractional digits.
///
/// # Examples
///
/// ```
/// use matrix_domain::matrix::{entities::Matrix, format::format_matrix};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 4.126]]).unwrap();
/// assert_eq!(format_matrix(&m, 2), "1.00 2.50\n-3.00 4.13");
/// ```
pub fn format_matrix(matrix: &Matrix, precision: usize) -> String {
    matrix
        .rows_iter()
        .map(|row| {
            row.iter()
                .map(|&v| format_scalar(v, precision))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single value with `precision` fractional digits.
pub fn format_scalar(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::parser::parse_matrix;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_format_default_precision() {
        let out = format_matrix(&m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), DEFAULT_PRECISION);
        assert_eq!(out, "1.00 2.00\n3.00 4.00");
    }

    #[test]
    fn test_format_zero_precision() {
        assert_eq!(format_matrix(&m(vec![vec![1.4, -2.6]]), 0), "1 -3");
    }

    #[test]
    fn test_negative_zero_unsigned() {
        assert_eq!(format_scalar(-0.0, 2), "0.00");
        assert_eq!(format_scalar(-0.004, 2), "0.00");
        assert_eq!(format_scalar(-0.006, 2), "-0.01");
        assert_eq!(format_scalar(-0.4, 0), "0");
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(-2.0, 2), "-2.00");
        assert_eq!(format_scalar(1.0 / 3.0, 4), "0.3333");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let samples = [
            m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            m(vec![vec![0.125, -7.777, 1e6], vec![-0.001, 3.14159, 2.5]]),
            m(vec![vec![-123.456]]),
            m(vec![vec![1.0 / 3.0], vec![2.0 / 3.0], vec![-1.0 / 7.0]]),
        ];
        for matrix in &samples {
            for precision in [0, 1, 2, 5] {
                let once = format_matrix(matrix, precision);
                let reparsed = parse_matrix(&once).unwrap();
                assert_eq!(format_matrix(&reparsed, precision), once);
            }
        }
    }
}
