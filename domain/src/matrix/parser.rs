//! Text to matrix parsing.
//!
//! Pure functions, no I/O. The accepted format is the one a user types into
//! a chat box: one row per line, values separated by any run of whitespace.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! ```
//!
//! Blank lines before the first row and after the last row are ignored.
//! A blank line between rows is rejected, so a stray empty line never
//! silently merges two matrices into one.

use crate::core::error::{MatrixError, ParseError};
use crate::matrix::entities::Matrix;
use crate::matrix::limits::MatrixLimits;

/// Parse a matrix from text.
///
/// # Examples
///
/// ```
/// use matrix_domain::matrix::parser::parse_matrix;
///
/// let m = parse_matrix("1 2\n3 4").unwrap();
/// assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert!(parse_matrix("1 2\n3").is_err());
/// ```
pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let is_blank = |line: &&str| line.trim().is_empty();
    let first = lines
        .iter()
        .position(|l| !is_blank(l))
        .ok_or(ParseError::Empty)?;
    let last = lines
        .iter()
        .rposition(|l| !is_blank(l))
        .ok_or(ParseError::Empty)?;

    let mut cols = 0;
    let mut data = Vec::new();
    let mut rows = 0;

    for (offset, line) in lines[first..=last].iter().enumerate() {
        let line_no = first + offset + 1;
        if is_blank(line) {
            return Err(ParseError::BlankLine { line: line_no }.into());
        }

        let row = parse_row(line, line_no)?;
        if rows == 0 {
            cols = row.len();
        } else if row.len() != cols {
            return Err(ParseError::Ragged {
                line: line_no,
                expected: cols,
                found: row.len(),
            }
            .into());
        }
        data.extend(row);
        rows += 1;
    }

    Matrix::from_vec(rows, cols, data)
}

/// Parse a matrix and reject it if it is larger than `limits` allow.
pub fn parse_matrix_with_limits(text: &str, limits: &MatrixLimits) -> Result<Matrix, MatrixError> {
    let matrix = parse_matrix(text)?;
    limits.check(&matrix)?;
    Ok(matrix)
}

/// Parse a signed integer exponent for the power operation.
pub fn parse_exponent(text: &str) -> Result<i64, MatrixError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| {
        ParseError::InvalidExponent {
            input: trimmed.to_string(),
        }
        .into()
    })
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, ParseError> {
    line.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Shape;

    fn parse_err(text: &str) -> ParseError {
        match parse_matrix(text) {
            Err(MatrixError::Parse(e)) => e,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_square() {
        let m = parse_matrix("1 2\n3 4").unwrap();
        assert_eq!(m.shape(), Shape::new(2, 2));
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_whitespace_runs_and_crlf() {
        let m = parse_matrix("  1\t 2   3 \r\n4 5\t6\r\n").unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_parse_number_formats() {
        let m = parse_matrix("-1.5 +2 3e2 .25").unwrap();
        assert_eq!(m.row(0), &[-1.5, 2.0, 300.0, 0.25]);
    }

    #[test]
    fn test_parse_single_element() {
        let m = parse_matrix("7").unwrap();
        assert_eq!(m.shape(), Shape::new(1, 1));
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_ignored() {
        let m = parse_matrix("\n  \n1 2\n3 4\n\n   \n").unwrap();
        assert_eq!(m.shape(), Shape::new(2, 2));
    }

    #[test]
    fn test_interior_blank_line_rejected() {
        assert_eq!(parse_err("1 2\n\n3 4"), ParseError::BlankLine { line: 2 });
        assert_eq!(parse_err("\n1 2\n  \n3 4"), ParseError::BlankLine { line: 3 });
    }

    #[test]
    fn test_ragged_rejected() {
        assert_eq!(
            parse_err("1 2\n3"),
            ParseError::Ragged {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(parse_err(""), ParseError::Empty);
        assert_eq!(parse_err(" \n\t\n"), ParseError::Empty);
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert_eq!(
            parse_err("1 2\n3 x"),
            ParseError::InvalidNumber {
                line: 2,
                token: "x".to_string()
            }
        );
        assert_eq!(
            parse_err("1,5 2"),
            ParseError::InvalidNumber {
                line: 1,
                token: "1,5".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(parse_err("1 inf"), ParseError::InvalidNumber { .. }));
        assert!(matches!(parse_err("NaN 1"), ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_parse_with_limits() {
        let limits = MatrixLimits::new(2);
        assert!(parse_matrix_with_limits("1 2\n3 4", &limits).is_ok());
        let err = parse_matrix_with_limits("1 2 3", &limits).unwrap_err();
        assert_eq!(err.category(), "limit");
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_exponent(" 3 ").unwrap(), 3);
        assert_eq!(parse_exponent("-2").unwrap(), -2);
        assert_eq!(parse_exponent("+4").unwrap(), 4);
        assert_eq!(
            parse_exponent("2.5").unwrap_err(),
            MatrixError::Parse(ParseError::InvalidExponent {
                input: "2.5".to_string()
            })
        );
        assert!(parse_exponent("").is_err());
    }
}
