//! Core domain concepts shared across all subdomains.
//!
//! - [`shape::Shape`]: matrix dimensions and shape requirements
//! - [`error::MatrixError`]: the error taxonomy of the matrix core

pub mod error;
pub mod shape;
