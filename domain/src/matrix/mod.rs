//! The matrix core: type, text parsing, linear algebra, rendering.
//!
//! - [`entities::Matrix`]: immutable rectangular grid of `f64`
//! - [`parser`]: text → matrix, text → exponent
//! - [`ops`]: add, subtract, multiply, determinant, transpose, power
//! - `lu`: LU factorisation behind determinant and inversion
//! - [`format`]: matrix → text with fixed precision
//! - [`limits::MatrixLimits`]: dimension cap checked before computing

pub mod entities;
pub mod format;
pub mod limits;
pub(crate) mod lu;
pub mod ops;
pub mod parser;
