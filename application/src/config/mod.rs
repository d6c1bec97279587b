//! Application-level configuration.
//!
//! - [`EngineParams`]: result precision and operand size limits

pub mod engine_params;

pub use engine_params::{EngineParams, MAX_PRECISION};
