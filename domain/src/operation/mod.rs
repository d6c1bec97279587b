//! Operation requests and dispatch.
//!
//! - [`kind::OperationKind`]: which operation, and what input it needs next
//! - [`request::OperationRequest`]: an operation with all its operands
//! - [`request::Outcome`]: matrix or scalar result
//! - [`engine::apply`]: limit checks and dispatch to [`crate::matrix::ops`]

pub mod engine;
pub mod kind;
pub mod request;
