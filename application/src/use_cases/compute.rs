//! Compute use case.
//!
//! Runs one fully collected [`OperationRequest`] through the engine and
//! renders the outcome with the configured precision.

use crate::config::EngineParams;
use matrix_domain::{MatrixError, OperationKind, OperationRequest, Outcome, apply};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Output of the [`ComputeUseCase`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeOutput {
    /// The operation that produced this result.
    pub operation: OperationKind,
    /// Raw result, a matrix or a scalar.
    pub result: Outcome,
    /// `result` rendered with the configured precision.
    pub rendered: String,
}

/// Use case for computing a single operation.
///
/// Stateless apart from its parameters, so one instance can be shared by
/// any number of concurrent conversations.
#[derive(Debug, Clone, Default)]
pub struct ComputeUseCase {
    params: EngineParams,
}

impl ComputeUseCase {
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Apply the operation and render its result.
    pub fn execute(&self, request: &OperationRequest) -> Result<ComputeOutput, MatrixError> {
        let operation = request.kind();
        debug!(
            "Computing {} on {}",
            operation,
            request
                .operands()
                .matrices()
                .iter()
                .map(|m| m.shape().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let result = apply(request, &self.params.limits).inspect_err(|e| {
            warn!("{} failed: {}", operation, e);
        })?;
        let rendered = result.render(self.params.precision);

        info!("{} completed", operation);
        Ok(ComputeOutput {
            operation,
            result,
            rendered,
        })
    }
}
