//! Handle Message use case.
//!
//! The conversation controller: turns chat-level events (operation chosen,
//! text received, cancel) into conversation state changes and engine calls.
//!
//! ```text
//! select(op) ──► AwaitingFirst ──submit──► [unary]  compute ──► Result
//!                                     └──► AwaitingSecond ──submit──► compute ──► Result
//! ```
//!
//! Invalid input produces [`Reply::Retry`] and leaves the conversation
//! waiting for the same input. A completed conversation is removed from
//! the repository.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::compute::{ComputeOutput, ComputeUseCase};
use matrix_domain::{
    Conversation, ConversationError, ConversationId, ConversationRepository, Expecting,
    MatrixError, OperationKind, Step,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// What the front-end should say back to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Ask for the next input
    Prompt(Expecting),
    /// The operation completed
    Result(ComputeOutput),
    /// The input was rejected; ask for the same input again
    Retry {
        error: MatrixError,
        expecting: Expecting,
    },
    /// Text arrived while no operation was selected
    ChooseOperation,
    /// The pending operation was dropped
    Cancelled,
}

/// Use case driving one message of a conversation.
///
/// Per-conversation state lives in the injected [`ConversationRepository`],
/// keyed by [`ConversationId`]; the use case itself holds no conversation
/// state and can be shared across tasks.
pub struct HandleMessageUseCase {
    repository: Arc<dyn ConversationRepository>,
    compute: ComputeUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for HandleMessageUseCase {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            compute: self.compute.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl HandleMessageUseCase {
    pub fn new(repository: Arc<dyn ConversationRepository>, compute: ComputeUseCase) -> Self {
        Self {
            repository,
            compute,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Start collecting operands for `operation`, discarding any pending one.
    pub async fn select(&self, id: &ConversationId, operation: OperationKind) -> Reply {
        let mut conversation = self
            .repository
            .load(id)
            .await
            .unwrap_or_else(|| Conversation::new(id.clone()));
        conversation.select(operation);
        self.repository.save(conversation).await;

        debug!("[{}] selected {}", id, operation);
        self.log(
            "operation_selected",
            json!({ "conversation": id.as_str(), "operation": operation }),
        );
        Reply::Prompt(Expecting::FirstMatrix)
    }

    /// Feed one text message into the conversation.
    pub async fn submit(&self, id: &ConversationId, text: &str) -> Reply {
        let Some(mut conversation) = self.repository.load(id).await else {
            return Reply::ChooseOperation;
        };
        let limits = self.compute.params().limits;

        match conversation.submit(text, &limits) {
            Err(ConversationError::NoOperation) => Reply::ChooseOperation,
            Err(ConversationError::Input(error)) => {
                let expecting = conversation.expecting().unwrap_or(Expecting::FirstMatrix);
                self.repository.save(conversation).await;
                self.reject(id, error, expecting)
            }
            Ok(Step::NeedSecond(_)) => {
                let expecting = conversation.expecting().unwrap_or(Expecting::SecondMatrix);
                self.repository.save(conversation).await;
                self.log(
                    "operand_accepted",
                    json!({ "conversation": id.as_str(), "next": expecting }),
                );
                Reply::Prompt(expecting)
            }
            Ok(Step::Ready(request)) => match self.compute.execute(&request) {
                Ok(output) => {
                    self.repository.remove(id).await;
                    info!("[{}] {} done", id, output.operation);
                    self.log(
                        "result",
                        json!({
                            "conversation": id.as_str(),
                            "operation": output.operation,
                            "result": output.result,
                        }),
                    );
                    Reply::Result(output)
                }
                Err(error) => {
                    conversation.resume_after_failure(&request);
                    let expecting = conversation.expecting().unwrap_or(Expecting::FirstMatrix);
                    self.repository.save(conversation).await;
                    self.reject(id, error, expecting)
                }
            },
        }
    }

    /// Drop the pending operation, if any.
    ///
    /// The `cancelled` event is only logged when an operation was pending.
    pub async fn cancel(&self, id: &ConversationId) -> Reply {
        let Some(conversation) = self.repository.load(id).await else {
            return Reply::Cancelled;
        };
        self.repository.remove(id).await;
        if !conversation.is_idle() {
            self.log("cancelled", json!({ "conversation": id.as_str() }));
        }
        Reply::Cancelled
    }

    /// What the conversation is currently waiting for.
    pub async fn expecting(&self, id: &ConversationId) -> Option<Expecting> {
        self.repository
            .load(id)
            .await
            .and_then(|conversation| conversation.expecting())
    }

    fn reject(&self, id: &ConversationId, error: MatrixError, expecting: Expecting) -> Reply {
        debug!("[{}] rejected input: {}", id, error);
        self.log(
            "input_rejected",
            json!({
                "conversation": id.as_str(),
                "category": error.category(),
                "error": error.to_string(),
                "expecting": expecting,
            }),
        );
        Reply::Retry { error, expecting }
    }

    fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }
}
