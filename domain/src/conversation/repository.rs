//! Conversation repository trait

use crate::conversation::entities::{Conversation, ConversationId};
use async_trait::async_trait;

/// Storage for per-conversation state, keyed by [`ConversationId`].
///
/// This is a domain-level abstraction; implementations live in the
/// infrastructure layer and decide how long an idle conversation is kept.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Fetch a conversation, or `None` if it never existed or has expired
    async fn load(&self, id: &ConversationId) -> Option<Conversation>;

    /// Insert or replace a conversation and refresh its idle timer
    async fn save(&self, conversation: Conversation);

    /// Forget a conversation
    async fn remove(&self, id: &ConversationId);
}
