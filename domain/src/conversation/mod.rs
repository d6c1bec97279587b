//! Per-conversation state for the chat front-end.
//!
//! Each conversation is an explicit [`entities::Conversation`] value keyed
//! by [`entities::ConversationId`] and kept in a
//! [`repository::ConversationRepository`]; there is no global session state.

pub mod entities;
pub mod repository;
