//! Application use cases

pub mod compute;
pub mod handle_message;
