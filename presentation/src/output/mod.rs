//! Output formatting for chat replies and one-shot results.

pub mod console;
