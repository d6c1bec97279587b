//! Line-oriented chat session.
//!
//! Turns raw input lines into [`HandleMessageUseCase`] calls. A matrix is
//! typed one row per line and submitted when an empty line arrives; an
//! exponent is submitted as soon as its line is read.

use crate::output::console::ConsoleFormatter;
use matrix_application::{HandleMessageUseCase, Reply};
use matrix_domain::{ConversationId, Expecting, OperationKind};
use tracing::debug;

/// What the REPL should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print this text and keep reading
    Print(String),
    /// Nothing to print (a matrix row was buffered)
    Continue,
    /// Leave the chat
    Quit,
}

/// One chat conversation driven by input lines.
pub struct ChatSession {
    handler: HandleMessageUseCase,
    id: ConversationId,
    rows: Vec<String>,
}

impl ChatSession {
    pub fn new(handler: HandleMessageUseCase, id: ConversationId) -> Self {
        Self {
            handler,
            id,
            rows: Vec::new(),
        }
    }

    /// Prompt string for the next line
    pub async fn prompt(&self) -> &'static str {
        match self.handler.expecting(&self.id).await {
            None => "matrix> ",
            Some(Expecting::Exponent) => "exponent> ",
            Some(_) if self.rows.is_empty() => "row> ",
            Some(_) => "...> ",
        }
    }

    /// Handle one input line
    pub async fn handle_line(&mut self, line: &str) -> LineOutcome {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return self.handle_command(trimmed).await;
        }

        match self.handler.expecting(&self.id).await {
            None => {
                self.rows.clear();
                if trimmed.is_empty() {
                    LineOutcome::Continue
                } else {
                    LineOutcome::Print(ConsoleFormatter::format_reply(&Reply::ChooseOperation))
                }
            }
            Some(Expecting::Exponent) => {
                if trimmed.is_empty() {
                    return LineOutcome::Continue;
                }
                self.submit(trimmed.to_string()).await
            }
            Some(_) => {
                if !trimmed.is_empty() {
                    self.rows.push(trimmed.to_string());
                    return LineOutcome::Continue;
                }
                if self.rows.is_empty() {
                    return LineOutcome::Continue;
                }
                let text = std::mem::take(&mut self.rows).join("\n");
                self.submit(text).await
            }
        }
    }

    async fn submit(&mut self, text: String) -> LineOutcome {
        let reply = self.handler.submit(&self.id, &text).await;
        LineOutcome::Print(ConsoleFormatter::format_reply(&reply))
    }

    async fn handle_command(&mut self, command: &str) -> LineOutcome {
        let name = command.trim_start_matches('/');
        match name {
            "quit" | "exit" | "q" => LineOutcome::Quit,
            "help" | "h" | "?" => LineOutcome::Print(ConsoleFormatter::help()),
            "cancel" | "c" => {
                self.rows.clear();
                let reply = self.handler.cancel(&self.id).await;
                LineOutcome::Print(ConsoleFormatter::format_reply(&reply))
            }
            _ => match name.parse::<OperationKind>() {
                Ok(operation) => {
                    if !self.rows.is_empty() {
                        debug!("Discarding {} buffered row(s)", self.rows.len());
                        self.rows.clear();
                    }
                    let reply = self.handler.select(&self.id, operation).await;
                    LineOutcome::Print(ConsoleFormatter::format_reply(&reply))
                }
                Err(_) => LineOutcome::Print(format!(
                    "Unknown command: {}\nType /help for available commands",
                    command
                )),
            },
        }
    }
}
