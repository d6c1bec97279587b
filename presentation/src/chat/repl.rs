//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::chat::session::{ChatSession, LineOutcome};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use matrix_application::HandleMessageUseCase;
use matrix_domain::ConversationId;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::warn;

/// Conversation id used by the single local chat
const LOCAL_CONVERSATION: &str = "local";

/// Interactive chat REPL
pub struct ChatRepl {
    handler: HandleMessageUseCase,
    show_banner: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(handler: HandleMessageUseCase) -> Self {
        Self {
            handler,
            show_banner: true,
            history_file: Self::default_history_file(),
        }
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("matrix-chat").join("history.txt"))
    }

    /// Run the interactive REPL
    pub async fn run(self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                warn!("Could not create history directory {}: {}", parent.display(), e);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            Self::print_welcome();
        }

        let mut session = ChatSession::new(self.handler, ConversationId::new(LOCAL_CONVERSATION));

        loop {
            let prompt = session.prompt().await;
            match rl.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }

                    match session.handle_line(&line).await {
                        LineOutcome::Print(text) => {
                            println!("{}", text);
                        }
                        LineOutcome::Continue => {}
                        LineOutcome::Quit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome() {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│             matrix-chat - Chat Mode         │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        println!("Pick an operation, then type each matrix one row per line.");
        println!("An empty line finishes a matrix.");
        println!();
        print!("{}", ConsoleFormatter::help());
        println!();
    }
}
