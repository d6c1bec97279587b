//! Console output formatter for matrix-chat replies

use colored::Colorize;
use matrix_application::{ComputeOutput, Reply};
use matrix_domain::{Expecting, MatrixError, OperationKind};

/// Formats replies and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format a chat reply, including the follow-up prompt when one is needed
    pub fn format_reply(reply: &Reply) -> String {
        match reply {
            Reply::Prompt(expecting) => Self::prompt(*expecting),
            Reply::Result(output) => Self::format_result(output),
            Reply::Retry { error, expecting } => {
                format!("{}\n{}", Self::format_error(error), Self::prompt(*expecting))
            }
            Reply::ChooseOperation => format!(
                "{} {}",
                "Choose an operation first:".yellow(),
                Self::operation_commands()
            ),
            Reply::Cancelled => "Cancelled.".dimmed().to_string(),
        }
    }

    /// Instruction for the input a conversation is waiting for
    pub fn prompt(expecting: Expecting) -> String {
        let text = match expecting {
            Expecting::FirstMatrix => {
                "Enter the first matrix, one row per line, then an empty line:"
            }
            Expecting::SecondMatrix => {
                "Enter the second matrix, one row per line, then an empty line:"
            }
            Expecting::Exponent => "Enter an integer exponent:",
        };
        text.cyan().to_string()
    }

    /// Format a completed operation for the chat
    pub fn format_result(output: &ComputeOutput) -> String {
        format!(
            "{}\n{}",
            format!("Result of {}:", output.operation).green().bold(),
            Self::indent(&output.rendered, "  ")
        )
    }

    /// Rendered result only (one-shot plain output)
    pub fn format_plain(output: &ComputeOutput) -> String {
        output.rendered.clone()
    }

    /// Format as JSON
    pub fn format_json(output: &ComputeOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_error(error: &MatrixError) -> String {
        error.to_string().red().to_string()
    }

    /// Slash commands selecting each operation, e.g. `/add /sub ...`
    pub fn operation_commands() -> String {
        OperationKind::ALL
            .iter()
            .map(|op| format!("/{}", op.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Help text listing all chat commands
    pub fn help() -> String {
        let mut output = format!("{}\n", "Operations:".cyan().bold());
        for op in OperationKind::ALL {
            output.push_str(&format!("  /{:<8} {}\n", op.as_str(), op.display_name()));
        }
        output.push_str(&format!("\n{}\n", "Commands:".cyan().bold()));
        output.push_str("  /cancel   Drop the pending operation\n");
        output.push_str("  /help     Show this help\n");
        output.push_str("  /quit     Exit chat\n");
        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_domain::{Matrix, Outcome, ParseError};

    fn output() -> ComputeOutput {
        ComputeOutput {
            operation: OperationKind::Transpose,
            result: Outcome::Matrix(Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap()),
            rendered: "1.00\n2.00".to_string(),
        }
    }

    #[test]
    fn test_prompt_names_the_input() {
        assert!(ConsoleFormatter::prompt(Expecting::FirstMatrix).contains("first matrix"));
        assert!(ConsoleFormatter::prompt(Expecting::SecondMatrix).contains("second matrix"));
        assert!(ConsoleFormatter::prompt(Expecting::Exponent).contains("exponent"));
    }

    #[test]
    fn test_format_result_indents_rows() {
        let text = ConsoleFormatter::format_result(&output());
        assert!(text.contains("Result of transpose:"));
        assert!(text.contains("  1.00\n  2.00"));
    }

    #[test]
    fn test_format_plain_is_rendered_text() {
        assert_eq!(ConsoleFormatter::format_plain(&output()), "1.00\n2.00");
    }

    #[test]
    fn test_format_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&output())).unwrap();
        assert_eq!(json["operation"], "trans");
        assert_eq!(json["result"], serde_json::json!([[1.0], [2.0]]));
        assert_eq!(json["rendered"], "1.00\n2.00");
    }

    #[test]
    fn test_retry_shows_error_and_prompt() {
        let reply = Reply::Retry {
            error: MatrixError::Parse(ParseError::Empty),
            expecting: Expecting::SecondMatrix,
        };
        let text = ConsoleFormatter::format_reply(&reply);
        assert!(text.contains(&MatrixError::Parse(ParseError::Empty).to_string()));
        assert!(text.contains("second matrix"));
    }

    #[test]
    fn test_choose_operation_lists_commands() {
        let text = ConsoleFormatter::format_reply(&Reply::ChooseOperation);
        assert!(text.contains("/add /sub /mul /det /trans /power"));
    }

    #[test]
    fn test_help_lists_every_operation() {
        let help = ConsoleFormatter::help();
        for op in OperationKind::ALL {
            assert!(help.contains(&format!("/{}", op.as_str())));
        }
        assert!(help.contains("/cancel"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
