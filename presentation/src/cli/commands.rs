//! CLI command definitions

use clap::{Parser, ValueEnum};
use matrix_domain::{OperationKind, OutputFormat};
use std::path::PathBuf;

/// Operation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    /// Element-wise sum of two matrices of equal shape
    Add,
    /// Element-wise difference of two matrices of equal shape
    Sub,
    /// Matrix product
    Mul,
    /// Determinant of a square matrix
    Det,
    /// Transpose
    Trans,
    /// Integer power of a square matrix
    Power,
}

impl From<OperationArg> for OperationKind {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Add => OperationKind::Add,
            OperationArg::Sub => OperationKind::Subtract,
            OperationArg::Mul => OperationKind::Multiply,
            OperationArg::Det => OperationKind::Determinant,
            OperationArg::Trans => OperationKind::Transpose,
            OperationArg::Power => OperationKind::Power,
        }
    }
}

/// Output format for one-shot results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Rendered matrix or scalar
    Plain,
    /// JSON object with raw and rendered result
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for matrix-chat
#[derive(Parser, Debug)]
#[command(name = "matrix-chat")]
#[command(author, version, about = "Conversational matrix calculator")]
#[command(long_about = r#"
matrix-chat performs matrix arithmetic either interactively or in one shot.

Without an operation it starts a chat: pick an operation with a slash
command, then type each matrix row by row and finish it with an empty line.

Matrices are written one row per line, numbers separated by whitespace:

  1 2
  3 4

Configuration files are loaded from (in priority order):
1. MATRIX_CHAT_* environment variables
2. --config <path>          Explicit config file
3. ./matrix-chat.toml       Project-level config
4. ~/.config/matrix-chat/config.toml   Global config

Example:
  matrix-chat
  matrix-chat mul --first a.txt --second b.txt
  matrix-chat power --first a.txt --exponent -1 --output json
  cat a.txt | matrix-chat det --first -
"#)]
pub struct Cli {
    /// Operation to run once (starts the chat when omitted)
    #[arg(value_enum)]
    pub operation: Option<OperationArg>,

    /// File holding the first matrix ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub first: Option<PathBuf>,

    /// File holding the second matrix (add, sub, mul)
    #[arg(long, value_name = "FILE")]
    pub second: Option<PathBuf>,

    /// Integer exponent (power)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub exponent: Option<String>,

    /// Fractional digits in rendered results
    #[arg(short, long, value_name = "N")]
    pub precision: Option<usize>,

    /// Largest accepted row or column count
    #[arg(long, value_name = "N")]
    pub max_dimension: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print results and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Operation to run once, if any.
    pub fn operation(&self) -> Option<OperationKind> {
        self.operation.map(OperationKind::from)
    }
}
