//! Output format value object

use serde::{Deserialize, Serialize};

/// How a computed result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text grid (default)
    #[default]
    Plain,
    /// JSON object with the raw result and its rendering
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid OutputFormat: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
