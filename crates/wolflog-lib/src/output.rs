//! Serialization of parsed documents and projections

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Supported output encodings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown output format '{other}', expected json or yaml")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Render `value` in the requested format; `pretty` only affects JSON
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolflog_types::GameLog;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" YML ".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("toml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_yaml_uses_camel_case_keys() {
        let text = render(&GameLog::default(), OutputFormat::Yaml, false).unwrap();
        assert!(text.contains("gameId:"));
        assert!(text.contains("startTime:"));
        assert!(text.contains("rounds: []"));
    }

    #[test]
    fn test_render_compact_json_is_single_line() {
        let text = render(&GameLog::default(), OutputFormat::Json, false).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"gameId\":\"\""));
    }
}
