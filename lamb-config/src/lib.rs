//! Lamb Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary between the Lamb crates.

use serde::Deserialize;

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("lamb::{}", self.as_str())
    }
}

/// 日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, `silent` maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Token 输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一个 token
    #[default]
    Text,
    /// JSON 数组
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Configuration for the token-printing driver
///
/// Every field is optional in the JSON file; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Token output format
    pub output: OutputFormat,
    /// Global log level
    pub log_level: LogLevel,
    /// Log level override for the lexer phase
    pub lexer_log_level: Option<LogLevel>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_level: LogLevel::Warn,
            lexer_log_level: None,
        }
    }
}

impl DriverConfig {
    /// Parse a JSON document into a config
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_driver_config() {
        let cfg = DriverConfig::default();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(cfg.lexer_log_level, None);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Lexer.target(), "lamb::lexer");
        assert_eq!(Phase::Cli.target(), "lamb::cli");
    }

    #[test]
    fn test_config_from_json() {
        let cfg = DriverConfig::from_json(
            r#"{ "output": "json", "log_level": "info", "lexer_log_level": "trace" }"#,
        )
        .unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.lexer_log_level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_config_partial_json() {
        let cfg = DriverConfig::from_json(r#"{ "output": "json" }"#).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(cfg.lexer_log_level, None);
    }

    #[test]
    fn test_config_rejects_unknown_level() {
        assert!(DriverConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(LogLevel::parse("SILENT"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(OutputFormat::parse("Json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }
}
