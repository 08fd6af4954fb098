//! CLI 配置
//!
//! 读取 JSON 配置文件，并换算成 tracing 的日志级别

use std::path::Path;

use lamb_config::{DriverConfig, LogLevel, Phase};
use tracing::Level;

use crate::error::CliError;

/// 未指定 `--config` 时尝试读取的文件
pub const DEFAULT_CONFIG_FILE: &str = "lamb.json";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
        }
    }
}

impl LogConfig {
    pub fn from_driver(config: &DriverConfig) -> Self {
        Self {
            global: to_tracing_level(config.log_level),
            lexer: config.lexer_log_level.map(to_tracing_level),
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// 读取配置文件
///
/// 显式指定的路径必须存在；未指定时 `lamb.json` 不存在则使用默认配置
pub fn load_driver_config(explicit: Option<&Path>) -> Result<DriverConfig, CliError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(DriverConfig::default());
            }
            fallback
        }
    };

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    DriverConfig::from_json(&content).map_err(|source| CliError::Config {
        path: path.display().to_string(),
        source,
    })
}
