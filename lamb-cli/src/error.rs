//! CLI 错误类型

use lamb_core::LexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// 文件或 stdin 读取失败
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件不是合法的 JSON
    #[error("Invalid config '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// 命令行选项取值非法
    #[error("Invalid value '{value}' for --{option}")]
    InvalidOption { option: &'static str, value: String },

    /// 词法错误
    #[error("{0}")]
    Lex(#[from] LexError),

    /// token 序列化失败
    #[error("Failed to encode tokens: {0}")]
    Encode(#[from] serde_json::Error),
}
