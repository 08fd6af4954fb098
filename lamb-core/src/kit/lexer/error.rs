//! Lexer 错误类型
//!
//! 只有一种词法错误：消息 + 发生位置。

use super::core::SourcePosition;

/// 词法结果类型
pub type LexResult<T> = Result<T, LexError>;

/// 词法错误
///
/// 对当前一次读取是致命的，不做内部恢复
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({}:{})", .position.line, .position.column)]
pub struct LexError {
    /// 详细错误消息
    pub message: String,
    /// 错误发生的位置
    pub position: SourcePosition,
}

impl LexError {
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（0-based）
    pub fn column(&self) -> usize {
        self.position.column
    }
}
