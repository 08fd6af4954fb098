//! Token 读取器
//!
//! 在 `SourceCursor` 之上运行 `Scanner`，并用一个私有槽位缓存预读的 token。
//! 每个读取器独占自己的游标和槽位，不同源文本上的会话互不干扰。
//!
//! # 示例
//!
//! ```rust
//! use lamb_core::kit::lexer::{Token, TokenReader};
//!
//! let mut reader = TokenReader::new("x = 5");
//! assert_eq!(reader.peek().unwrap(), Some(&Token::Ident("x".to_string())));
//! assert_eq!(reader.read_next().unwrap(), Some(Token::Ident("x".to_string())));
//! assert_eq!(reader.read_next().unwrap(), Some(Token::Op("=".to_string())));
//! ```

use super::core::{SourceCursor, SourcePosition};
use super::error::{LexError, LexResult};
use super::scanner::Scanner;
use super::token::Token;

use tracing::{debug, trace, warn};

/// Token 读取器
pub struct TokenReader {
    cursor: SourceCursor,
    scanner: Scanner,
    /// 预读槽位，最多缓存一个 token
    current: Option<Token>,
}

impl TokenReader {
    pub fn new(source: impl Into<String>) -> Self {
        Self::from_cursor(SourceCursor::new(source))
    }

    /// 从已有游标创建
    pub fn from_cursor(cursor: SourceCursor) -> Self {
        trace!(
            target: "lamb::lexer::reader",
            bytes = cursor.source().len(),
            "Creating new TokenReader"
        );
        Self {
            cursor,
            scanner: Scanner::new(),
            current: None,
        }
    }

    /// 预读下一个 token（不消费）
    ///
    /// 连续调用返回同一个 token。`Ok(None)` 表示没有更多 token。
    pub fn peek(&mut self) -> LexResult<Option<&Token>> {
        if self.current.is_none() {
            self.current = self.scan()?;
        }
        Ok(self.current.as_ref())
    }

    /// 读取并消费下一个 token
    ///
    /// 槽位有值时直接取出，否则现场扫描。
    pub fn read_next(&mut self) -> LexResult<Option<Token>> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan(),
        }
    }

    /// 是否已没有更多 token
    pub fn eof(&mut self) -> LexResult<bool> {
        Ok(self.peek()?.is_none())
    }

    /// 在游标当前位置构造错误，供下游解析器报告
    pub fn fail(&self, message: impl Into<String>) -> LexError {
        self.cursor.fail(message)
    }

    /// 游标当前位置
    pub fn position(&self) -> SourcePosition {
        self.cursor.position()
    }

    /// 完整源文本
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    fn scan(&mut self) -> LexResult<Option<Token>> {
        trace!(target: "lamb::lexer::reader", "Requesting next token");

        match self.scanner.next_token(&mut self.cursor) {
            Ok(Some(token)) => {
                debug!(
                    target: "lamb::lexer::reader",
                    token = ?token,
                    line = self.cursor.position().line,
                    column = self.cursor.position().column,
                    "Produced token"
                );
                Ok(Some(token))
            }
            Ok(None) => {
                trace!(target: "lamb::lexer::reader", "Reached end of input");
                Ok(None)
            }
            Err(e) => {
                warn!(target: "lamb::lexer::reader", error = %e, "Lex error encountered");
                Err(e)
            }
        }
    }
}

impl Iterator for TokenReader {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

/// 读取全部 token，遇到第一个错误即停止
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    TokenReader::new(source).collect()
}
