//! 源文本游标
//!
//! 持有完整的源文本，逐字符前进并维护行列号。
//! 行列号增量计算，报错时无需回扫源文本。

use super::position::SourcePosition;
use crate::kit::lexer::error::LexError;

use tracing::debug;

/// 源文本游标
///
/// 到达末尾后 `peek`/`advance` 都返回 `None`，且不再移动
pub struct SourceCursor {
    source: String,
    position: SourcePosition,
}

impl SourceCursor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: SourcePosition::start(),
        }
    }

    /// 完整源文本
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 预读当前字符（不消费）
    pub fn peek(&self) -> Option<char> {
        self.source[self.position.byte_offset..].chars().next()
    }

    /// 读取并消费当前字符
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.advance(c);
        Some(c)
    }

    /// 是否已到达输入末尾
    pub fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// 在当前位置构造词法错误
    ///
    /// 调用方负责返回该错误（`return Err(cursor.fail(..))`）
    pub fn fail(&self, message: impl Into<String>) -> LexError {
        let message = message.into();
        debug!(
            target: "lamb::lexer::cursor",
            line = self.position.line,
            column = self.position.column,
            message = %message,
            "Raising lex error"
        );
        LexError::new(message, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_ascii() {
        let mut cursor = SourceCursor::new("abc");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_cursor_peek_does_not_move() {
        let cursor = SourceCursor::new("xy");

        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.position(), SourcePosition::start());
    }

    #[test]
    fn test_cursor_idempotent_at_end() {
        let mut cursor = SourceCursor::new("a");
        cursor.advance();

        let end = cursor.position();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), end);
    }

    #[test]
    fn test_cursor_empty_source() {
        let mut cursor = SourceCursor::new("");
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position().byte_offset, 0);
    }

    #[test]
    fn test_cursor_position_tracking() {
        let mut cursor = SourceCursor::new("a\nb");

        let start = cursor.position();
        assert_eq!(start.line, 1);
        assert_eq!(start.column, 0);

        cursor.advance(); // 'a'
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 1);

        cursor.advance(); // '\n'
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 0);

        cursor.advance(); // 'b'
        assert_eq!(cursor.position().column, 1);
    }

    #[test]
    fn test_cursor_multibyte() {
        let mut cursor = SourceCursor::new("λx");

        assert_eq!(cursor.advance(), Some('λ'));
        assert_eq!(cursor.position().column, 1);
        assert_eq!(cursor.position().byte_offset, 2);
        assert_eq!(cursor.advance(), Some('x'));
    }

    #[test]
    fn test_cursor_fail_reports_current_position() {
        let mut cursor = SourceCursor::new("ab\ncd");
        for _ in 0..4 {
            cursor.advance();
        }

        let err = cursor.fail("boom");
        assert_eq!(err.message, "boom");
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 1);
        assert_eq!(err.to_string(), "boom (2:1)");
    }

    #[test]
    fn test_cursor_source() {
        let cursor = SourceCursor::new(String::from("x = 1"));
        assert_eq!(cursor.source(), "x = 1");
    }
}
