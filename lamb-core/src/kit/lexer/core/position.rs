//! 源代码位置追踪
//!
//! - line: 1-based，人类可读的错误显示
//! - column: 0-based，Unicode 码点计数，遇到换行归零
//! - byte_offset: 0-based，UTF-8 字节偏移，游标据此切片源文本

/// 源代码位置
///
/// 总是描述"下一个将被读取的字符"之前的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，0-based
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 0,
            byte_offset: 0,
        }
    }

    /// 越过一个字符
    ///
    /// 换行时行号加一、列号归零；其余字符列号加一
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        self.byte_offset += c.len_utf8();
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}
