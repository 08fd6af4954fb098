//! Lamb 扫描器
//!
//! 跳过空白后按固定优先级对首字符分类：
//! 注释 → 字符串 → 数字 → 标识符/关键字 → 标点 → 运算符 → 报错。
//!
//! 所有词素累积状态都是单次调用内的局部变量，调用之间不保留。

use super::core::SourceCursor;
use super::error::LexResult;
use super::token::{Keyword, Punc, Token};

use tracing::{debug, trace};

/// 单行注释起始符
pub const COMMENT_MARKER: char = '#';

/// 字符串定界符
pub const STRING_DELIMITER: char = '"';

/// 运算符字符集
const OP_CHARS: &str = "+-*/%=&|<>!";

/// Lamb 扫描器
#[derive(Debug, Default, Clone, Copy)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    /// 扫描下一个 token
    ///
    /// `Ok(None)` 表示输入已耗尽。出错时已消费的字符不会回退。
    pub fn next_token(&self, cursor: &mut SourceCursor) -> LexResult<Option<Token>> {
        loop {
            read_while(cursor, is_whitespace);

            let c = match cursor.peek() {
                Some(c) => c,
                None => return Ok(None),
            };

            let start = cursor.position();
            trace!(
                target: "lamb::lexer::scanner",
                line = start.line,
                column = start.column,
                "Starting token scan"
            );

            let token = match c {
                COMMENT_MARKER => {
                    // 注释不产生 token，继续扫描
                    self.skip_comment(cursor);
                    continue;
                }
                STRING_DELIMITER => self.scan_string(cursor),
                c if is_digit(c) => self.scan_number(cursor)?,
                c if is_identifier_start(c) => self.scan_identifier_or_keyword(cursor),
                c => {
                    if let Some(punc) = Punc::from_char(c) {
                        cursor.advance();
                        Token::Punc(punc)
                    } else if is_op_char(c) {
                        Token::Op(read_while(cursor, is_op_char))
                    } else {
                        return Err(cursor.fail(format!("Can't handle character: {}", c)));
                    }
                }
            };

            return Ok(Some(token));
        }
    }

    /// 跳过注释，包括行尾换行符
    fn skip_comment(&self, cursor: &mut SourceCursor) {
        read_while(cursor, |c| c != '\n');
        cursor.advance();
    }

    /// 扫描字符串
    ///
    /// 反斜杠使下一个字符按字面追加。输入在闭合引号前结束时，
    /// 已收集的部分即为字符串的值，不报错。
    fn scan_string(&self, cursor: &mut SourceCursor) -> Token {
        cursor.advance(); // 消费开头的引号
        let mut value = String::new();
        let mut escaped = false;

        loop {
            match cursor.advance() {
                Some(c) if escaped => {
                    value.push(c);
                    escaped = false;
                }
                Some('\\') => escaped = true,
                Some(STRING_DELIMITER) => break,
                Some(c) => value.push(c),
                None => {
                    debug!(
                        target: "lamb::lexer::scanner",
                        partial = %value,
                        "String reached end of input before closing quote"
                    );
                    break;
                }
            }
        }

        Token::Str(value)
    }

    /// 扫描数字
    ///
    /// 最多消费一个小数点，第二个小数点留给下一次调用。
    /// 超出 f64 范围的数字串解析为 `f64::INFINITY`，不报错。
    fn scan_number(&self, cursor: &mut SourceCursor) -> LexResult<Token> {
        let mut has_dot = false;
        let text = read_while(cursor, |c| {
            if c == '.' {
                if has_dot {
                    return false;
                }
                has_dot = true;
                return true;
            }
            is_digit(c)
        });

        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|e| cursor.fail(format!("Invalid number '{}': {}", text, e)))
    }

    /// 扫描标识符或关键字
    ///
    /// 先贪婪读完整段标识符，再查关键字表，`iffy` 不会被拆成 `if` + `fy`
    fn scan_identifier_or_keyword(&self, cursor: &mut SourceCursor) -> Token {
        let word = read_while(cursor, is_identifier_continue);

        match lookup_keyword(&word) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Ident(word),
        }
    }
}

/// 关键字表
static KEYWORD_TABLE: &[(&str, Keyword)] = &[
    ("if", Keyword::If),
    ("then", Keyword::Then),
    ("lambda", Keyword::Lambda),
    ("true", Keyword::True),
    ("false", Keyword::False),
];

/// 查找关键字
fn lookup_keyword(word: &str) -> Option<Keyword> {
    for (kw, keyword) in KEYWORD_TABLE {
        if *kw == word {
            debug!(target: "lamb::lexer::scanner", keyword = word, "Matched keyword");
            return Some(*keyword);
        }
    }
    None
}

/// 读取满足谓词的最长前缀
fn read_while<F>(cursor: &mut SourceCursor, mut predicate: F) -> String
where
    F: FnMut(char) -> bool,
{
    let mut text = String::new();
    while let Some(c) = cursor.peek() {
        if !predicate(c) {
            break;
        }
        text.push(c);
        cursor.advance();
    }
    text
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 标识符起始字符：ASCII 字母、`_`、`λ`
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | 'λ' | 'Λ')
}

/// 标识符延续字符
///
/// 不含任何运算符字符，`a!=b` 才能切成 `a`、`!=`、`b`
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || is_digit(c) || c == '?'
}

pub fn is_op_char(c: char) -> bool {
    OP_CHARS.contains(c)
}

pub fn is_punc(c: char) -> bool {
    Punc::from_char(c).is_some()
}
