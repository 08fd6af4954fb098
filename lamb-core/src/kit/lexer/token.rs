//! Token 定义
//!
//! 封闭的和类型：解析器可以穷尽匹配，每种 token 只带自己那一种值。
//!
//! 序列化为 `{"type": <tag>, "value": <value>}`，tag 为
//! `punc` / `num` / `str` / `kw` / `var` / `op`。

use serde::Serialize;
use std::fmt;

/// 词法单元
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Token {
    /// 结构分隔符
    #[serde(rename = "punc")]
    Punc(Punc),
    /// 数字（双精度）
    #[serde(rename = "num")]
    Number(f64),
    /// 字符串（转义已解析）
    #[serde(rename = "str")]
    Str(String),
    /// 保留字
    #[serde(rename = "kw")]
    Keyword(Keyword),
    /// 标识符
    #[serde(rename = "var")]
    Ident(String),
    /// 运算符（连续运算符字符组成的整段）
    #[serde(rename = "op")]
    Op(String),
}

impl Token {
    /// 类型标签
    pub fn tag(&self) -> &'static str {
        match self {
            Token::Punc(_) => "punc",
            Token::Number(_) => "num",
            Token::Str(_) => "str",
            Token::Keyword(_) => "kw",
            Token::Ident(_) => "var",
            Token::Op(_) => "op",
        }
    }

    pub fn is_punc(&self, punc: Punc) -> bool {
        matches!(self, Token::Punc(p) if *p == punc)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }

    pub fn is_op(&self, op: &str) -> bool {
        matches!(self, Token::Op(o) if o == op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punc(p) => write!(f, "{}", p),
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        write!(f, "\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, "\"")
            }
            Token::Keyword(k) => write!(f, "{}", k),
            Token::Ident(name) | Token::Op(name) => write!(f, "{}", name),
        }
    }
}

/// 标点（单字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Punc {
    #[serde(rename = "(")]
    LeftParen,
    #[serde(rename = ")")]
    RightParen,
    #[serde(rename = "{")]
    LeftBrace,
    #[serde(rename = "}")]
    RightBrace,
    #[serde(rename = "[")]
    LeftBracket,
    #[serde(rename = "]")]
    RightBracket,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ";")]
    Semicolon,
}

impl Punc {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Punc::LeftParen),
            ')' => Some(Punc::RightParen),
            '{' => Some(Punc::LeftBrace),
            '}' => Some(Punc::RightBrace),
            '[' => Some(Punc::LeftBracket),
            ']' => Some(Punc::RightBracket),
            ',' => Some(Punc::Comma),
            ';' => Some(Punc::Semicolon),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Punc::LeftParen => '(',
            Punc::RightParen => ')',
            Punc::LeftBrace => '{',
            Punc::RightBrace => '}',
            Punc::LeftBracket => '[',
            Punc::RightBracket => ']',
            Punc::Comma => ',',
            Punc::Semicolon => ';',
        }
    }
}

impl fmt::Display for Punc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 保留字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    If,
    Then,
    Lambda,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Lambda => "lambda",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punc_char_mapping() {
        for c in ['(', ')', '{', '}', '[', ']', ',', ';'] {
            let punc = Punc::from_char(c).unwrap();
            assert_eq!(punc.as_char(), c);
        }
        assert_eq!(Punc::from_char('.'), None);
        assert_eq!(Punc::from_char('+'), None);
    }

    #[test]
    fn test_token_tags() {
        assert_eq!(Token::Punc(Punc::Comma).tag(), "punc");
        assert_eq!(Token::Number(1.0).tag(), "num");
        assert_eq!(Token::Str("s".into()).tag(), "str");
        assert_eq!(Token::Keyword(Keyword::If).tag(), "kw");
        assert_eq!(Token::Ident("x".into()).tag(), "var");
        assert_eq!(Token::Op("==".into()).tag(), "op");
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Punc(Punc::LeftParen).is_punc(Punc::LeftParen));
        assert!(!Token::Punc(Punc::LeftParen).is_punc(Punc::RightParen));
        assert!(Token::Keyword(Keyword::Lambda).is_keyword(Keyword::Lambda));
        assert!(Token::Op("!=".into()).is_op("!="));
        assert!(!Token::Ident("!=".into()).is_op("!="));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Number(5.0).to_string(), "5");
        assert_eq!(Token::Number(1.25).to_string(), "1.25");
        assert_eq!(Token::Str("a\"b\\c".into()).to_string(), r#""a\"b\\c""#);
        assert_eq!(Token::Keyword(Keyword::Then).to_string(), "then");
        assert_eq!(Token::Punc(Punc::RightBrace).to_string(), "}");
        assert_eq!(Token::Op("+".into()).to_string(), "+");
    }

    #[test]
    fn test_token_serialize() {
        let json = serde_json::to_string(&Token::Number(5.0)).unwrap();
        assert_eq!(json, r#"{"type":"num","value":5.0}"#);

        let json = serde_json::to_string(&Token::Punc(Punc::LeftParen)).unwrap();
        assert_eq!(json, r#"{"type":"punc","value":"("}"#);

        let json = serde_json::to_string(&Token::Keyword(Keyword::Lambda)).unwrap();
        assert_eq!(json, r#"{"type":"kw","value":"lambda"}"#);

        let json = serde_json::to_string(&Token::Ident("x".into())).unwrap();
        assert_eq!(json, r#"{"type":"var","value":"x"}"#);
    }
}
