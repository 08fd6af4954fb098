//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use lamb_core::{LexError, Token, TokenReader};

/// 读取全部 token，遇到错误时 panic
pub fn lex_all(code: &str) -> Vec<Token> {
    let mut reader = TokenReader::new(code);
    let mut tokens = Vec::new();
    while let Some(token) = reader.read_next().unwrap() {
        tokens.push(token);
    }
    tokens
}

/// 读取直到第一个错误，返回之前的 token 和该错误
pub fn lex_until_error(code: &str) -> (Vec<Token>, LexError) {
    let mut reader = TokenReader::new(code);
    let mut tokens = Vec::new();
    loop {
        match reader.read_next() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => panic!("Expected lex error, got tokens: {:?}", tokens),
            Err(e) => return (tokens, e),
        }
    }
}

pub fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

pub fn op(text: &str) -> Token {
    Token::Op(text.to_string())
}

pub fn num(value: f64) -> Token {
    Token::Number(value)
}

pub fn string(value: &str) -> Token {
    Token::Str(value.to_string())
}
