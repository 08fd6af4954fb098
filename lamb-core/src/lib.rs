//! Lamb Core - Lexical front end (pure logic, no IO)
//!
//! Turns source text of the Lamb expression language into a lazy stream of tokens.
//! Only operates on in-memory text, no file IO or terminal output.

pub mod kit;

// Re-export common types
pub use kit::lexer::{
    tokenize, Keyword, LexError, LexResult, Punc, SourceCursor, SourcePosition, Token,
    TokenReader,
};
