//! Lamb - lexical front end for a small lambda expression language
//!
//! # Architecture
//!
//! ```text
//! lamb-config/  - Pure configuration data (phases, log levels, output format)
//! lamb-core/    - Source cursor and token reader (pure logic, no IO)
//! lamb-cli/     - `lamb` binary: prints the token stream of a file
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lamb::{tokenize, Token};
//!
//! let tokens = tokenize("x = 5 + 10 / 3").unwrap();
//! assert_eq!(tokens[0], Token::Ident("x".to_string()));
//! assert_eq!(tokens.len(), 7);
//! ```

pub use lamb_config::{DriverConfig, LogLevel, OutputFormat, Phase};
pub use lamb_core::{
    tokenize, Keyword, LexError, LexResult, Punc, SourceCursor, SourcePosition, Token,
    TokenReader,
};
