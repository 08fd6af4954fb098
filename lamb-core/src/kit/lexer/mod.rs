//! Lamb 词法分析器
//!
//! 两级流水线：
//! - `SourceCursor`：逐字符读取源文本，追踪行列号
//! - `TokenReader`：在游标之上做分类，产生 token，并提供单 token 预读
//!
//! 拉取式、惰性、单线程：调用方请求下一个 token 时才读取字符。

pub mod core;
pub mod error;
pub mod reader;
pub mod scanner;
pub mod token;

pub use core::{SourceCursor, SourcePosition};
pub use error::{LexError, LexResult};
pub use reader::{tokenize, TokenReader};
pub use scanner::Scanner;
pub use token::{Keyword, Punc, Token};
