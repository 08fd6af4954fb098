//! Platform - 平台适配层
//!
//! CLI 的 IO 副作用：读取源文本、格式化输出 token 和错误

pub mod cli;

pub use cli::{print_error_with_source, print_tokens, read_source};
