//! 通用工具：词法分析基础设施

pub mod lexer;
