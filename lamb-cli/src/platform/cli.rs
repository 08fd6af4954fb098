//! CLI 格式化输出
//!
//! 提供 token 打印、命令行友好的错误显示和源码上下文打印。

use std::io::{Read, Write};
use std::path::Path;

use lamb_config::OutputFormat;
use lamb_core::{LexError, Token, TokenReader};
use tracing::info;

use crate::error::CliError;

/// 读取源文本，未指定文件或文件名为 `-` 时读取 stdin
pub fn read_source(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(source)
        }
    }
}

/// 逐个读取 token 并写出
///
/// 文本格式边读边写，遇到词法错误前的 token 已经输出；
/// JSON 格式先收集完整序列，出错时不输出任何内容。
pub fn print_tokens<W: Write>(
    source: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: "<stdout>".to_string(),
        source,
    };

    let mut reader = TokenReader::new(source);
    let count = match format {
        OutputFormat::Text => {
            let mut count = 0;
            while let Some(token) = reader.read_next()? {
                writeln!(out, "{}", format_token(&token)).map_err(io_error)?;
                count += 1;
            }
            count
        }
        OutputFormat::Json => {
            let tokens = reader.collect::<Result<Vec<Token>, LexError>>()?;
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out).map_err(io_error)?;
            tokens.len()
        }
    };

    info!(target: "lamb::cli", count, "Tokenization finished");
    Ok(count)
}

/// 文本格式的单行 token
pub fn format_token(token: &Token) -> String {
    format!("{:<5} {}", token.tag(), token)
}

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &LexError, source: &str) {
    eprint!("{}", render_error_with_source(e, source));
}

/// 渲染错误信息行及其源代码上下文
pub fn render_error_with_source(e: &LexError, source: &str) -> String {
    format!(
        "error: {}\n{}",
        e,
        render_source_context(source, e.line(), e.column())
    )
}

/// 渲染源代码上下文（错误行前后几行，错误列下方画 `^`）
///
/// `error_col` 为 0-based
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    const CONTEXT_LINES: usize = 2; // 错误行前后显示的上下文行数

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut rendered = format!("{}|--\n", separator);
    for line_idx in start_line..=end_line {
        rendered.push_str(&format!(
            "{:>width$} | {}\n",
            line_idx,
            lines[line_idx - 1],
            width = width
        ));

        if line_idx == error_line {
            rendered.push_str(&format!(
                "{} | {}^\n",
                " ".repeat(width),
                " ".repeat(error_col)
            ));
        }
    }
    rendered.push_str(&format!("{}|--\n", separator));

    rendered
}
