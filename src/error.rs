//! # 统一错误处理模块
//!
//! 定义 spystats 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// spystats 统一错误类型
#[derive(Error, Debug)]
pub enum SpystatsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部统计工具错误
    // ─────────────────────────────────────────────────────────────
    #[error("Statistics tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    #[error("Statistics tool '{tool}' failed on '{path}' (exit status: {status})\n{stderr}")]
    ToolFailed {
        tool: String,
        path: String,
        status: String,
        stderr: String,
    },

    #[error("Statistics tool output for '{path}' is not valid UTF-8")]
    NonUtf8Output { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed statistics line from '{path}': \"{line}\"")]
    MalformedLine { path: String, line: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 报表错误
    // ─────────────────────────────────────────────────────────────
    #[error("'{path}' is missing column '{column}' established by the first file")]
    MissingColumn { path: String, column: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SpystatsError>;
