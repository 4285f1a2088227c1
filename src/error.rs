//! # 统一错误处理模块
//!
//! 定义 songtag 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 启动错误：必需的外部命令不存在（致命）
//! - 目录错误：目录不可访问或列举失败（致命）
//! - 列表格式错误 / 文件名解析错误：单个文件跳过
//! - 写入错误：标签写入或时间戳恢复失败，单个文件跳过
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// songtag 统一错误类型
#[derive(Error, Debug)]
pub enum SongtagError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found or not accessible: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 目录列举错误
    // ─────────────────────────────────────────────────────────────
    #[error("Listing files in '{path}' failed: {reason}")]
    ListingFailed { path: String, reason: String },

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("Listing line has {found} fields instead of {expected} (check for unexpected spaces in the filename): {line}")]
    ListingShape {
        expected: usize,
        found: usize,
        line: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed filename '{filename}': {reason}")]
    MalformedFilename { filename: String, reason: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("External command '{command}' timed out after {seconds} second(s)")]
    CommandTimeout { command: String, seconds: u64 },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SongtagError>;
