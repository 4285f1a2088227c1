//! # 工具函数模块
//!
//! 提供美化输出、进度条、日志初始化和失败报告导出。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 子模块: logging, output, progress, report

pub mod logging;
pub mod output;
pub mod progress;
pub mod report;
