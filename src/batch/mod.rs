//! # 批量处理模块
//!
//! 单文件处理流水线和并行批量执行。
//!
//! ## 功能
//! - 文件名解析、标签写入、修改时间恢复
//! - 固定大小线程池并行处理
//! - 完成计数与失败汇总
//!
//! ## 依赖关系
//! - 被 `commands/update.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod processor;
pub mod runner;

pub use processor::FileProcessor;
pub use runner::{BatchReport, BatchRunner, FailureRecord};
