//! # 单文件处理结果
//!
//! ## 依赖关系
//! - 由 `batch/processor.rs` 生成
//! - 被 `batch/runner.rs`, `utils/report.rs` 使用

use serde::Serialize;

/// 失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// 列表行字段数不符或时间无法解析
    MalformedListing,
    /// 文件名不符合 `Song_-_Artist[_-_{VideoId}]` 约定
    MalformedFilename,
    /// 标签写入失败
    TagWriteFailed,
    /// 修改时间恢复失败（标签已更新）
    TimestampRestoreFailed,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::MalformedListing => write!(f, "malformed listing"),
            FailureReason::MalformedFilename => write!(f, "malformed filename"),
            FailureReason::TagWriteFailed => write!(f, "tag write failed"),
            FailureReason::TimestampRestoreFailed => write!(f, "timestamp restore failed"),
        }
    }
}

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Success,
    Failure {
        reason: FailureReason,
        /// 底层错误信息
        detail: String,
    },
}

impl ProcessingOutcome {
    pub fn failure(reason: FailureReason, detail: impl Into<String>) -> Self {
        ProcessingOutcome::Failure {
            reason,
            detail: detail.into(),
        }
    }
}
