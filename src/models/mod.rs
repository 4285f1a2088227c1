//! # 数据模型模块
//!
//! 定义目录列表条目、文件名元数据和处理结果等数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `tools/` 使用
//! - 子模块: listing, metadata, outcome

pub mod listing;
pub mod metadata;
pub mod outcome;

pub use listing::{CompactTimestamp, FileListing, ListingLayout, ListingTimestamp};
pub use metadata::{ParsedMetadata, TagUpdate};
pub use outcome::{FailureReason, ProcessingOutcome};
