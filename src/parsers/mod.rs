//! # 解析器模块
//!
//! 文件名、目录列表和时间戳的纯函数解析器。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `tools/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: filename, listing, timestamp

pub mod filename;
pub mod listing;
pub mod timestamp;

pub use filename::parse_filename;
pub use listing::parse_listing;
