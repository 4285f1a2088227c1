//! # 目录列表数据模型
//!
//! 目录列举工具输出的单行条目，以及两种时间戳表示。
//!
//! ## 依赖关系
//! - 被 `parsers/listing.rs`, `parsers/timestamp.rs` 使用
//! - 被 `batch/processor.rs`, `tools/` 使用

use chrono::NaiveDateTime;

/// 列表行的字段布局
///
/// 日期、时间和路径总是位于行尾的固定位置：
/// `... <date> <time> <tz> <path>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLayout {
    /// 每行期望的字段数
    pub fields: usize,
}

impl ListingLayout {
    pub const fn new(fields: usize) -> Self {
        ListingLayout { fields }
    }

    pub fn date_index(&self) -> usize {
        self.fields - 4
    }

    pub fn time_index(&self) -> usize {
        self.fields - 3
    }

    pub fn path_index(&self) -> usize {
        self.fields - 1
    }
}

/// 列表中的最后修改时间（秒精度，小数部分已丢弃）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingTimestamp(pub NaiveDateTime);

/// 单个文件的列表条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    /// 文件路径（含目录前缀）
    pub path: String,

    /// 最后修改时间
    pub last_modified: ListingTimestamp,
}

/// `YYYYMMDDHHMM.SS` 形式的紧凑时间戳，供时间戳设置工具使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactTimestamp(pub(crate) String);

impl CompactTimestamp {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompactTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
