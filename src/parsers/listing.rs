//! # 目录列表解析器
//!
//! 将目录列举工具的原始输出逐行转换为 [`FileListing`]。
//! 空行被跳过；每个非空行对应一个条目，格式错误只影响该条目。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `parsers/timestamp.rs`

use super::timestamp::decode;
use crate::error::{Result, SongtagError};
use crate::models::{FileListing, ListingLayout, ListingTimestamp};

/// 解析全部列表行
pub fn parse_listing(raw: &str, layout: ListingLayout) -> Vec<Result<FileListing>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_listing_line(line, layout))
        .collect()
}

/// 解析单行
pub fn parse_listing_line(line: &str, layout: ListingLayout) -> Result<FileListing> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != layout.fields {
        return Err(SongtagError::ListingShape {
            expected: layout.fields,
            found: parts.len(),
            line: line.to_string(),
        });
    }

    // 先得到紧凑时间戳，保证列表中保存的就是将要恢复的时间
    let compact = decode(parts[layout.date_index()], parts[layout.time_index()])?;
    let last_modified = ListingTimestamp(compact.to_naive()?);

    Ok(FileListing {
        path: parts[layout.path_index()].to_string(),
        last_modified,
    })
}
