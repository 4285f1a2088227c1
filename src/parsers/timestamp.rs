//! # 时间戳编解码
//!
//! 将列表中的 `YYYY-MM-DD` + `HH:MM:SS.fraction` 转换为
//! `touch -t` 接受的 `YYYYMMDDHHMM.SS`。小数秒直接丢弃，不做舍入。
//!
//! ## 依赖关系
//! - 被 `parsers/listing.rs`, `batch/processor.rs`, `tools/touch.rs` 使用
//! - 使用 `chrono` 校验日期时间

use crate::error::{Result, SongtagError};
use crate::models::{CompactTimestamp, ListingTimestamp};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const COMPACT_FORMAT: &str = "%Y%m%d%H%M.%S";

/// 解析列表中的日期和时间字段
pub fn parse_listing_time(date: &str, time: &str) -> Result<ListingTimestamp> {
    let invalid = |reason: String| SongtagError::InvalidTimestamp {
        value: format!("{} {}", date, time),
        reason,
    };

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))?;

    let whole_seconds = time.split('.').next().unwrap_or(time);
    let clock =
        NaiveTime::parse_from_str(whole_seconds, "%H:%M:%S").map_err(|e| invalid(e.to_string()))?;

    Ok(ListingTimestamp(NaiveDateTime::new(day, clock)))
}

/// 日期 + 时间字段 -> 紧凑时间戳
pub fn decode(date: &str, time: &str) -> Result<CompactTimestamp> {
    parse_listing_time(date, time).map(|ts| CompactTimestamp::from(&ts))
}

impl From<&ListingTimestamp> for CompactTimestamp {
    fn from(ts: &ListingTimestamp) -> Self {
        CompactTimestamp(ts.0.format(COMPACT_FORMAT).to_string())
    }
}

impl CompactTimestamp {
    /// 解析回本地时间（无时区），供原生时间戳设置使用
    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.0, COMPACT_FORMAT).map_err(|e| {
            SongtagError::InvalidTimestamp {
                value: self.0.clone(),
                reason: e.to_string(),
            }
        })
    }
}
