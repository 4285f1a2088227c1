//! # 修改时间恢复
//!
//! - `TouchSetter`: 调用 `touch -t YYYYMMDDHHMM.SS`
//! - `FileTimeSetter`: 按本地时区解释紧凑时间戳，用 `filetime` 直接设置
//!
//! ## 依赖关系
//! - 实现 `tools::TimestampSetter`
//! - 使用 `parsers/timestamp.rs`

use super::command::run_checked;
use super::TimestampSetter;
use crate::error::{Result, SongtagError};
use crate::models::CompactTimestamp;

use chrono::{Local, TimeZone};
use filetime::FileTime;
use std::process::Command;

/// `touch -t` 命令封装
#[derive(Debug, Clone, Default)]
pub struct TouchSetter;

impl TimestampSetter for TouchSetter {
    fn set_modified(&self, path: &str, timestamp: &CompactTimestamp) -> Result<()> {
        run_checked(
            "touch",
            Command::new("touch")
                .arg("-t")
                .arg(timestamp.as_str())
                .arg(path),
        )?;
        Ok(())
    }
}

/// 不依赖外部命令的实现
#[derive(Debug, Clone, Default)]
pub struct FileTimeSetter;

impl TimestampSetter for FileTimeSetter {
    fn set_modified(&self, path: &str, timestamp: &CompactTimestamp) -> Result<()> {
        let naive = timestamp.to_naive()?;
        // DST 重叠时与 touch 一样取较早的时刻
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| SongtagError::InvalidTimestamp {
                value: timestamp.to_string(),
                reason: "does not exist in the local time zone".to_string(),
            })?;

        let mtime = FileTime::from_unix_time(local.timestamp(), 0);
        filetime::set_file_mtime(path, mtime).map_err(|e| SongtagError::FileWriteError {
            path: path.to_string(),
            source: e,
        })
    }
}
