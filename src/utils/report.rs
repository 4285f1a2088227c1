//! # 失败报告导出
//!
//! 将失败条目写成 CSV：`id,path,reason,detail`。
//!
//! ## 依赖关系
//! - 被 `commands/update.rs` 使用
//! - 使用 `csv`, `serde`

use crate::batch::FailureRecord;
use crate::error::{Result, SongtagError};
use crate::models::FailureReason;

use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FailureCsvRow<'a> {
    id: usize,
    path: &'a str,
    reason: FailureReason,
    detail: &'a str,
}

/// 写出失败报告；没有失败时只写表头
pub fn write_failure_report(path: &Path, failures: &[FailureRecord]) -> Result<()> {
    let to_write_error = |e: std::io::Error| SongtagError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["id", "path", "reason", "detail"])?;

    for failure in failures {
        writer.serialize(FailureCsvRow {
            id: failure.id,
            path: &failure.path,
            reason: failure.reason,
            detail: &failure.detail,
        })?;
    }

    writer.flush().map_err(to_write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("failures.csv");
        let failures = vec![FailureRecord {
            id: 2,
            path: "./Broken Name.flac".to_string(),
            reason: FailureReason::MalformedFilename,
            detail: "missing delimiter, really".to_string(),
        }];

        write_failure_report(&out, &failures).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "id,path,reason,detail");
        assert_eq!(
            lines[1],
            "2,./Broken Name.flac,malformed_filename,\"missing delimiter, really\""
        );
    }

    #[test]
    fn test_empty_report_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("failures.csv");
        write_failure_report(&out, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "id,path,reason,detail\n"
        );
    }
}
