//! # 目录列举
//!
//! - `LsLister`: `ls -l -1 -d --time-style=full-iso`，每行 9 个字段，目录行被丢弃
//! - `NativeLister`: `walkdir` 遍历单层目录，每行 5 个字段
//!   `<size> <date> <time> <tz> <path>`
//!
//! 两种布局的日期、时间和路径都位于行尾固定位置。
//!
//! ## 依赖关系
//! - 实现 `tools::DirectoryLister`
//! - 使用 `tools/command.rs`, `walkdir`, `chrono`

use super::command::{run_bounded, run_with_timeout};
use super::DirectoryLister;
use crate::error::{Result, SongtagError};
use crate::models::ListingLayout;

use chrono::{DateTime, Local};
use std::process::Command;
use std::time::Duration;
use walkdir::WalkDir;

/// 默认列举超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// 通过 shell 调用 `ls`
#[derive(Debug, Clone)]
pub struct LsLister {
    timeout: Duration,
}

impl LsLister {
    pub const LAYOUT: ListingLayout = ListingLayout::new(9);

    pub fn new(timeout: Duration) -> Self {
        LsLister { timeout }
    }
}

impl Default for LsLister {
    fn default() -> Self {
        LsLister::new(DEFAULT_TIMEOUT)
    }
}

impl DirectoryLister for LsLister {
    fn layout(&self) -> ListingLayout {
        Self::LAYOUT
    }

    fn list(&self, directory: &str, extension: &str) -> Result<String> {
        // 目录作为位置参数传入，避免被 shell 再次解释
        let script = format!(
            "ls -l -1 -d --time-style=full-iso --ignore-backups -- \"$1\"*.{}",
            extension
        );
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script).arg("sh").arg(directory);

        let output = run_with_timeout("sh", &mut cmd, self.timeout)?;
        if !output.status.success() {
            return Err(SongtagError::ListingFailed {
                path: directory.to_string(),
                reason: format!(
                    "perhaps no *.{} files are present: {}",
                    extension,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        // 名字以扩展名结尾的子目录也会匹配 glob，按权限位过滤掉
        let stdout = String::from_utf8_lossy(&output.stdout);
        let files: Vec<&str> = stdout
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('d'))
            .collect();
        if files.is_empty() {
            return Err(SongtagError::NoFilesFound {
                pattern: format!("{}*.{}", directory, extension),
            });
        }
        Ok(files.join("\n"))
    }
}

/// 不依赖外部命令的实现，遍历在辅助线程上进行
#[derive(Debug, Clone)]
pub struct NativeLister {
    timeout: Duration,
}

impl NativeLister {
    pub const LAYOUT: ListingLayout = ListingLayout::new(5);

    pub fn new(timeout: Duration) -> Self {
        NativeLister { timeout }
    }
}

impl Default for NativeLister {
    fn default() -> Self {
        NativeLister::new(DEFAULT_TIMEOUT)
    }
}

impl DirectoryLister for NativeLister {
    fn layout(&self) -> ListingLayout {
        Self::LAYOUT
    }

    fn list(&self, directory: &str, extension: &str) -> Result<String> {
        let dir = directory.to_string();
        let ext = extension.to_string();
        run_bounded(
            &format!("walkdir {}", directory),
            self.timeout,
            move || walk_listing(&dir, &ext),
        )
    }
}

fn walk_listing(directory: &str, extension: &str) -> Result<String> {
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    let mut lines = Vec::new();
    for entry in walker {
        let name = entry.file_name().to_string_lossy();
        let matches = name
            .rsplit_once('.')
            .map(|(stem, ext)| !stem.is_empty() && ext == extension)
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let meta = entry.metadata().map_err(|e| SongtagError::ListingFailed {
            path: directory.to_string(),
            reason: e.to_string(),
        })?;
        let modified = meta.modified().map_err(|e| SongtagError::FileReadError {
            path: entry.path().display().to_string(),
            source: e,
        })?;
        let modified: DateTime<Local> = modified.into();

        lines.push(format!(
            "{} {} {}{}",
            meta.len(),
            modified.format("%Y-%m-%d %H:%M:%S%.9f %z"),
            directory,
            name
        ));
    }

    if lines.is_empty() {
        return Err(SongtagError::NoFilesFound {
            pattern: format!("{}*.{}", directory, extension),
        });
    }
    Ok(lines.join("\n"))
}
