//! # 外部能力接口
//!
//! 标签写入、时间戳设置和目录列举三类协作者，核心流程只依赖这里的 trait。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: command, lister, mid3v2, touch

pub mod command;
pub mod lister;
pub mod mid3v2;
pub mod touch;

pub use lister::{LsLister, NativeLister};
pub use mid3v2::Mid3v2Writer;
pub use touch::{FileTimeSetter, TouchSetter};

use crate::error::{Result, SongtagError};
use crate::models::{CompactTimestamp, ListingLayout, TagUpdate};

use std::path::Path;

/// 标签写入工具
///
/// 不同文件上的调用可能并发发生，实现不得持有跨调用的可变状态。
pub trait TagWriter: Send + Sync {
    /// 启动前检查工具是否可用
    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    /// 写入 artist / song / comment
    fn write(&self, path: &str, tags: &TagUpdate) -> Result<()>;
}

/// 文件修改时间设置工具
pub trait TimestampSetter: Send + Sync {
    fn set_modified(&self, path: &str, timestamp: &CompactTimestamp) -> Result<()>;
}

/// 目录列举工具
///
/// 每个匹配文件输出一行，字段数固定为 [`DirectoryLister::layout`]。
pub trait DirectoryLister: Send + Sync {
    fn layout(&self) -> ListingLayout;

    /// `directory` 以 `/` 结尾；`extension` 不含点
    fn list(&self, directory: &str, extension: &str) -> Result<String>;
}

/// 检查目录是否存在且可访问
pub fn verify_directory(directory: &str) -> Result<()> {
    let path = Path::new(directory);
    match std::fs::read_dir(path) {
        Ok(_) if path.is_dir() => Ok(()),
        _ => Err(SongtagError::DirectoryNotFound {
            path: directory.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(verify_directory(dir.path().to_str().unwrap()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            verify_directory(missing.to_str().unwrap()),
            Err(SongtagError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(verify_directory(file.path().to_str().unwrap()).is_err());
    }
}
