//! # 单文件处理器
//!
//! 对一个列表条目依次执行：文件名解析 → 写入标签 → 恢复修改时间。
//! 任何一步失败都转换为 [`ProcessingOutcome::Failure`]，不会向上传播。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `parsers/filename.rs`, `parsers/timestamp.rs`
//! - 使用 `tools::{TagWriter, TimestampSetter}`

use crate::models::{CompactTimestamp, FailureReason, FileListing, ProcessingOutcome};
use crate::parsers::parse_filename;
use crate::tools::{TagWriter, TimestampSetter};

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 单文件处理器，在各工作线程间共享
pub struct FileProcessor {
    /// 目录前缀（以 `/` 结尾）
    directory: String,
    tag_writer: Arc<dyn TagWriter>,
    timestamp_setter: Arc<dyn TimestampSetter>,
}

impl FileProcessor {
    pub fn new(
        directory: impl Into<String>,
        tag_writer: Arc<dyn TagWriter>,
        timestamp_setter: Arc<dyn TimestampSetter>,
    ) -> Self {
        FileProcessor {
            directory: directory.into(),
            tag_writer,
            timestamp_setter,
        }
    }

    /// 处理一个文件；`id` 仅用于关联日志
    pub fn process(&self, listing: &FileListing, id: usize) -> ProcessingOutcome {
        info!(id, "Begin");
        debug!(id, "Filepath: {}", listing.path);

        let filename = self.filename_of(&listing.path);
        info!(id, "Filename: {}", filename);

        let meta = match parse_filename(filename) {
            Ok(meta) => meta,
            Err(e) => {
                error!(id, "{}", e);
                return ProcessingOutcome::failure(FailureReason::MalformedFilename, e.to_string());
            }
        };
        info!(id, "Song:     {}", meta.song);
        info!(id, "Artist:   {}", meta.artist);
        info!(id, "VideoID:  {}", meta.video_id);

        // 写入标签会改变文件的修改时间
        if let Err(e) = self.tag_writer.write(&listing.path, &meta.to_tag_update()) {
            error!(id, "{}", e);
            return ProcessingOutcome::failure(FailureReason::TagWriteFailed, e.to_string());
        }

        let timestamp = CompactTimestamp::from(&listing.last_modified);
        info!(id, "Datetime: {}", timestamp);

        if let Err(e) = self.timestamp_setter.set_modified(&listing.path, &timestamp) {
            warn!(
                id,
                "tags were updated but the modification time could not be restored"
            );
            error!(id, "{}", e);
            return ProcessingOutcome::failure(FailureReason::TimestampRestoreFailed, e.to_string());
        }

        info!(id, "Complete");
        ProcessingOutcome::Success
    }

    /// 去掉已知的目录前缀；前缀不匹配时退回到路径的最后一段
    fn filename_of<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.directory.as_str())
            .or_else(|| Path::new(path).file_name().and_then(|n| n.to_str()))
            .unwrap_or(path)
    }
}
