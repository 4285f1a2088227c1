//! # 文件名元数据模型
//!
//! ## 依赖关系
//! - 由 `parsers/filename.rs` 生成
//! - 被 `batch/processor.rs`, `tools/mid3v2.rs` 使用

/// 从文件名解析出的元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMetadata {
    /// 歌曲名（下划线已替换为空格）
    pub song: String,

    /// 艺术家（下划线已替换为空格）
    pub artist: String,

    /// 视频 ID，文件名中没有时为空串
    pub video_id: String,
}

impl ParsedMetadata {
    /// 转换为写入标签所需的字段
    pub fn to_tag_update(&self) -> TagUpdate {
        TagUpdate {
            artist: self.artist.clone(),
            song: self.song.clone(),
            comment: self.video_id.clone(),
        }
    }
}

/// 交给标签写入工具的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
    pub artist: String,
    pub song: String,
    pub comment: String,
}
