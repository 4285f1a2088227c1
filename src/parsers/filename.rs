//! # 文件名解析器
//!
//! 将 `Song_-_Artist.flac` 或 `Song_-_Artist_-_{VideoId}.flac` 形式的文件名
//! 解析为 [`ParsedMetadata`]。
//!
//! ## 规则
//! - 以最后一个 `.` 去掉扩展名，得到 stem
//! - 以 `_-_` 切分 stem：第 0 段为歌曲名，第 1 段为艺术家
//! - 字段内下划线替换为空格并去除首尾空白
//! - 至少 3 段时，最后一段若被 `{}` 包裹则作为视频 ID
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 使用
//! - 使用 `models/metadata.rs`

use crate::error::{Result, SongtagError};
use crate::models::ParsedMetadata;

/// 字段分隔符
pub const FIELD_DELIMITER: &str = "_-_";

/// 解析文件名
pub fn parse_filename(filename: &str) -> Result<ParsedMetadata> {
    let malformed = |reason: &str| SongtagError::MalformedFilename {
        filename: filename.to_string(),
        reason: reason.to_string(),
    };

    let stem = file_stem(filename);
    if stem.trim().is_empty() {
        return Err(malformed("empty stem"));
    }

    let segments: Vec<&str> = stem.split(FIELD_DELIMITER).collect();
    if segments.len() < 2 {
        return Err(malformed("missing '_-_' delimiter between song and artist"));
    }

    let song = normalize_field(segments[0]);
    if song.is_empty() {
        return Err(malformed("empty song"));
    }

    let artist = normalize_field(segments[1]);
    if artist.is_empty() {
        return Err(malformed("empty artist"));
    }

    // 只有两段时最后一段就是艺术家，不能当作视频 ID
    let video_id = if segments.len() >= 3 {
        segments
            .last()
            .and_then(|last| extract_video_id(last))
            .unwrap_or_default()
    } else {
        String::new()
    };

    Ok(ParsedMetadata {
        song,
        artist,
        video_id,
    })
}

/// 去掉扩展名；没有 `.` 时整个文件名即为 stem
fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

fn normalize_field(raw: &str) -> String {
    raw.replace('_', " ").trim().to_string()
}

/// `{abc-123}` -> `abc-123`
fn extract_video_id(segment: &str) -> Option<String> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_and_artist() {
        let meta = parse_filename("My_Song_-_The_Artist.flac").unwrap();
        assert_eq!(meta.song, "My Song");
        assert_eq!(meta.artist, "The Artist");
        assert_eq!(meta.video_id, "");
    }

    #[test]
    fn test_parse_with_video_id() {
        let meta = parse_filename("My_Song_-_The_Artist_-_{abc-123}.flac").unwrap();
        assert_eq!(meta.song, "My Song");
        assert_eq!(meta.artist, "The Artist");
        assert_eq!(meta.video_id, "abc-123");
    }

    #[test]
    fn test_video_id_keeps_hyphens_and_underscores() {
        let meta = parse_filename("Song_-_Artist_-_{a-b_c-D9}.flac").unwrap();
        assert_eq!(meta.video_id, "a-b_c-D9");
    }

    #[test]
    fn test_two_segments_keep_braced_artist() {
        let meta = parse_filename("Song_-_{Braced}.flac").unwrap();
        assert_eq!(meta.artist, "{Braced}");
        assert_eq!(meta.video_id, "");
    }

    #[test]
    fn test_third_segment_without_braces_is_ignored() {
        let meta = parse_filename("Song_-_Artist_-_Live.flac").unwrap();
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.video_id, "");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let meta = parse_filename("_Song__-_Artist_.flac").unwrap();
        assert_eq!(meta.song, "Song");
        assert_eq!(meta.artist, "Artist");
    }

    #[test]
    fn test_only_last_dot_strips_extension() {
        let meta = parse_filename("Mr._Song_-_Artist.flac").unwrap();
        assert_eq!(meta.song, "Mr. Song");
    }

    #[test]
    fn test_missing_delimiter_fails() {
        let err = parse_filename("Broken Name.flac").unwrap_err();
        assert!(matches!(err, SongtagError::MalformedFilename { .. }));
    }

    #[test]
    fn test_empty_stem_fails() {
        assert!(parse_filename(".flac").is_err());
        assert!(parse_filename("").is_err());
    }

    #[test]
    fn test_empty_fields_fail() {
        assert!(parse_filename("_-_Artist.flac").is_err());
        assert!(parse_filename("Song_-__.flac").is_err());
    }
}
