//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ```text
//! songtag [OPTIONS] [DIRECTORY]
//! ```
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/update.rs`

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// songtag - 根据文件名批量写入歌曲标签
#[derive(Parser, Debug)]
#[command(name = "songtag")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Set title/artist/video-id tags from 'Song_-_Artist_-_{VideoId}' filenames, keeping modification times",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the audio files
    #[arg(default_value = "./")]
    pub directory: String,

    /// File extension to process (without the dot)
    #[arg(short, long, default_value = "flac", value_parser = parse_extension)]
    pub extension: String,

    /// Number of parallel workers (0 = number of CPUs)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// How files are listed and modification times restored
    #[arg(long, value_enum, default_value_t = Backend::External)]
    pub backend: Backend,

    /// Timeout in seconds for listing the directory
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Write a CSV report of failed files to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show a progress bar while tagging
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// 目录统一以 `/` 结尾，便于从路径中去掉前缀
    pub fn normalized_directory(&self) -> String {
        let mut dir = self.directory.clone();
        if !dir.ends_with('/') {
            dir.push('/');
        }
        dir
    }
}

/// 列举与时间戳恢复的实现方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Backend {
    /// `ls` and `touch`
    External,
    /// walkdir and filetime, no external commands besides mid3v2
    Native,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::External => write!(f, "external"),
            Backend::Native => write!(f, "native"),
        }
    }
}

/// 扩展名只允许 ASCII 字母和数字（会被拼进 shell glob）
fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim_start_matches('.');
    if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(ext.to_string())
    } else {
        Err(format!("invalid extension '{}': use letters and digits only", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["songtag"]).unwrap();
        assert_eq!(cli.normalized_directory(), "./");
        assert_eq!(cli.extension, "flac");
        assert_eq!(cli.jobs, 0);
        assert_eq!(cli.backend, Backend::External);
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_directory_gets_trailing_slash() {
        let cli = Cli::try_parse_from(["songtag", "/home/me/music"]).unwrap();
        assert_eq!(cli.normalized_directory(), "/home/me/music/");
    }

    #[test]
    fn test_extension_validation() {
        let cli = Cli::try_parse_from(["songtag", "-e", ".mp3"]).unwrap();
        assert_eq!(cli.extension, "mp3");
        assert!(Cli::try_parse_from(["songtag", "-e", "fl*c"]).is_err());
        assert!(Cli::try_parse_from(["songtag", "-e", "$(rm)"]).is_err());
    }

    #[test]
    fn test_native_backend_and_verbosity() {
        let cli = Cli::try_parse_from(["songtag", "--backend", "native", "-vv", "music"]).unwrap();
        assert_eq!(cli.backend, Backend::Native);
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["songtag", "-v", "-q"]).is_err());
    }
}
