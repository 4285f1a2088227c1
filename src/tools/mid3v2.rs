//! # mid3v2 标签写入
//!
//! 调用 mutagen 提供的 `mid3v2` 写入 artist / song / comment。
//!
//! ## 依赖关系
//! - 实现 `tools::TagWriter`
//! - 使用 `tools/command.rs`

use super::command::run_checked;
use super::TagWriter;
use crate::error::Result;
use crate::models::TagUpdate;

use std::process::Command;

const PROGRAM: &str = "mid3v2";

/// `mid3v2` 命令封装
#[derive(Debug, Clone, Default)]
pub struct Mid3v2Writer;

impl Mid3v2Writer {
    pub fn new() -> Self {
        Mid3v2Writer
    }

    fn build_command(path: &str, tags: &TagUpdate) -> Command {
        let mut cmd = Command::new(PROGRAM);
        cmd.arg(format!("--artist={}", tags.artist))
            .arg(format!("--song={}", tags.song))
            .arg(format!("--comment={}", tags.comment))
            .arg(path);
        cmd
    }
}

impl TagWriter for Mid3v2Writer {
    fn check_available(&self) -> Result<()> {
        let output = run_checked(PROGRAM, Command::new(PROGRAM).arg("--version"))?;
        tracing::debug!(
            "mid3v2 check complete: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }

    fn write(&self, path: &str, tags: &TagUpdate) -> Result<()> {
        run_checked(PROGRAM, &mut Self::build_command(path, tags))?;
        Ok(())
    }
}
