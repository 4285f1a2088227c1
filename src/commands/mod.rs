//! # 命令执行模块
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `tools/`, `utils/`
//! - 子模块: update

pub mod update;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    update::execute(cli)
}
