//! # songtag - 根据文件名批量写入歌曲标签
//!
//! 文件名形如 `Song_-_Artist.flac` 或 `Song_-_Artist_-_{VideoId}.flac`，
//! 解析后通过 `mid3v2` 写入 artist / song / comment，再恢复文件原来的修改时间。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (单文件处理与并行执行)
//!   │           ├── parsers/   (文件名、列表、时间戳解析)
//!   │           ├── tools/     (mid3v2 / ls / touch 等外部能力)
//!   │           └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、日志、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod tools;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(utils::logging::level_from_flags(cli.verbose, cli.quiet));

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
