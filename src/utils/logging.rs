//! # 日志初始化
//!
//! 进程启动时配置一次 `tracing-subscriber`，之后各工作线程只读使用。
//! `RUST_LOG` 优先于命令行给出的级别。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing`, `tracing-subscriber`

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 由 `-v` / `-q` 推导默认级别
pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 安装全局 subscriber，输出到 stderr
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    // 重复初始化（例如测试中）时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(level >= Level::DEBUG)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
