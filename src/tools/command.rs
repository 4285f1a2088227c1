//! # 外部命令执行
//!
//! 统一把 `std::process::Command` 的结果转换为 [`SongtagError`]。
//!
//! ## 依赖关系
//! - 被 `tools/lister.rs`, `tools/mid3v2.rs`, `tools/touch.rs` 使用

use crate::error::{Result, SongtagError};

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// 运行命令直到结束，非零退出码视为失败
pub fn run_checked(program: &str, cmd: &mut Command) -> Result<Output> {
    let output = cmd.output().map_err(|_| SongtagError::CommandNotFound {
        command: program.to_string(),
    })?;

    if output.status.success() {
        Ok(output)
    } else {
        Err(SongtagError::CommandFailed {
            command: describe(cmd),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// 运行命令，超过 `timeout` 仍未结束则杀死进程
///
/// 不检查退出码，由调用方决定如何处理。
pub fn run_with_timeout(program: &str, cmd: &mut Command, timeout: Duration) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|_| SongtagError::CommandNotFound {
            command: program.to_string(),
        })?;

    // 单独线程读取管道，避免输出过多时子进程阻塞
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SongtagError::CommandTimeout {
                    command: describe(cmd),
                    seconds: timeout.as_secs(),
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                return Err(SongtagError::CommandFailed {
                    command: describe(cmd),
                    stderr: e.to_string(),
                })
            }
        }
    };

    let collect = |handle: Option<thread::JoinHandle<Vec<u8>>>| {
        handle.and_then(|h| h.join().ok()).unwrap_or_default()
    };

    Ok(Output {
        status,
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

/// 在辅助线程上执行一次性操作，超过 `timeout` 即返回 `CommandTimeout`
///
/// 超时后辅助线程不会被中止，它的结果被丢弃。
pub fn run_bounded<T, F>(what: &str, timeout: Duration, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(SongtagError::CommandTimeout {
            command: what.to_string(),
            seconds: timeout.as_secs(),
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(SongtagError::ListingFailed {
            path: what.to_string(),
            reason: "worker thread exited without a result".to_string(),
        }),
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

/// 用于错误信息的命令行文本
fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_checked_reports_failure() {
        let err = run_checked("false", &mut Command::new("false")).unwrap_err();
        assert!(matches!(err, SongtagError::CommandFailed { .. }));
    }

    #[test]
    fn test_missing_program() {
        let err = run_checked(
            "songtag-no-such-tool",
            &mut Command::new("songtag-no-such-tool"),
        )
        .unwrap_err();
        assert!(matches!(err, SongtagError::CommandNotFound { .. }));
    }

    #[test]
    fn test_timeout_kills_child() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");
        let started = Instant::now();
        let err = run_with_timeout("sleep", &mut cmd, Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, SongtagError::CommandTimeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_run_bounded_times_out() {
        let started = Instant::now();
        let err = run_bounded("slow walk", Duration::from_millis(100), || {
            thread::sleep(Duration::from_secs(3));
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, SongtagError::CommandTimeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_run_bounded_returns_result() {
        let value = run_bounded("fast", Duration::from_secs(5), || Ok(42)).unwrap();
        assert_eq!(value, 42);

        let err = run_bounded::<(), _>("failing", Duration::from_secs(5), || {
            Err(SongtagError::NoFilesFound {
                pattern: "*.flac".to_string(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, SongtagError::NoFilesFound { .. }));
    }

    #[test]
    fn test_run_bounded_reports_panicked_worker() {
        let err = run_bounded::<(), _>("crash", Duration::from_secs(5), || panic!("boom"))
            .unwrap_err();
        assert!(matches!(err, SongtagError::ListingFailed { .. }));
    }

    #[test]
    fn test_captures_stdout() {
        let mut cmd = Command::new("echo");
        cmd.arg("hello");
        let out = run_with_timeout("echo", &mut cmd, Duration::from_secs(5)).unwrap();
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "hello");
    }
}
