//! # update 命令实现
//!
//! 对目录中的全部匹配文件写入标签并恢复修改时间。
//!
//! ## 流程
//! - 检查 `mid3v2` 是否可用
//! - 检查目录是否可访问
//! - 列举文件并并行处理
//! - 打印汇总，可选导出失败报告
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `tools/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::{BatchReport, BatchRunner, FileProcessor};
use crate::cli::{Backend, Cli};
use crate::error::Result;
use crate::tools::{
    self, DirectoryLister, FileTimeSetter, LsLister, Mid3v2Writer, NativeLister, TagWriter,
    TimestampSetter, TouchSetter,
};
use crate::utils::{output, report};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// 执行 update 命令
pub fn execute(args: Cli) -> Result<()> {
    execute_with(args, Arc::new(Mid3v2Writer::new()))
}

/// 使用给定的标签写入工具执行
pub fn execute_with(args: Cli, tag_writer: Arc<dyn TagWriter>) -> Result<()> {
    debug!("STARTING MID3V2 CHECK");
    if let Err(e) = tag_writer.check_available() {
        error!("mid3v2 not detected. Install 'python3-mutagen' (or 'python-mutagen'), which provides the 'mid3v2' command.");
        return Err(e);
    }
    debug!("MID3V2 CHECK COMPLETE");

    let directory = args.normalized_directory();
    debug!("DIRECTORY_INPUT: {}", directory);
    tools::verify_directory(&directory)?;

    let (lister, setter) = collaborators(args.backend, Duration::from_secs(args.timeout));
    let processor = Arc::new(FileProcessor::new(directory.clone(), tag_writer, setter));

    let runner = BatchRunner::new(args.jobs).with_progress(args.progress);
    info!(
        "Processing *.{} in {} with {} worker(s) ({} backend)",
        args.extension,
        directory,
        runner.jobs(),
        args.backend
    );

    let batch = runner.run(&directory, &args.extension, lister.as_ref(), processor)?;
    log_summary(&batch);
    output::print_summary(&batch);

    if let Some(path) = &args.report {
        report::write_failure_report(path, &batch.failures)?;
        output::print_info(&format!("Failure report written to '{}'", path.display()));
    }

    Ok(())
}

/// 按后端选择目录列举和时间戳恢复的实现
fn collaborators(
    backend: Backend,
    timeout: Duration,
) -> (Box<dyn DirectoryLister>, Arc<dyn TimestampSetter>) {
    match backend {
        Backend::External => (Box::new(LsLister::new(timeout)), Arc::new(TouchSetter)),
        Backend::Native => (
            Box::new(NativeLister::new(timeout)),
            Arc::new(FileTimeSetter),
        ),
    }
}

fn log_summary(batch: &BatchReport) {
    let line = output::summary_line(batch);
    if batch.is_complete() {
        info!(
            total = batch.total,
            completed = batch.completed,
            failed = batch.failed,
            "{}",
            line
        );
    } else {
        error!(
            total = batch.total,
            completed = batch.completed,
            failed = batch.failed,
            "{}",
            line
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SongtagError;
    use crate::models::TagUpdate;
    use clap::Parser;
    use std::sync::Mutex;

    /// 可控的标签写入器，记录实际写入的路径
    #[derive(Default)]
    struct StubWriter {
        missing: bool,
        written: Mutex<Vec<String>>,
    }

    impl TagWriter for StubWriter {
        fn check_available(&self) -> Result<()> {
            if self.missing {
                Err(SongtagError::CommandNotFound {
                    command: "mid3v2".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn write(&self, path: &str, _tags: &TagUpdate) -> Result<()> {
            self.written.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("songtag").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_tag_writer_fails_before_directory_check() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let writer = Arc::new(StubWriter {
            missing: true,
            ..Default::default()
        });

        let err = execute_with(cli(&[missing.to_str().unwrap()]), writer.clone()).unwrap_err();
        assert!(matches!(err, SongtagError::CommandNotFound { .. }));
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = execute_with(
            cli(&["--backend", "native", missing.to_str().unwrap()]),
            Arc::new(StubWriter::default()),
        )
        .unwrap_err();
        assert!(matches!(err, SongtagError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_no_matching_files_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("song.mp3"), b"x").unwrap();

        let err = execute_with(
            cli(&["--backend", "native", dir.path().to_str().unwrap()]),
            Arc::new(StubWriter::default()),
        )
        .unwrap_err();
        assert!(matches!(err, SongtagError::NoFilesFound { .. }));
    }

    #[test]
    fn test_native_run_with_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A_-_One.flac"), b"a").unwrap();
        std::fs::write(dir.path().join("Broken_Name.flac"), b"b").unwrap();
        let report = dir.path().join("failures.csv");
        let writer = Arc::new(StubWriter::default());

        execute_with(
            cli(&[
                "--backend",
                "native",
                "-q",
                "--report",
                report.to_str().unwrap(),
                dir.path().to_str().unwrap(),
            ]),
            writer.clone(),
        )
        .unwrap();

        assert_eq!(writer.written.lock().unwrap().len(), 1);
        let csv = std::fs::read_to_string(&report).unwrap();
        assert!(csv.contains("malformed_filename"));
    }

    #[test]
    fn test_collaborator_layouts() {
        let (lister, _) = collaborators(Backend::External, Duration::from_secs(1));
        assert_eq!(lister.layout(), LsLister::LAYOUT);

        let (lister, _) = collaborators(Backend::Native, Duration::from_secs(1));
        assert_eq!(lister.layout(), NativeLister::LAYOUT);
    }
}
