//! # 批量执行器
//!
//! 列举目录、分派单文件任务并汇总结果。
//!
//! ## 功能
//! - 固定大小的 rayon 线程池，每个条目一个任务
//! - 任务通过 channel 回报完成情况，当前线程是唯一的汇总者
//! - 任务 panic 时不回报，最终以"完成数 < 总数"体现
//!
//! ## 依赖关系
//! - 被 `commands/update.rs` 调用
//! - 使用 `batch/processor.rs`, `parsers/listing.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use super::processor::FileProcessor;
use crate::error::{Result, SongtagError};
use crate::models::{FailureReason, FileListing, ProcessingOutcome};
use crate::parsers::parse_listing;
use crate::tools::DirectoryLister;
use crate::utils::progress;

use indicatif::ProgressBar;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// 单个任务的完成回报
#[derive(Debug, Clone)]
pub struct Completion {
    pub id: usize,
    pub path: String,
    pub outcome: ProcessingOutcome,
}

/// 失败条目
#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub id: usize,
    pub path: String,
    pub reason: FailureReason,
    pub detail: String,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 分派的任务数
    pub total: usize,
    /// 回报完成的任务数（成功或失败）
    pub completed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
    /// 失败详情，按 id 排序
    pub failures: Vec<FailureRecord>,
}

impl BatchReport {
    /// 合并一个完成回报
    pub fn merge(&mut self, completion: Completion) {
        self.completed += 1;
        match completion.outcome {
            ProcessingOutcome::Success => self.succeeded += 1,
            ProcessingOutcome::Failure { reason, detail } => {
                self.failed += 1;
                self.failures.push(FailureRecord {
                    id: completion.id,
                    path: completion.path,
                    reason,
                    detail,
                });
            }
        }
    }

    /// 所有分派的任务都已回报
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 时使用 CPU 核数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 列举 `directory` 中的 `*.extension` 并逐个处理
    ///
    /// 列举失败时整个批次不会开始。
    pub fn run(
        &self,
        directory: &str,
        extension: &str,
        lister: &dyn DirectoryLister,
        processor: Arc<FileProcessor>,
    ) -> Result<BatchReport> {
        let started = Instant::now();

        let raw = lister.list(directory, extension)?;
        debug!("LISTINGS:\n{}", raw.trim_end());

        let entries = parse_listing(&raw, lister.layout());
        info!("LISTINGS COUNT: {}", entries.len());

        let mut report = self.dispatch(entries, processor)?;
        report.elapsed = started.elapsed();
        Ok(report)
    }

    /// 分派全部条目，阻塞直到所有任务结束
    pub fn dispatch(
        &self,
        entries: Vec<Result<FileListing>>,
        processor: Arc<FileProcessor>,
    ) -> Result<BatchReport> {
        let started = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("songtag-worker-{}", i))
            .panic_handler(|payload| {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("worker panicked: {}", msg);
            })
            .build()
            .map_err(|e| SongtagError::ThreadPool(e.to_string()))?;

        let total = entries.len();
        let (tx, rx) = mpsc::channel::<Completion>();

        // 序号从 1 开始，按列表顺序分配
        for (id, entry) in (1..).zip(entries) {
            let tx = tx.clone();
            let processor = Arc::clone(&processor);
            pool.spawn(move || {
                let completion = run_entry(&processor, entry, id);
                // 接收端只会在汇总结束后关闭
                let _ = tx.send(completion);
            });
        }
        drop(tx);

        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Tagging")
        } else {
            ProgressBar::hidden()
        };

        let mut report = BatchReport {
            total,
            ..Default::default()
        };
        // 所有发送端（包括 panic 的任务）释放后循环结束
        for completion in rx {
            report.merge(completion);
            pb.inc(1);
        }
        pb.finish_and_clear();

        report.failures.sort_by_key(|f| f.id);
        report.elapsed = started.elapsed();
        Ok(report)
    }
}

fn run_entry(processor: &FileProcessor, entry: Result<FileListing>, id: usize) -> Completion {
    match entry {
        Ok(listing) => {
            let outcome = processor.process(&listing, id);
            Completion {
                id,
                path: listing.path,
                outcome,
            }
        }
        Err(e) => {
            info!(id, "Begin");
            error!(id, "{}", e);
            let path = match &e {
                SongtagError::ListingShape { line, .. } => line.clone(),
                _ => String::new(),
            };
            Completion {
                id,
                path,
                outcome: ProcessingOutcome::failure(FailureReason::MalformedListing, e.to_string()),
            }
        }
    }
}
