//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及批次结束时的汇总。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/update.rs` 使用
//! - 使用 `colored`, `tabled` crate

use crate::batch::BatchReport;

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 失败表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 汇总文本："all N" 或 "M of N"
pub fn summary_line(report: &BatchReport) -> String {
    if report.is_complete() {
        format!(
            "Attempted operations on all {} file(s) detected, in {:.3} second(s).",
            report.total,
            report.elapsed_seconds()
        )
    } else {
        format!(
            "Of {} file(s) found, attempted operations on {}, over {:.3} second(s).",
            report.total,
            report.completed,
            report.elapsed_seconds()
        )
    }
}

/// 打印批次汇总和失败列表
pub fn print_summary(report: &BatchReport) {
    print_separator();

    if !report.failures.is_empty() {
        let rows: Vec<FailureRow> = report
            .failures
            .iter()
            .map(|f| FailureRow {
                id: f.id,
                file: f.path.clone(),
                reason: f.reason.to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    let line = summary_line(report);
    if report.is_complete() {
        print_done(&line);
    } else {
        print_warning(&line);
    }

    if report.failed > 0 || !report.is_complete() {
        print_info(&format!(
            "{} succeeded, {} failed; check the log for details.",
            report.succeeded, report.failed
        ));
    }
}
