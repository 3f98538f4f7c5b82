//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `report`: 批量汇总日志统计并生成 CSV 报表
//! - `show`: 对单个日志运行统计工具并以表格展示
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: report, show

pub mod report;
pub mod show;

use clap::{Parser, Subcommand};

/// spystats - RDS Spy 日志统计汇总工具
#[derive(Parser)]
#[command(name = "spystats")]
#[command(version)]
#[command(about = "Batch statistics collection and CSV reporting for RDS Spy log captures", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate per-file statistics from a log tree into a CSV report
    Report(report::ReportArgs),

    /// Run the statistics tool on a single capture and display the metrics
    Show(show::ShowArgs),
}
