//! # report 子命令 CLI 定义
//!
//! 批量汇总 RDS Spy 日志统计并生成 CSV 报表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`

use clap::Args;
use std::path::PathBuf;

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Root directory containing the RDS Spy log tree
    pub root: PathBuf,

    /// Glob pattern(s) for log files, comma separated
    #[arg(short, long, default_value = "*.spy")]
    pub pattern: String,

    /// Path to the external statistics executable
    #[arg(long, env = "SPYSTATS_TOOL", default_value = "rdsstats")]
    pub tool: PathBuf,

    /// Destination CSV file
    #[arg(short, long, default_value = "spy_stats.csv")]
    pub output: PathBuf,

    /// Do not recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub no_recurse: bool,
}
