//! # show 子命令 CLI 定义
//!
//! 对单个日志运行统计工具并以表格展示结果。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use clap::Args;
use std::path::PathBuf;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to a single RDS Spy log capture
    pub log_file: PathBuf,

    /// Path to the external statistics executable
    #[arg(long, env = "SPYSTATS_TOOL", default_value = "rdsstats")]
    pub tool: PathBuf,
}
