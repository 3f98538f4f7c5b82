//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `stats/`, `utils/`
//! - 子模块: report, show

pub mod report;
pub mod show;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Report(args) => report::execute(args),
        Commands::Show(args) => show::execute(args),
    }
}
