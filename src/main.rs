//! # spystats - RDS Spy 日志统计汇总工具
//!
//! 对日志目录树批量运行外部统计工具 rdsstats，
//! 将各文件的 `指标: 整数值` 输出汇总为单个 CSV 报表。
//!
//! ## 子命令
//! - `report` - 批量汇总统计并生成 CSV 报表
//! - `show`   - 对单个日志展示统计表格
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集)
//!   │     ├── parsers/   (工具输出解析)
//!   │     └── stats/     (工具调用、累积与导出)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod stats;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
