//! # report 命令实现
//!
//! 批量汇总 RDS Spy 日志统计并生成 CSV 报表。
//!
//! ## 功能
//! - 递归收集匹配的日志文件
//! - 对每个文件运行外部统计工具并解析输出
//! - 以首个文件的指标顺序为权威列累积结果
//! - 写出 CSV 报表（路径相对搜索根目录）
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `parsers/stats_output.rs`
//! - 使用 `stats/`, `utils/output.rs`, `utils/progress.rs`

use crate::batch::FileCollector;
use crate::cli::report::ReportArgs;
use crate::error::Result;
use crate::models::LogStats;
use crate::parsers::parse_stats_output;
use crate::stats::{export, StatsTable, StatsTool};
use crate::utils::{output, progress};

use std::path::Path;

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_header("Collecting RDS Spy Log Statistics");

    // 收集日志文件（根目录不存在时得到空列表，不视为致命错误）
    let collector = FileCollector::new(args.root.clone())
        .with_pattern(&args.pattern)
        .recursive(!args.no_recurse);

    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No log files matching '{}' under '{}'",
            args.pattern,
            args.root.display()
        ));
    } else {
        output::print_info(&format!(
            "Found {} log files under '{}'",
            files.len(),
            args.root.display()
        ));
    }

    let tool = StatsTool::new(&args.tool);
    let pb = progress::create_progress_bar(files.len() as u64, "Analyzing");

    // 顺序处理；任何失败立即中止，不写出报表
    let mut table = StatsTable::new();
    for file in &files {
        pb.set_message(file.display().to_string());

        match analyze_log(&tool, file) {
            Ok(stats) => table.push(file.clone(), stats),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    export::write_report(&table, &args.output, &args.root)?;

    output::print_success(&format!(
        "Report for {} log files saved to '{}'",
        table.len(),
        args.output.display()
    ));

    Ok(())
}

/// 对单个日志运行统计工具并解析输出
fn analyze_log(tool: &StatsTool, log_file: &Path) -> Result<LogStats> {
    let stdout = tool.run(log_file)?;
    parse_stats_output(&stdout, log_file)
}
