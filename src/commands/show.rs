//! # show 命令实现
//!
//! 对单个 RDS Spy 日志运行统计工具并以终端表格展示指标。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `parsers/stats_output.rs`, `stats/tool.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::show::ShowArgs;
use crate::error::{Result, SpystatsError};
use crate::parsers::parse_stats_output;
use crate::stats::StatsTool;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 指标表格行
#[derive(Debug, Clone, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Count")]
    count: i64,
}

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    output::print_header("RDS Spy Log Statistics");

    if !args.log_file.is_file() {
        return Err(SpystatsError::FileNotFound {
            path: args.log_file.display().to_string(),
        });
    }

    let tool = StatsTool::new(&args.tool);

    let spinner = progress::create_spinner("Running statistics tool");
    let run_result = tool.run(&args.log_file);
    spinner.finish_and_clear();

    let stats = parse_stats_output(&run_result?, &args.log_file)?;

    if stats.is_empty() {
        output::print_warning(&format!(
            "Tool reported no statistics for '{}'",
            args.log_file.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "{} metrics for '{}'",
        stats.len(),
        args.log_file.display()
    ));

    // 按工具输出顺序展示
    let rows: Vec<MetricRow> = stats
        .iter()
        .map(|(metric, count)| MetricRow {
            metric: metric.to_string(),
            count,
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);

    Ok(())
}
