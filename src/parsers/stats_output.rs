//! # 统计工具输出解析器
//!
//! 解析 rdsstats 的标准输出，每行一个 `指标: 整数值` 对。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/show.rs` 使用
//! - 使用 `models/stats.rs`

use crate::error::{Result, SpystatsError};
use crate::models::LogStats;
use std::path::Path;

/// 解析统计工具的完整标准输出
///
/// 每行按第一个冒号切分：冒号前为指标名称，冒号后为十进制整数
/// （允许负值）。空行跳过；缺少冒号或数值段不是整数均为致命错误。
pub fn parse_stats_output(output: &str, path: &Path) -> Result<LogStats> {
    let mut stats = LogStats::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        // "RDS: 1481" / "BERR: 4" / "RT+: 12"
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| malformed(path, line))?;

        let value: i64 = value
            .trim()
            .parse()
            .map_err(|_| malformed(path, line))?;

        stats.insert(key, value);
    }

    Ok(stats)
}

fn malformed(path: &Path, line: &str) -> SpystatsError {
    SpystatsError::MalformedLine {
        path: path.display().to_string(),
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn log_path() -> PathBuf {
        PathBuf::from("logs/KQED.spy")
    }

    #[test]
    fn test_parse_basic_output() {
        let output = "RDS: 1481\nBERR: 4\n0A: 620\n0B: 0\n";
        let stats = parse_stats_output(output, &log_path()).unwrap();

        assert_eq!(stats.keys(), &["RDS", "BERR", "0A", "0B"]);
        assert_eq!(stats.get("RDS"), Some(1481));
        assert_eq!(stats.get("0B"), Some(0));
    }

    #[test]
    fn test_parse_negative_value() {
        let stats = parse_stats_output("count:42\nerrors:-3", &log_path()).unwrap();

        assert_eq!(stats.get("count"), Some(42));
        assert_eq!(stats.get("errors"), Some(-3));
    }

    #[test]
    fn test_parse_keys_with_symbols() {
        // rdsstats 输出的指标名可含 '+', '-' 和数字
        let output = "RT+: 12\nRDS-TMC: 7\niTunes: 0";
        let stats = parse_stats_output(output, &log_path()).unwrap();

        assert_eq!(stats.keys(), &["RT+", "RDS-TMC", "iTunes"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let stats = parse_stats_output("RDS: 1\n\nBERR: 2\n", &log_path()).unwrap();
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_parse_empty_output() {
        let stats = parse_stats_output("", &log_path()).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_missing_colon_is_fatal() {
        let err = parse_stats_output("RDS: 1\nfoo\n", &log_path()).unwrap_err();

        match err {
            SpystatsError::MalformedLine { path, line } => {
                assert_eq!(path, "logs/KQED.spy");
                assert_eq!(line, "foo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_value_is_fatal() {
        let err = parse_stats_output("RDS: many", &log_path()).unwrap_err();

        match err {
            SpystatsError::MalformedLine { line, .. } => assert_eq!(line, "RDS: many"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_second_colon_belongs_to_value() {
        // 只按第一个冒号切分，剩余部分必须整体是整数
        let err = parse_stats_output("time:12:30", &log_path()).unwrap_err();
        assert!(matches!(err, SpystatsError::MalformedLine { .. }));
    }
}
