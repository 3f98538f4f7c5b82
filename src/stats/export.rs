//! # 报表导出
//!
//! 将累积的统计结果写为 CSV 报表。
//!
//! ## 格式
//! - 表头: `File,<列1>,<列2>,…`
//! - 每个日志文件一行，路径相对搜索根目录
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `stats/table.rs` 的 StatsTable 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, SpystatsError};
use crate::stats::StatsTable;
use std::path::Path;

/// 写出 CSV 报表
///
/// 行内路径通过剥离 `root` 前缀相对化。所有行先在内存中构建完成，
/// 再创建输出文件，因此任何失败（如某行缺少权威列）都不会留下
/// 残缺报表。
pub fn write_report(table: &StatsTable, output_path: &Path, root: &Path) -> Result<()> {
    let records = build_records(table, root)?;

    let mut wtr = csv::Writer::from_path(output_path).map_err(SpystatsError::CsvError)?;

    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push("File");
    header.extend(table.columns().iter().map(|c| c.as_str()));
    wtr.write_record(&header).map_err(SpystatsError::CsvError)?;

    for record in &records {
        wtr.write_record(record).map_err(SpystatsError::CsvError)?;
    }

    wtr.flush().map_err(|e| SpystatsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 构建全部数据行，按列顺序取值
fn build_records(table: &StatsTable, root: &Path) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::with_capacity(table.len());

    for (path, stats) in table.rows() {
        let rel = path.strip_prefix(root).unwrap_or(path);

        let mut record = Vec::with_capacity(table.columns().len() + 1);
        record.push(rel.display().to_string());

        for column in table.columns() {
            let value = stats
                .get(column)
                .ok_or_else(|| SpystatsError::MissingColumn {
                    path: path.display().to_string(),
                    column: column.clone(),
                })?;
            record.push(value.to_string());
        }

        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogStats;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn stats(pairs: &[(&str, i64)]) -> LogStats {
        let mut s = LogStats::new();
        for (k, v) in pairs {
            s.insert(*k, *v);
        }
        s
    }

    #[test]
    fn test_report_content_and_order() {
        let dir = TempDir::new().unwrap();
        let root = PathBuf::from("/logs");

        let mut table = StatsTable::new();
        table.push(
            root.join("sub/x.spy"),
            stats(&[("RDS", 1481), ("BERR", 4)]),
        );
        table.push(root.join("y.spy"), stats(&[("BERR", 0), ("RDS", 7)]));

        let out = dir.path().join("spy_stats.csv");
        write_report(&table, &out, &root).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["File,RDS,BERR", "sub/x.spy,1481,4", "y.spy,7,0"]);
    }

    #[test]
    fn test_negative_values() {
        let dir = TempDir::new().unwrap();
        let root = PathBuf::from("/logs");

        let mut table = StatsTable::new();
        table.push(root.join("a.spy"), stats(&[("count", 42), ("errors", -3)]));

        let out = dir.path().join("out.csv");
        write_report(&table, &out, &root).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().nth(1), Some("a.spy,42,-3"));
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("empty.csv");

        write_report(&StatsTable::new(), &out, Path::new("/logs")).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.trim_end(), "File");
    }

    #[test]
    fn test_missing_column_aborts_before_creating_file() {
        let dir = TempDir::new().unwrap();
        let root = PathBuf::from("/logs");

        let mut table = StatsTable::new();
        table.push(root.join("a.spy"), stats(&[("RDS", 1), ("BERR", 2)]));
        table.push(root.join("b.spy"), stats(&[("RDS", 3)]));

        let out = dir.path().join("out.csv");
        let err = write_report(&table, &out, &root).unwrap_err();

        match err {
            SpystatsError::MissingColumn { path, column } => {
                assert_eq!(path, "/logs/b.spy");
                assert_eq!(column, "BERR");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let root = PathBuf::from("/logs");
        let out = PathBuf::from("/no/such/dir/out.csv");

        let err = write_report(&StatsTable::new(), &out, &root).unwrap_err();
        assert!(matches!(err, SpystatsError::CsvError(_)));
    }
}
