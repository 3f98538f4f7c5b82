//! # 统计结果累积表
//!
//! 按处理顺序累积各日志文件的统计结果。
//!
//! ## 不变量
//! - 列顺序由第一个加入的文件的指标顺序确定，此后固定不变
//! - 行顺序即文件处理顺序
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 填充
//! - 被 `stats/export.rs` 读取

use crate::models::LogStats;
use std::path::{Path, PathBuf};

/// 整个批量运行的累积状态
///
/// 作为显式局部状态在流水线各阶段之间传递。
#[derive(Debug, Default)]
pub struct StatsTable {
    /// 权威列列表（首个文件的指标顺序）
    columns: Vec<String>,
    /// (日志路径, 统计结果)，按处理顺序
    rows: Vec<(PathBuf, LogStats)>,
}

impl StatsTable {
    pub fn new() -> Self {
        StatsTable::default()
    }

    /// 加入一个文件的统计结果
    ///
    /// 第一个文件确定列列表；后续文件的指标集不在此处校验，
    /// 缺列在导出构建行时才会暴露。
    pub fn push(&mut self, path: PathBuf, stats: LogStats) {
        if self.rows.is_empty() {
            self.columns = stats.keys().to_vec();
        }
        self.rows.push((path, stats));
    }

    /// 权威列列表
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 按处理顺序迭代 (路径, 统计结果)
    pub fn rows(&self) -> impl Iterator<Item = (&Path, &LogStats)> {
        self.rows.iter().map(|(p, s)| (p.as_path(), s))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
