//! # 单文件统计结果数据模型
//!
//! 存储统计工具对单个 RDS Spy 日志的分析结果。
//!
//! ## 依赖关系
//! - 被 `parsers/stats_output.rs` 构造
//! - 被 `stats/`, `commands/` 使用

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个日志文件的统计结果
///
/// 指标名称保持工具输出的首见顺序，名称唯一。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogStats {
    /// 指标名称，按首次出现顺序
    keys: Vec<String>,

    /// 指标名称 -> 计数值
    values: HashMap<String, i64>,
}

impl LogStats {
    pub fn new() -> Self {
        LogStats::default()
    }

    /// 记录一个指标值，重复名称只更新值不新增列
    pub fn insert(&mut self, key: impl Into<String>, value: i64) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    /// 指标名称，按首见顺序
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 按首见顺序迭代 (名称, 值)
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.keys
            .iter()
            .map(move |k| (k.as_str(), self.values[k]))
    }
}
