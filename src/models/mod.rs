//! # 数据模型模块
//!
//! 定义统计结果数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `stats/` 使用
//! - 子模块: stats

pub mod stats;

pub use stats::LogStats;
