//! # 解析器模块
//!
//! 提供外部统计工具输出格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: stats_output

pub mod stats_output;

pub use stats_output::parse_stats_output;
