//! # 统计汇总模块
//!
//! 封装外部统计工具调用、结果累积与 CSV 报表导出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/stats.rs` 数据模型
//! - 子模块: tool, table, export

pub mod export;
pub mod table;
pub mod tool;

pub use table::StatsTable;
pub use tool::StatsTool;
