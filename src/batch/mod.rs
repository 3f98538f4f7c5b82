//! # 批量处理模块
//!
//! 提供日志文件的批量发现能力。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 使用
//! - 使用 `walkdir` 与 `glob`

pub mod collector;

pub use collector::FileCollector;
