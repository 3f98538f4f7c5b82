//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理的日志文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索
//! - 根目录不存在或不可读时返回空列表（不视为致命错误）
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob::Pattern` 匹配文件名

use crate::error::{Result, SpystatsError};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 顺序为底层遍历顺序，单次运行内稳定。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let patterns = self.compile_patterns()?;

        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Ok(vec![]);
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let files = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::matches_any(&patterns, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        Ok(files)
    }

    /// 编译所有 glob 模式
    fn compile_patterns(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|_| SpystatsError::InvalidPattern {
                    pattern: p.clone(),
                })
            })
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches_any(patterns: &[Pattern], path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        patterns.iter().any(|p| p.matches(filename))
    }
}
