//! # 外部统计工具调用
//!
//! 以子进程方式运行 rdsstats 可执行文件并捕获其输出。
//!
//! ## 约定
//! - 调用形式: `<tool> <日志文件路径>`
//! - 标准输出: 零或多行 `指标: 整数值`
//! - 退出码 0 表示成功，非零为致命错误
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/show.rs` 使用
//! - 使用 `std::process::Command`

use crate::error::{Result, SpystatsError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// 外部统计工具
pub struct StatsTool {
    /// 可执行文件路径（或 PATH 中的名称）
    program: PathBuf,
}

impl StatsTool {
    /// 创建新的工具包装
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 工具名称（用于错误信息）
    pub fn name(&self) -> String {
        self.program.display().to_string()
    }

    /// 对单个日志文件运行工具，阻塞等待并返回标准输出
    ///
    /// 子进程句柄在所有退出路径上均被回收。
    pub fn run(&self, log_file: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(log_file)
            .output()
            .map_err(|_| SpystatsError::ToolNotFound {
                tool: self.name(),
            })?;

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| output.status.to_string());

            return Err(SpystatsError::ToolFailed {
                tool: self.name(),
                path: log_file.display().to_string(),
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| SpystatsError::NonUtf8Output {
            path: log_file.display().to_string(),
        })
    }
}
