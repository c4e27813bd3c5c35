//! 失败记录服务 - 业务能力层
//!
//! 只负责把提交失败的条目追加写入诊断文件，不关心流程

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 失败记录服务
///
/// 职责：
/// - 将提交失败的条目写入 failed_runs.txt
/// - 只处理单个条目
/// - 不中断运行
pub struct FailureWriter {
    log_file_path: String,
}

impl FailureWriter {
    /// 使用默认文件创建
    pub fn new() -> Self {
        Self::with_path("failed_runs.txt")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// 写入一条失败记录
    ///
    /// # 参数
    /// - `file_path`: 条目的源文档
    /// - `running_name`: 解析出的运行名称
    /// - `message`: 失败原因
    pub fn write(&self, file_path: &str, running_name: &str, message: &str) -> AppResult<()> {
        debug!("写入失败记录: {} | {}", file_path, running_name);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .map_err(|e| AppError::io(&self.log_file_path, e))?;

        let line = format!(
            "{} | 文档 {} | 运行名称 {} | 原因: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            file_path,
            running_name,
            message.replace('\n', " ")
        );

        file.write_all(line.as_bytes())
            .map_err(|e| AppError::io(&self.log_file_path, e))?;

        Ok(())
    }
}

impl Default for FailureWriter {
    fn default() -> Self {
        Self::new()
    }
}
