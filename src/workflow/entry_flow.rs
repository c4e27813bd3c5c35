//! 条目提交流程 - 流程层
//!
//! 核心职责：定义"一个条目"的完整提交流程
//!
//! 流程顺序：
//! 1. 构建请求体
//! 2. 提交到执行服务
//! 3. 按状态码分类结果，失败时写入失败记录（兜底）

use tracing::{error, info, warn};

use crate::clients::{HttpReply, SubmissionRequest, Submitter};
use crate::error::AppResult;
use crate::models::{BenchmarkEntry, SubmissionOutcome};
use crate::services::FailureWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::entry_ctx::EntryCtx;

/// 条目提交流程
///
/// - 不持有条目列表
/// - 不统计结果，只返回单个条目的结果
/// - 任何失败都转换成 `SubmissionOutcome`，不向上抛出
pub struct EntryFlow<S> {
    submitter: S,
    failure_writer: Option<FailureWriter>,
}

impl<S: Submitter> EntryFlow<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            failure_writer: None,
        }
    }

    /// 提交失败时额外写入失败记录文件
    pub fn with_failure_writer(mut self, writer: FailureWriter) -> Self {
        self.failure_writer = Some(writer);
        self
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub async fn run(
        &self,
        service_url: &str,
        entry: &BenchmarkEntry,
        ctx: &EntryCtx,
    ) -> SubmissionOutcome {
        info!("{} 📤 正在提交 {}", ctx, entry.file_path());

        let request = build_request(entry, ctx);
        let outcome = classify(self.submitter.submit(service_url, &request).await);

        if outcome.success {
            info!("{} ✓ {}", ctx, outcome.message);
        } else {
            warn!("{} ⚠️ 提交失败: {}", ctx, outcome.message);
            self.write_failure(entry, ctx, &outcome.message);
        }

        outcome
    }

    fn write_failure(&self, entry: &BenchmarkEntry, ctx: &EntryCtx, message: &str) {
        if let Some(writer) = &self.failure_writer {
            if let Err(e) = writer.write(entry.file_path(), &ctx.running_name, message) {
                error!("{} 写入失败记录出错: {}", ctx, e);
            }
        }
    }
}

/// 构建请求体
pub fn build_request(entry: &BenchmarkEntry, ctx: &EntryCtx) -> SubmissionRequest {
    SubmissionRequest {
        file_path: entry.file_path().to_string(),
        yaml_content: entry.payload.clone(),
        variables: entry.variables.clone(),
        running_name: ctx.running_name.clone(),
    }
}

/// 把提交结果分类为成功 / 失败
pub fn classify(result: AppResult<HttpReply>) -> SubmissionOutcome {
    match result {
        Ok(reply) if reply.is_success() => SubmissionOutcome {
            success: true,
            message: format!("提交成功 (HTTP {})", reply.status),
            data: reply.data(),
        },
        Ok(reply) => SubmissionOutcome {
            success: false,
            message: format!(
                "执行服务返回 HTTP {}: {}",
                reply.status,
                truncate_text(reply.body.trim(), 200)
            ),
            data: reply.data(),
        },
        Err(e) => SubmissionOutcome {
            success: false,
            message: e.to_string(),
            data: None,
        },
    }
}
