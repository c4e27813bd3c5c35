//! 批量调度器 - 编排层
//!
//! ## 职责
//!
//! 把收集到的条目逐个提交到执行服务，并汇总成功 / 失败数量。
//!
//! ## 设计特点
//!
//! - **严格顺序**：前一个提交返回后才开始下一个，同一时刻只有一个请求在途
//! - **失败不中断**：单个条目失败只计数和记录，始终尝试所有条目
//! - **空列表特判**：没有条目时不发起任何请求，返回 `RunReport::NothingToRun`

use tracing::info;

use crate::clients::Submitter;
use crate::models::{BenchmarkEntry, RunReport, RunSummary, SubmissionOutcome};
use crate::services::{resolve_name, FailureWriter};
use crate::utils::logging::log_run_start;
use crate::workflow::{EntryCtx, EntryFlow};

/// 批量调度器
pub struct Dispatcher<S> {
    flow: EntryFlow<S>,
}

impl<S: Submitter> Dispatcher<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            flow: EntryFlow::new(submitter),
        }
    }

    pub fn with_failure_writer(self, writer: FailureWriter) -> Self {
        Self {
            flow: self.flow.with_failure_writer(writer),
        }
    }

    pub fn submitter(&self) -> &S {
        self.flow.submitter()
    }

    /// 顺序提交所有条目并返回汇总
    pub async fn run(
        &self,
        service_url: &str,
        entries: &[BenchmarkEntry],
        name_template: &str,
    ) -> RunReport {
        let (report, _) = self.run_detailed(service_url, entries, name_template).await;
        report
    }

    /// 顺序提交所有条目，同时返回每个条目的结果（与输入顺序一致）
    pub async fn run_detailed(
        &self,
        service_url: &str,
        entries: &[BenchmarkEntry],
        name_template: &str,
    ) -> (RunReport, Vec<SubmissionOutcome>) {
        if entries.is_empty() {
            info!("💡 没有可运行的条目，不发起请求");
            return (RunReport::NothingToRun, Vec::new());
        }

        let total = entries.len();
        log_run_start(service_url, total);

        let mut summary = RunSummary::default();
        let mut outcomes = Vec::with_capacity(total);

        for (idx, entry) in entries.iter().enumerate() {
            let running_name = resolve_name(name_template, entry);
            let ctx = EntryCtx::new(idx + 1, total, running_name);

            let outcome = self.flow.run(service_url, entry, &ctx).await;
            summary.record(&outcome);
            outcomes.push(outcome);
        }

        (RunReport::Completed(summary), outcomes)
    }
}
