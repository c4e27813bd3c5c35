use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// 单个条目的提交结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    /// 执行服务的响应体，原样透传
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub fail_count: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &SubmissionOutcome) {
        if outcome.success {
            self.success_count += 1;
        } else {
            self.fail_count += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.fail_count
    }
}

/// 一次运行的最终结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunReport {
    /// 没有任何条目，未发起网络请求
    NothingToRun,
    Completed(RunSummary),
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunReport::NothingToRun => write!(f, "没有可运行的条目"),
            RunReport::Completed(s) => {
                write!(f, "运行完成: 成功 {}, 失败 {}", s.success_count, s.fail_count)
            }
        }
    }
}
