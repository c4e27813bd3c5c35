/// 执行服务客户端
///
/// 封装向执行服务提交基准测试的 HTTP 调用
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 提交给执行服务的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "yamlContent")]
    pub yaml_content: String,
    /// 缺失时序列化为 null
    pub variables: Option<JsonValue>,
    pub running_name: String,
}

/// 执行服务的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// 状态码在 [200, 300) 内视为成功
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 响应体：能解析为 JSON 时返回 JSON，否则作为字符串返回，空响应返回 None
    pub fn data(&self) -> Option<JsonValue> {
        if self.body.trim().is_empty() {
            return None;
        }
        Some(
            serde_json::from_str(&self.body)
                .unwrap_or_else(|_| JsonValue::String(self.body.clone())),
        )
    }
}

/// 提交能力
///
/// 只有传输层失败（连接不上、读响应失败）才返回 Err，非 2xx 状态码通过 `HttpReply` 返回
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, url: &str, request: &SubmissionRequest) -> AppResult<HttpReply>;
}

/// 基于 reqwest 的执行服务客户端
#[derive(Debug, Clone, Default)]
pub struct BenchClient {
    client: Client,
}

impl BenchClient {
    /// 创建新的客户端（不额外设置超时）
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// 使用自定义的 reqwest 客户端（代理、证书等由调用方配置）
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Submitter for BenchClient {
    async fn submit(&self, url: &str, request: &SubmissionRequest) -> AppResult<HttpReply> {
        debug!(
            "提交 {} (运行名称: {}, 负载 {} 字节)",
            request.file_path,
            request.running_name,
            request.yaml_content.len()
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        debug!("执行服务响应: HTTP {}", status);

        Ok(HttpReply { status, body })
    }
}
