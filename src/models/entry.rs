use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::property::Properties;

/// 基准测试条目
///
/// 收集时生成的值快照，之后源文档的变化不会影响已收集的条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    file_path: String,
    /// 提取出的负载文本，原样转发
    pub payload: String,
    pub is_eligible: bool,
    /// 变量属性的值，缺失时为 None
    pub variables: Option<JsonValue>,
    pub properties: Properties,
}

impl BenchmarkEntry {
    pub fn new(
        file_path: impl Into<String>,
        payload: impl Into<String>,
        variables: Option<JsonValue>,
        properties: Properties,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            payload: payload.into(),
            is_eligible: true,
            variables,
            properties,
        }
    }

    /// 源文档路径（创建后不可修改）
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}
