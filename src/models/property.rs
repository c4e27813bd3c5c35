//! 记录属性的强类型表示
//!
//! frontmatter 中的值只允许以下几种形态：字符串、数字、布尔、空值、结构化值（列表 / 映射）。

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// 属性名到属性值的映射
pub type Properties = BTreeMap<String, PropertyValue>;

/// 单个属性值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// 列表或映射，原样保留
    Structured(JsonValue),
}

impl PropertyValue {
    /// 用于模板替换的文本形式，空值返回 None
    pub fn as_template_text(&self) -> Option<String> {
        match self {
            PropertyValue::Null => None,
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Number(n) => Some(n.to_string()),
            PropertyValue::String(s) => Some(s.clone()),
            PropertyValue::Structured(v) => Some(v.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// 转回 JSON 值（用于转发给执行服务）
    pub fn to_json(&self) -> JsonValue {
        match self {
            PropertyValue::Null => JsonValue::Null,
            PropertyValue::Bool(b) => JsonValue::Bool(*b),
            PropertyValue::Number(n) => JsonValue::Number(n.clone()),
            PropertyValue::String(s) => JsonValue::String(s.clone()),
            PropertyValue::Structured(v) => v.clone(),
        }
    }
}

impl From<JsonValue> for PropertyValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PropertyValue::Null,
            JsonValue::Bool(b) => PropertyValue::Bool(b),
            JsonValue::Number(n) => PropertyValue::Number(n),
            JsonValue::String(s) => PropertyValue::String(s),
            other => PropertyValue::Structured(other),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_text() {
        assert_eq!(PropertyValue::from("Insert").as_template_text().as_deref(), Some("Insert"));
        assert_eq!(PropertyValue::from(json!(42)).as_template_text().as_deref(), Some("42"));
        assert_eq!(PropertyValue::from(true).as_template_text().as_deref(), Some("true"));
        assert_eq!(PropertyValue::Null.as_template_text(), None);
        assert_eq!(
            PropertyValue::from(json!(["a", 1])).as_template_text().as_deref(),
            Some(r#"["a",1]"#)
        );
    }

    #[test]
    fn test_from_json_keeps_structured() {
        let value = PropertyValue::from(json!({"threads": 8}));
        assert_eq!(value, PropertyValue::Structured(json!({"threads": 8})));
        assert_eq!(value.to_json(), json!({"threads": 8}));
    }
}
