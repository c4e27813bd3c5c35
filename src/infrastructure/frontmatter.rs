//! frontmatter 切分与解析

use tracing::debug;

use crate::models::{Properties, PropertyValue};

/// 切分文档开头的 frontmatter 块
///
/// 文档必须以单独一行 `---` 开头，并在之后出现另一行单独的 `---`。
/// 返回 (frontmatter 内容, 正文)；没有 frontmatter 时正文为整个文档
pub fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, text)
}

/// 解析 frontmatter 为属性映射
///
/// 没有 frontmatter、YAML 非法或顶层不是映射时返回空映射
pub fn parse_frontmatter(text: &str) -> Properties {
    let mut properties = Properties::new();

    let Some(yaml) = split_frontmatter(text).0 else {
        return properties;
    };

    let mapping = match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        Ok(serde_yaml::Value::Mapping(mapping)) => mapping,
        Ok(_) => return properties,
        Err(e) => {
            debug!("frontmatter 解析失败: {}", e);
            return properties;
        }
    };

    for (key, value) in mapping {
        let Some(key) = yaml_key_to_string(&key) else {
            continue;
        };
        match serde_json::to_value(&value) {
            Ok(json) => {
                properties.insert(key, PropertyValue::from(json));
            }
            Err(e) => debug!("属性 {} 无法转换: {}", key, e),
        }
    }

    properties
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
