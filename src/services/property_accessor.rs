//! 属性读取 - 业务能力层
//!
//! 从记录的元数据快照读取属性，并把形如 `[[目标]]` 的链接字符串还原成目标文本

use crate::infrastructure::Record;
use crate::models::{Properties, PropertyValue};

/// 读取单个属性，不存在时返回 None（与值为 false / null 区分开）
pub fn get_property(record: &impl Record, name: &str) -> Option<PropertyValue> {
    record.metadata().remove(name).map(normalize_value)
}

/// 读取全部属性
pub fn get_all_properties(record: &impl Record) -> Properties {
    record
        .metadata()
        .into_iter()
        .map(|(k, v)| (k, normalize_value(v)))
        .collect()
}

/// 规范化单个属性值，只有整串都是链接的字符串会被改写
pub fn normalize_value(value: PropertyValue) -> PropertyValue {
    match value {
        PropertyValue::String(s) => match unwrap_link(&s) {
            Some(inner) => PropertyValue::String(inner.to_string()),
            None => PropertyValue::String(s),
        },
        other => other,
    }
}

fn unwrap_link(s: &str) -> Option<&str> {
    let inner = s.strip_prefix("[[")?.strip_suffix("]]")?;
    if inner.contains('[') || inner.contains(']') {
        return None;
    }
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryRecord;
    use serde_json::json;

    fn record(props: &[(&str, PropertyValue)]) -> MemoryRecord {
        let metadata = props
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        MemoryRecord::new("bench/a.md", "", metadata)
    }

    #[test]
    fn test_unwrap_link_values() {
        assert_eq!(normalize_value("[[Target]]".into()), PropertyValue::from("Target"));
        assert_eq!(normalize_value("not a link".into()), PropertyValue::from("not a link"));
        assert_eq!(
            normalize_value("[[partial] broken".into()),
            PropertyValue::from("[[partial] broken")
        );
        assert_eq!(
            normalize_value("see [[Target]]".into()),
            PropertyValue::from("see [[Target]]")
        );
        assert_eq!(normalize_value(PropertyValue::Bool(true)), PropertyValue::Bool(true));
    }

    #[test]
    fn test_get_property_absent_vs_falsy() {
        let record = record(&[
            ("is_run", PropertyValue::Bool(false)),
            ("note", PropertyValue::Null),
            ("link", "[[Workload A]]".into()),
        ]);
        assert_eq!(get_property(&record, "is_run"), Some(PropertyValue::Bool(false)));
        assert_eq!(get_property(&record, "note"), Some(PropertyValue::Null));
        assert_eq!(get_property(&record, "missing"), None);
        assert_eq!(get_property(&record, "link"), Some(PropertyValue::from("Workload A")));
    }

    #[test]
    fn test_get_all_properties_normalizes_strings_only() {
        let record = record(&[
            ("link", "[[Target]]".into()),
            ("list", PropertyValue::Structured(json!(["[[x]]"]))),
        ]);
        let all = get_all_properties(&record);
        assert_eq!(all.get("link"), Some(&PropertyValue::from("Target")));
        assert_eq!(
            all.get("list"),
            Some(&PropertyValue::Structured(json!(["[[x]]"])))
        );
    }
}
