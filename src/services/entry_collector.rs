//! 条目收集 - 业务能力层
//!
//! 遍历集合的记录，筛出标记为运行的记录，组装成 `BenchmarkEntry`

use tracing::{debug, info};

use crate::infrastructure::{CollectionSource, Record};
use crate::models::{BenchmarkEntry, PropertyValue};
use crate::services::body_parser::extract_payload;
use crate::services::property_accessor::{get_all_properties, get_property};

/// 收集集合中所有可运行的条目
///
/// - 集合没有可用视图时返回空列表，不视为错误
/// - 文档不可读的记录直接跳过
/// - 只有运行属性严格等于布尔 `true` 的记录才会被收集
pub fn collect<S: CollectionSource>(
    source: &S,
    collection_id: &str,
    eligibility_property: &str,
    variables_property: &str,
) -> Vec<BenchmarkEntry> {
    let Some(records) = source.records(collection_id) else {
        info!("集合 {} 没有可用视图，跳过", collection_id);
        return Vec::new();
    };

    let total = records.len();
    let entries: Vec<BenchmarkEntry> = records
        .iter()
        .filter_map(|record| build_entry(record, eligibility_property, variables_property))
        .collect();

    info!(
        "集合 {}: 共 {} 条记录，{} 条待运行",
        collection_id,
        total,
        entries.len()
    );

    entries
}

fn build_entry(
    record: &impl Record,
    eligibility_property: &str,
    variables_property: &str,
) -> Option<BenchmarkEntry> {
    let Some(text) = record.read_text() else {
        debug!("记录 {} 没有对应文档，跳过", record.path());
        return None;
    };

    if !is_eligible(record, eligibility_property) {
        debug!("记录 {} 未标记运行", record.path());
        return None;
    }

    let payload = extract_payload(&text);
    let properties = get_all_properties(record);
    let variables = match properties.get(variables_property) {
        None | Some(PropertyValue::Null) => None,
        Some(value) => Some(value.to_json()),
    };

    Some(BenchmarkEntry::new(
        record.path(),
        payload,
        variables,
        properties,
    ))
}

fn is_eligible(record: &impl Record, eligibility_property: &str) -> bool {
    matches!(
        get_property(record, eligibility_property),
        Some(PropertyValue::Bool(true))
    )
}
