//! 内存数据源，供测试和嵌入使用

use std::collections::HashMap;

use crate::infrastructure::source::{CollectionSource, Record};
use crate::models::Properties;

/// 内存中的记录
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    pub path: String,
    /// None 表示底层文档已不存在
    pub text: Option<String>,
    pub metadata: Properties,
}

impl MemoryRecord {
    pub fn new(path: impl Into<String>, text: impl Into<String>, metadata: Properties) -> Self {
        Self {
            path: path.into(),
            text: Some(text.into()),
            metadata,
        }
    }

    /// 构造一个底层文档缺失的记录
    pub fn missing(path: impl Into<String>, metadata: Properties) -> Self {
        Self {
            path: path.into(),
            text: None,
            metadata,
        }
    }
}

impl Record for MemoryRecord {
    fn path(&self) -> &str {
        &self.path
    }

    fn read_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn metadata(&self) -> Properties {
        self.metadata.clone()
    }
}

/// 内存数据源
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    collections: HashMap<String, Vec<MemoryRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection_id: impl Into<String>, records: Vec<MemoryRecord>) -> Self {
        self.collections.insert(collection_id.into(), records);
        self
    }
}

impl CollectionSource for MemorySource {
    type Record = MemoryRecord;

    fn records(&self, collection_id: &str) -> Option<Vec<MemoryRecord>> {
        self.collections.get(collection_id).cloned()
    }

    fn collections(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.collections.keys().cloned().collect();
        ids.sort();
        ids
    }
}
