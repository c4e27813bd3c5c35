//! 集合数据源抽象
//!
//! 宿主负责维护集合的实时视图，核心只通过这里的 trait 读取快照

use crate::models::Properties;

/// 集合中的单条记录
pub trait Record {
    /// 记录在 vault 中的路径（唯一标识）
    fn path(&self) -> &str;

    /// 读取完整文本，底层文档不存在或不可读时返回 None
    fn read_text(&self) -> Option<String>;

    /// 结构化元数据快照
    fn metadata(&self) -> Properties;
}

/// 集合数据源
pub trait CollectionSource {
    type Record: Record;

    /// 物化集合中的记录，集合没有可用视图时返回 None
    fn records(&self, collection_id: &str) -> Option<Vec<Self::Record>>;

    /// 列出所有可选的集合（用于补全提示）
    fn collections(&self) -> Vec<String>;
}

/// 找出包含当前文档的已启用集合
///
/// 多个集合都匹配时取路径最长的那个
pub fn collection_for_document<'a>(document: &str, enabled: &'a [String]) -> Option<&'a str> {
    let document = normalize_path(document);
    enabled
        .iter()
        .map(|c| c.as_str())
        .filter(|c| {
            let prefix = normalize_path(c);
            !prefix.is_empty()
                && (document == prefix || document.starts_with(&format!("{}/", prefix)))
        })
        .max_by_key(|c| normalize_path(c).len())
}

/// 统一分隔符并去掉首尾的 `/` 和开头的 `./`
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let trimmed = unified.strip_prefix("./").unwrap_or(&unified);
    trimmed.trim_matches('/').to_string()
}
