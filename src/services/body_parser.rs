//! 正文解析 - 业务能力层
//!
//! 从文档正文中提取要提交的负载文本

use crate::infrastructure::frontmatter::split_frontmatter;

/// 标记可运行负载的代码块语言标签
pub const PAYLOAD_FENCE_TAG: &str = "ycsb";

const FENCE: &str = "```";

/// 提取负载
///
/// 1. 去掉开头的 frontmatter
/// 2. 取第一个 ```ycsb 代码块的内容；没有时取整个正文
/// 3. 去掉首尾空白，把制表符替换成两个空格
pub fn extract_payload(document_text: &str) -> String {
    let (_, body) = split_frontmatter(document_text);

    let raw = find_tagged_block(body).unwrap_or(body);

    raw.trim().replace('\t', "  ")
}

/// 查找第一个带保留标签的代码块，未闭合的代码块不算
fn find_tagged_block(body: &str) -> Option<&str> {
    let mut offset = 0;
    let mut start: Option<usize> = None;

    for line in body.split_inclusive('\n') {
        let trimmed = line.trim();
        match start {
            None => {
                if trimmed
                    .strip_prefix(FENCE)
                    .map(|tag| tag.trim() == PAYLOAD_FENCE_TAG)
                    .unwrap_or(false)
                {
                    start = Some(offset + line.len());
                }
            }
            Some(begin) => {
                if trimmed.starts_with(FENCE) {
                    return Some(&body[begin..offset]);
                }
            }
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_block_with_tabs() {
        let doc = "---\nis_run: true\n---\nSome prose\n\n```ycsb\na:\n\tb: 1\n```\nmore prose\n";
        assert_eq!(extract_payload(doc), "a:\n  b: 1");
    }

    #[test]
    fn test_frontmatter_only() {
        assert_eq!(extract_payload("---\nis_run: true\n---\n"), "");
        assert_eq!(extract_payload("---\nis_run: true\n---"), "");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_payload(""), "");
    }

    #[test]
    fn test_whole_body_fallback() {
        let doc = "---\nOperation: Insert\n---\n\nrecordcount: 1000\nworkload:\n\tthreads: 4\n\n";
        assert_eq!(extract_payload(doc), "recordcount: 1000\nworkload:\n  threads: 4");
    }

    #[test]
    fn test_ignores_other_languages() {
        let doc = "```yaml\nnot: this\n```\n\n```ycsb\nthis: one\n```\n";
        assert_eq!(extract_payload(doc), "this: one");
    }

    #[test]
    fn test_first_block_wins() {
        let doc = "```ycsb\nfirst: 1\n```\n```ycsb\nsecond: 2\n```\n";
        assert_eq!(extract_payload(doc), "first: 1");
    }

    #[test]
    fn test_unterminated_block_falls_back_to_body() {
        let doc = "```ycsb\nkey: value";
        assert_eq!(extract_payload(doc), "```ycsb\nkey: value");
    }

    #[test]
    fn test_crlf_document() {
        let doc = "---\r\nis_run: true\r\n---\r\n```ycsb\r\nkey: value\r\n```\r\n";
        assert_eq!(extract_payload(doc), "key: value");
    }
}
