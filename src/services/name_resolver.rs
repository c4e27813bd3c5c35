//! 运行名称解析 - 业务能力层
//!
//! 用条目的属性和文件名展开模板，例如 `{Operation}_{filename}` → `Insert_run1`

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::models::BenchmarkEntry;

const FILENAME_PLACEHOLDER: &str = "filename";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}]+?)\}").expect("占位符正则无效"))
}

/// 展开运行名称模板
///
/// - `{filename}`（不区分大小写）优先替换为去掉扩展名的文件名，同名属性不会覆盖它
/// - 其他 `{属性名}` 替换为属性的文本值，属性不存在或为空时替换为空串
/// - 替换结果不会再次展开，不成对的花括号原样保留
pub fn resolve_name(template: &str, entry: &BenchmarkEntry) -> String {
    let filename = derive_filename(entry.file_path());

    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            if name.eq_ignore_ascii_case(FILENAME_PLACEHOLDER) {
                return filename.to_string();
            }
            entry
                .properties
                .get(name)
                .and_then(|v| v.as_template_text())
                .unwrap_or_default()
        })
        .into_owned()
}

/// 取路径最后一段并去掉扩展名
pub fn derive_filename(file_path: &str) -> &str {
    let last = file_path
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_path);
    match last.rfind('.') {
        Some(idx) => &last[..idx],
        None => last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Properties, PropertyValue};
    use serde_json::json;

    fn entry(path: &str, props: &[(&str, PropertyValue)]) -> BenchmarkEntry {
        let properties: Properties = props
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        BenchmarkEntry::new(path, "", None, properties)
    }

    #[test]
    fn test_filename_only() {
        assert_eq!(resolve_name("{filename}", &entry("a/b/note.md", &[])), "note");
    }

    #[test]
    fn test_default_template() {
        let e = entry("x/run1.md", &[("Operation", "Insert".into())]);
        assert_eq!(resolve_name("{Operation}_{filename}", &e), "Insert_run1");
    }

    #[test]
    fn test_missing_property_is_empty() {
        assert_eq!(resolve_name("{missing}_{filename}", &entry("f.md", &[])), "_f");
    }

    #[test]
    fn test_filename_case_insensitive_and_not_overridden() {
        let e = entry("dir/Run.Final.md", &[("filename", "override".into())]);
        assert_eq!(resolve_name("{FileName}-{FILENAME}", &e), "Run.Final-Run.Final");
    }

    #[test]
    fn test_non_string_and_null_properties() {
        let e = entry(
            "w.md",
            &[
                ("threads", PropertyValue::from(json!(16))),
                ("warm", PropertyValue::Bool(false)),
                ("none", PropertyValue::Null),
            ],
        );
        assert_eq!(resolve_name("{threads}t_{warm}_{none}", &e), "16t_false_");
    }

    #[test]
    fn test_malformed_braces_stay_literal() {
        let e = entry("f.md", &[("a", "x".into())]);
        assert_eq!(resolve_name("{a", &e), "{a");
        assert_eq!(resolve_name("a}", &e), "a}");
        assert_eq!(resolve_name("{}", &e), "{}");
        assert_eq!(resolve_name("{{a}}", &e), "{x}");
    }

    #[test]
    fn test_no_recursive_expansion() {
        let e = entry("f.md", &[("a", "{b}".into()), ("b", "nope".into())]);
        assert_eq!(resolve_name("{a}", &e), "{b}");
    }

    #[test]
    fn test_derive_filename() {
        assert_eq!(derive_filename("a/b/note.md"), "note");
        assert_eq!(derive_filename("a\\b\\note.md"), "note");
        assert_eq!(derive_filename("noext"), "noext");
        assert_eq!(derive_filename("dir.v2/noext"), "noext");
        assert_eq!(derive_filename("archive.tar.gz"), "archive.tar");
    }
}
