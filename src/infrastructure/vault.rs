//! 文件系统 vault 数据源
//!
//! 集合 ID 是相对 vault 根目录的文件夹路径，集合中的记录是该文件夹下（递归）的所有 markdown 文件

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AppResult, CollectionError};
use crate::infrastructure::frontmatter::parse_frontmatter;
use crate::infrastructure::source::{normalize_path, CollectionSource, Record};
use crate::models::Properties;

/// vault 中的单个 markdown 文档
#[derive(Debug, Clone)]
pub struct VaultRecord {
    rel_path: String,
    abs_path: PathBuf,
}

impl Record for VaultRecord {
    fn path(&self) -> &str {
        &self.rel_path
    }

    fn read_text(&self) -> Option<String> {
        match fs::read_to_string(&self.abs_path) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("无法读取文档 {}: {}", self.abs_path.display(), e);
                None
            }
        }
    }

    fn metadata(&self) -> Properties {
        self.read_text()
            .map(|text| parse_frontmatter(&text))
            .unwrap_or_default()
    }
}

/// 文件系统 vault
#[derive(Debug, Clone)]
pub struct VaultSource {
    root: PathBuf,
}

impl VaultSource {
    /// 打开 vault，根目录必须存在
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CollectionError::VaultNotFound {
                path: root.display().to_string(),
            }
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        normalize_path(&rel.to_string_lossy())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("md")
}

impl CollectionSource for VaultSource {
    type Record = VaultRecord;

    fn records(&self, collection_id: &str) -> Option<Vec<VaultRecord>> {
        let dir = self.root.join(normalize_path(collection_id));
        if !dir.is_dir() {
            debug!("集合目录不存在: {}", dir.display());
            return None;
        }

        let mut records: Vec<VaultRecord> = WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
            .map(|e| VaultRecord {
                rel_path: self.relative(e.path()),
                abs_path: e.path().to_path_buf(),
            })
            .collect();
        records.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

        Some(records)
    }

    fn collections(&self) -> Vec<String> {
        let mut ids: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_dir())
            .filter(|e| {
                fs::read_dir(e.path())
                    .map(|mut it| {
                        it.any(|child| child.map(|c| is_markdown(&c.path())).unwrap_or(false))
                    })
                    .unwrap_or(false)
            })
            .map(|e| self.relative(e.path()))
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_vault() {
        assert!(VaultSource::open("/definitely/not/a/vault").is_err());
    }

    #[test]
    fn test_records_and_collections() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("bench/nested")).unwrap();
        fs::create_dir_all(root.join(".bench_dispatch")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("bench/b.md"), "---\nis_run: true\n---\nx").unwrap();
        fs::write(root.join("bench/a.md"), "a").unwrap();
        fs::write(root.join("bench/notes.txt"), "ignored").unwrap();
        fs::write(root.join("bench/nested/c.md"), "c").unwrap();
        fs::write(root.join(".bench_dispatch/hidden.md"), "h").unwrap();

        let vault = VaultSource::open(root).unwrap();
        let records = vault.records("bench").unwrap();
        let paths: Vec<&str> = records.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["bench/a.md", "bench/b.md", "bench/nested/c.md"]);

        let b = &records[1];
        assert_eq!(
            b.metadata().get("is_run"),
            Some(&crate::models::PropertyValue::Bool(true))
        );

        assert!(vault.records("missing").is_none());
        assert_eq!(vault.collections(), vec!["bench", "bench/nested"]);
    }
}
