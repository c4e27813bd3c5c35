//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 把用户命令（运行全部已启用集合、运行当前集合、运行指定集合、修改设置）
//! 翻译成"加载设置 → 收集条目 → 顺序提交 → 输出统计"。
//!
//! ## 设计特点
//!
//! - **资源所有者**：持有数据源、设置存储和调度器
//! - **每次命令重新读取设置**：核心流程本身从不修改设置
//! - **向下委托**：收集交给 `services::entry_collector`，提交交给 `Dispatcher`

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::clients::{BenchClient, Submitter};
use crate::config::Config;
use crate::error::CollectionError;
use crate::infrastructure::{collection_for_document, CollectionSource, VaultSource};
use crate::models::{BenchmarkEntry, RunReport, Settings};
use crate::orchestrator::dispatcher::Dispatcher;
use crate::services::{entry_collector, FailureWriter, JsonSettingsStore, SettingsStore};
use crate::utils::logging::{log_collection_start, print_final_stats};

/// 应用主结构
pub struct App<Src, Sub, Store> {
    source: Src,
    dispatcher: Dispatcher<Sub>,
    store: Store,
}

impl App<VaultSource, BenchClient, JsonSettingsStore> {
    /// 按配置初始化应用（文件系统 vault + HTTP 客户端 + JSON 设置文件）
    pub fn initialize(config: &Config) -> Result<Self> {
        let source = VaultSource::open(&config.vault_root)
            .with_context(|| format!("无法打开 vault: {}", config.vault_root.display()))?;
        let store = JsonSettingsStore::new(config.settings_path());
        let dispatcher = Dispatcher::new(BenchClient::new())
            .with_failure_writer(FailureWriter::with_path(&config.failure_log_file));

        info!("📂 vault: {}", config.vault_root.display());
        info!("⚙️ 设置文件: {}", store.path().display());

        Ok(Self::new(source, dispatcher, store))
    }
}

impl<Src, Sub, Store> App<Src, Sub, Store>
where
    Src: CollectionSource,
    Sub: Submitter,
    Store: SettingsStore,
{
    pub fn new(source: Src, dispatcher: Dispatcher<Sub>, store: Store) -> Self {
        Self {
            source,
            dispatcher,
            store,
        }
    }

    /// 当前设置
    pub fn settings(&self) -> Result<Settings> {
        self.store.load().context("无法加载设置")
    }

    /// 运行所有已启用集合
    pub async fn run_all(&self) -> Result<RunReport> {
        let settings = self.settings()?;

        if settings.enabled_base_paths.is_empty() {
            warn!("⚠️ 没有已启用的集合");
        }

        let mut entries = Vec::new();
        for collection_id in &settings.enabled_base_paths {
            entries.extend(self.collect(&settings, collection_id));
        }

        Ok(self.dispatch(&settings, &entries).await)
    }

    /// 运行当前文档所在的已启用集合
    pub async fn run_current(&self, document: &str) -> Result<RunReport> {
        let settings = self.settings()?;

        let collection_id = collection_for_document(document, &settings.enabled_base_paths)
            .ok_or_else(|| CollectionError::NoEnabledCollection {
                document: document.to_string(),
            })?
            .to_string();

        info!("📄 当前文档 {} 属于集合 {}", document, collection_id);

        let entries = self.collect(&settings, &collection_id);
        Ok(self.dispatch(&settings, &entries).await)
    }

    /// 运行指定集合（集合视图内的运行按钮）
    pub async fn run_collection(&self, collection_id: &str) -> Result<RunReport> {
        let settings = self.settings()?;

        if !settings.is_enabled(collection_id) {
            warn!("⚠️ 集合 {} 未启用，仍按请求运行", collection_id);
        }

        let entries = self.collect(&settings, collection_id);
        Ok(self.dispatch(&settings, &entries).await)
    }

    /// 列出所有集合及其启用状态
    pub fn list_collections(&self) -> Result<Vec<(String, bool)>> {
        let settings = self.settings()?;
        Ok(self
            .source
            .collections()
            .into_iter()
            .map(|id| {
                let enabled = settings.is_enabled(&id);
                (id, enabled)
            })
            .collect())
    }

    /// 启用集合并保存
    pub fn enable_collection(&self, collection_id: &str) -> Result<bool> {
        self.update_settings(|s| Ok(s.enable_collection(collection_id)))
    }

    /// 停用集合并保存
    pub fn disable_collection(&self, collection_id: &str) -> Result<bool> {
        self.update_settings(|s| Ok(s.disable_collection(collection_id)))
    }

    /// 修改单个设置项并保存
    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.update_settings(|s| Ok(s.set(key, value)?))
    }

    fn update_settings<T>(&self, edit: impl FnOnce(&mut Settings) -> Result<T>) -> Result<T> {
        let mut settings = self.settings()?;
        let result = edit(&mut settings)?;
        self.store.save(&settings).context("无法保存设置")?;
        Ok(result)
    }

    fn collect(&self, settings: &Settings, collection_id: &str) -> Vec<BenchmarkEntry> {
        log_collection_start(collection_id);
        entry_collector::collect(
            &self.source,
            collection_id,
            &settings.run_property_name,
            &settings.variables_property_name,
        )
    }

    async fn dispatch(&self, settings: &Settings, entries: &[BenchmarkEntry]) -> RunReport {
        let report = self
            .dispatcher
            .run(&settings.api_url, entries, &settings.running_name_template)
            .await;
        print_final_stats(&report);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpReply, SubmissionRequest};
    use crate::error::AppResult;
    use crate::infrastructure::{MemoryRecord, MemorySource};
    use crate::models::{Properties, PropertyValue, RunSummary};
    use std::cell::RefCell;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSubmitter {
        calls: Mutex<Vec<(String, SubmissionRequest)>>,
    }

    impl Submitter for RecordingSubmitter {
        async fn submit(&self, url: &str, request: &SubmissionRequest) -> AppResult<HttpReply> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), request.clone()));
            Ok(HttpReply {
                status: 200,
                body: String::new(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        settings: RefCell<Settings>,
    }

    impl SettingsStore for MemoryStore {
        fn load(&self) -> AppResult<Settings> {
            Ok(self.settings.borrow().clone())
        }

        fn save(&self, settings: &Settings) -> AppResult<()> {
            *self.settings.borrow_mut() = settings.clone();
            Ok(())
        }
    }

    fn runnable(path: &str) -> MemoryRecord {
        let mut props = Properties::new();
        props.insert("is_run".to_string(), PropertyValue::Bool(true));
        props.insert("Operation".to_string(), PropertyValue::from("Read"));
        MemoryRecord::new(path, "```ycsb\nreadproportion: 1\n```", props)
    }

    fn app() -> App<MemorySource, RecordingSubmitter, MemoryStore> {
        let source = MemorySource::new()
            .with_collection("bench/a", vec![runnable("bench/a/one.md")])
            .with_collection("bench/b", vec![runnable("bench/b/two.md"), runnable("bench/b/three.md")])
            .with_collection("empty", Vec::new());
        App::new(
            source,
            Dispatcher::new(RecordingSubmitter::default()),
            MemoryStore::default(),
        )
    }

    fn sent_names(app: &App<MemorySource, RecordingSubmitter, MemoryStore>) -> Vec<String> {
        app.dispatcher
            .submitter()
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, r)| r.running_name.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_run_all_enabled() {
        let app = app();
        app.enable_collection("bench/a").unwrap();
        app.enable_collection("bench/b").unwrap();
        app.set_setting("apiUrl", "http://runner/api").unwrap();

        let report = app.run_all().await.unwrap();

        assert_eq!(
            report,
            RunReport::Completed(RunSummary {
                success_count: 3,
                fail_count: 0
            })
        );
        assert_eq!(sent_names(&app), vec!["Read_one", "Read_two", "Read_three"]);
        let calls = app.dispatcher.submitter().calls.lock().unwrap();
        assert!(calls.iter().all(|(url, _)| url == "http://runner/api"));
    }

    #[tokio::test]
    async fn test_run_all_with_nothing_enabled() {
        let app = app();
        assert_eq!(app.run_all().await.unwrap(), RunReport::NothingToRun);
        assert!(sent_names(&app).is_empty());
    }

    #[tokio::test]
    async fn test_run_current_requires_enabled_collection() {
        let app = app();
        assert!(app.run_current("bench/a/one.md").await.is_err());

        app.enable_collection("bench/a").unwrap();
        let report = app.run_current("bench/a/one.md").await.unwrap();
        assert_eq!(
            report,
            RunReport::Completed(RunSummary {
                success_count: 1,
                fail_count: 0
            })
        );
    }

    #[tokio::test]
    async fn test_run_collection_and_missing_view() {
        let app = app();
        assert_eq!(app.run_collection("empty").await.unwrap(), RunReport::NothingToRun);
        assert_eq!(app.run_collection("nowhere").await.unwrap(), RunReport::NothingToRun);

        let report = app.run_collection("bench/b").await.unwrap();
        assert_eq!(
            report,
            RunReport::Completed(RunSummary {
                success_count: 2,
                fail_count: 0
            })
        );
    }

    #[test]
    fn test_list_and_toggle_collections() {
        let app = app();
        assert!(app.enable_collection("bench/b").unwrap());
        assert!(!app.enable_collection("bench/b").unwrap());

        let listed = app.list_collections().unwrap();
        assert_eq!(
            listed,
            vec![
                ("bench/a".to_string(), false),
                ("bench/b".to_string(), true),
                ("empty".to_string(), false),
            ]
        );

        assert!(app.disable_collection("bench/b").unwrap());
        assert!(app.set_setting("unknownKey", "x").is_err());
    }
}
