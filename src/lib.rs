//! # Bench Dispatch
//!
//! 从笔记 vault 中发现基准测试条目，并逐个提交到外部执行服务
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部资源，只暴露读取能力
//! - `CollectionSource` / `Record` - 集合数据源抽象（vault 文件夹或内存快照）
//! - `frontmatter` - frontmatter 切分与 YAML 解析
//!
//! ### ② 业务能力层（Services / Clients）
//! - `property_accessor` - 读取属性，还原 `[[链接]]`
//! - `body_parser` - 从正文提取 ```ycsb 负载
//! - `name_resolver` - 展开运行名称模板
//! - `entry_collector` - 收集可运行条目
//! - `BenchClient` - 向执行服务提交
//!
//! ### ③ 流程层（Workflow）
//! - `EntryFlow` - 单个条目的提交流程（构建请求 → 提交 → 分类 → 失败记录）
//!
//! ### ④ 编排层（Orchestration）
//! - `Dispatcher` - 顺序提交条目列表并汇总
//! - `App` - 命令入口（运行全部 / 当前 / 指定集合，设置编辑）
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod host;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{BenchClient, Submitter};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{CollectionSource, MemorySource, Record, VaultSource};
pub use models::{BenchmarkEntry, PropertyValue, RunReport, RunSummary, Settings};
pub use orchestrator::{App, Dispatcher};
pub use services::{collect, extract_payload, get_all_properties, get_property, resolve_name};
