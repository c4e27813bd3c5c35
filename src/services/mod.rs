//! 业务能力层（Services）
//!
//! 每个模块只描述"我能做什么"，只处理单条记录或单个条目，不关心流程顺序

pub mod body_parser;
pub mod entry_collector;
pub mod failure_writer;
pub mod name_resolver;
pub mod property_accessor;
pub mod settings_store;

pub use body_parser::extract_payload;
pub use entry_collector::collect;
pub use failure_writer::FailureWriter;
pub use name_resolver::resolve_name;
pub use property_accessor::{get_all_properties, get_property};
pub use settings_store::{JsonSettingsStore, SettingsStore};
