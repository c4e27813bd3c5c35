//! 基础设施层（Infrastructure）
//!
//! 持有外部资源（vault 文件、内存快照），只暴露读取能力，不理解基准测试条目

pub mod frontmatter;
pub mod memory;
pub mod source;
pub mod vault;

pub use memory::{MemoryRecord, MemorySource};
pub use source::{collection_for_document, CollectionSource, Record};
pub use vault::{VaultRecord, VaultSource};
