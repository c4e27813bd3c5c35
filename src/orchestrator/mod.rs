//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载设置、解析命令目标集合
//! - 持有数据源、设置存储和调度器
//!
//! ### `dispatcher` - 批量调度器
//! - 逐个提交 `Vec<BenchmarkEntry>`
//! - 汇总成功 / 失败数量
//!
//! ## 层次关系
//!
//! ```text
//! app (处理命令 / 集合)
//!     ↓
//! dispatcher (处理 Vec<BenchmarkEntry>)
//!     ↓
//! workflow::EntryFlow (处理单个条目)
//!     ↓
//! services / clients (能力层：解析 / 命名 / 提交)
//!     ↓
//! infrastructure (基础设施：vault 数据源)
//! ```

pub mod app;
pub mod dispatcher;

pub use app::App;
pub use dispatcher::Dispatcher;
