//! 命令行入口
//!
//! 每个子命令对应宿主中的一个触发点：运行全部已启用集合、运行当前集合、
//! 集合视图里的运行按钮，以及设置页的各项编辑

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 基准测试条目调度工具
#[derive(Parser, Debug)]
#[command(name = "bench_dispatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// vault 根目录（覆盖 BENCH_VAULT_ROOT）
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// 设置文件路径（覆盖 BENCH_SETTINGS_FILE）
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// 详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 运行所有已启用集合中的条目
    RunAll,

    /// 运行当前文档所在的已启用集合
    RunCurrent {
        /// 当前文档（相对 vault 根目录）
        #[arg(short, long)]
        document: String,
    },

    /// 运行指定集合
    Run {
        /// 集合 ID（相对 vault 根目录的文件夹）
        #[arg(short, long)]
        collection: String,
    },

    /// 列出 vault 中的集合
    List,

    /// 启用集合
    Enable { collection: String },

    /// 停用集合
    Disable { collection: String },

    /// 修改设置项（apiUrl / runPropertyName / variablesPropertyName / runningNameTemplate）
    Set { key: String, value: String },

    /// 打印当前设置
    ShowSettings,
}
