//! 条目处理上下文
//!
//! 封装"我正在提交第几个条目、它叫什么"这一信息

use std::fmt::Display;

/// 条目处理上下文
#[derive(Debug, Clone)]
pub struct EntryCtx {
    /// 条目在本次运行中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 本次运行的条目总数
    pub total: usize,

    /// 解析出的运行名称
    pub running_name: String,
}

impl EntryCtx {
    pub fn new(index: usize, total: usize, running_name: String) -> Self {
        Self {
            index,
            total,
            running_name,
        }
    }
}

impl Display for EntryCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[条目 {}/{} {}]", self.index, self.total, self.running_name)
    }
}
