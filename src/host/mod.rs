//! 宿主集成胶水：集合视图上运行按钮的挂载状态

pub mod trigger;

pub use trigger::{TriggerChange, TriggerRegistry, TriggerState, ViewEvent, ViewId};
