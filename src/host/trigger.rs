//! 集合视图上的运行按钮
//!
//! 宿主每打开一个集合视图都会产生一个视图实例。视图所属集合已启用时挂上运行按钮，
//! 否则不挂；设置变化时对所有打开的视图重新判断。状态变化通过回调通知订阅者。

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 宿主视图实例 ID
pub type ViewId = u64;

/// 宿主产生的视图事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ViewOpened { view_id: ViewId, collection_id: String },
    ViewClosed { view_id: ViewId },
    /// 已启用集合列表发生变化
    SettingsChanged { enabled: Vec<String> },
}

/// 单个视图的按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    NoTrigger,
    TriggerPresent,
}

/// 按钮状态变化通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerChange {
    Attached { view_id: ViewId, collection_id: String },
    Detached { view_id: ViewId, collection_id: String },
}

struct ViewSlot {
    collection_id: String,
    state: TriggerState,
}

type Observer = Box<dyn FnMut(&TriggerChange)>;

/// 运行按钮注册表
pub struct TriggerRegistry {
    enabled: HashSet<String>,
    views: HashMap<ViewId, ViewSlot>,
    observers: Vec<Observer>,
}

impl TriggerRegistry {
    pub fn new(enabled: &[String]) -> Self {
        Self {
            enabled: enabled.iter().cloned().collect(),
            views: HashMap::new(),
            observers: Vec::new(),
        }
    }

    /// 订阅按钮状态变化
    pub fn subscribe(&mut self, observer: impl FnMut(&TriggerChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self, view_id: ViewId) -> TriggerState {
        self.views
            .get(&view_id)
            .map(|slot| slot.state)
            .unwrap_or(TriggerState::NoTrigger)
    }

    /// 处理一个宿主事件
    pub fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ViewOpened {
                view_id,
                collection_id,
            } => {
                let same = self
                    .views
                    .get(&view_id)
                    .map(|slot| slot.collection_id == collection_id)
                    .unwrap_or(false);
                if same {
                    self.reconcile(view_id);
                    return;
                }
                // 同一视图切换到别的集合时先按旧集合摘掉
                self.detach(view_id);
                self.views.insert(
                    view_id,
                    ViewSlot {
                        collection_id,
                        state: TriggerState::NoTrigger,
                    },
                );
                self.reconcile(view_id);
            }
            ViewEvent::ViewClosed { view_id } => {
                self.detach(view_id);
                self.views.remove(&view_id);
            }
            ViewEvent::SettingsChanged { enabled } => {
                self.enabled = enabled.into_iter().collect();
                let mut ids: Vec<ViewId> = self.views.keys().copied().collect();
                ids.sort_unstable();
                for view_id in ids {
                    self.reconcile(view_id);
                }
            }
        }
    }

    fn reconcile(&mut self, view_id: ViewId) {
        let Some(slot) = self.views.get_mut(&view_id) else {
            return;
        };
        let wanted = if self.enabled.contains(&slot.collection_id) {
            TriggerState::TriggerPresent
        } else {
            TriggerState::NoTrigger
        };
        if wanted == slot.state {
            return;
        }
        slot.state = wanted;

        let change = match wanted {
            TriggerState::TriggerPresent => TriggerChange::Attached {
                view_id,
                collection_id: slot.collection_id.clone(),
            },
            TriggerState::NoTrigger => TriggerChange::Detached {
                view_id,
                collection_id: slot.collection_id.clone(),
            },
        };
        self.notify(&change);
    }

    fn detach(&mut self, view_id: ViewId) {
        let Some(slot) = self.views.get_mut(&view_id) else {
            return;
        };
        if slot.state == TriggerState::NoTrigger {
            return;
        }
        slot.state = TriggerState::NoTrigger;
        let change = TriggerChange::Detached {
            view_id,
            collection_id: slot.collection_id.clone(),
        };
        self.notify(&change);
    }

    fn notify(&mut self, change: &TriggerChange) {
        debug!("运行按钮变化: {:?}", change);
        for observer in &mut self.observers {
            observer(change);
        }
    }
}
