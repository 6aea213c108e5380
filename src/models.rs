use serde::Deserialize;
use tracing::debug;

use crate::reactive::{Observable, SubscriptionId};

/// 标签的派生显示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Greeting, // "Hello: " + value
    Echo,     // 原样回显
}

impl Variant {
    pub const GREETING_PREFIX: &'static str = "Hello: ";

    /// 由当前文本计算标签内容（纯函数）
    pub fn render(self, value: &str) -> String {
        match self {
            Variant::Greeting => format!("{}{}", Self::GREETING_PREFIX, value),
            Variant::Echo => value.to_string(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Greeting => "greeting",
            Variant::Echo => "echo",
        }
    }
}

/// 与输入框绑定的文本状态
#[derive(Debug, Default)]
pub struct TextState {
    value: Observable<String>,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.value.get()
    }

    /// 输入框每次变化时调用，立即替换旧值
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.value.set(value) {
            debug!(len = self.value.get().chars().count(), "text state changed");
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.value.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
    }
}
