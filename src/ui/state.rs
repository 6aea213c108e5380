//! App 状态定义 (Model)
//!
//! 输入框、绑定的文本状态以及由其派生的标签

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{TextState, Variant};

use super::field::TextField;

/// 应用状态
pub struct App {
    pub variant: Variant,
    pub placeholder: String,
    pub text: TextState,
    pub field: TextField,
    label: Rc<RefCell<String>>, // 由订阅回调维护
}

impl App {
    /// 创建新的应用实例，并把标签订阅到文本状态上
    pub fn new(variant: Variant, placeholder: impl Into<String>) -> Self {
        let mut text = TextState::new();
        let label = Rc::new(RefCell::new(variant.render(text.value())));

        let sink = Rc::clone(&label);
        text.subscribe(move |value| {
            *sink.borrow_mut() = variant.render(value);
        });

        Self {
            variant,
            placeholder: placeholder.into(),
            text,
            field: TextField::new(),
            label,
        }
    }

    /// 当前标签内容
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// 将输入框内容写回文本状态
    pub fn sync_binding(&mut self) {
        self.text.set_value(self.field.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_state_can_be_moved_out_of_app() {
        let mut app = App::new(Variant::Greeting, "name...");
        app.field.insert_str("abc");
        app.sync_binding();
        assert_eq!(app.label(), "Hello: abc");

        let App { mut text, label, .. } = app;
        text.set_value("xyz");
        assert_eq!(text.value(), "xyz");
        assert_eq!(*label.borrow(), "Hello: xyz");
    }
}
