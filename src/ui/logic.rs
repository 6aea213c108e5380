//! 业务逻辑处理 (Update/Dispatch)
//!
//! 编辑输入框，内容变化时同步到文本状态

use tracing::debug;

use super::actions::Action;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::Quit => {
                debug!("quit requested");
                return true;
            }

            Action::Input(c) => self.field.insert_char(c),
            Action::Paste(text) => self.field.insert_str(&text),
            Action::DeleteBackward => self.field.delete_backward(),
            Action::DeleteForward => self.field.delete_forward(),
            Action::Clear => self.field.clear(),

            Action::MoveLeft => {
                self.field.move_left();
                false
            }
            Action::MoveRight => {
                self.field.move_right();
                false
            }
            Action::MoveHome => {
                self.field.move_home();
                false
            }
            Action::MoveEnd => {
                self.field.move_end();
                false
            }
        };

        if changed {
            self.sync_binding();
        }
        false
    }
}
