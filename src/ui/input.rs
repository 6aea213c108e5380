//! 键盘事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    // Windows 上 AltGr 组合键报告为 Ctrl+Alt
    if key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::MoveHome),
            KeyCode::Char('e') => Some(Action::MoveEnd),
            KeyCode::Char('u') => Some(Action::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::DeleteBackward),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Home => Some(Action::MoveHome),
        KeyCode::End => Some(Action::MoveEnd),
        _ => None,
    }
}

/// 处理终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(key),
        Event::Paste(text) => Some(Action::Paste(text)),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
