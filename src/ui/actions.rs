//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 编辑
    Input(char),    // 输入字符
    Paste(String),  // 粘贴文本
    DeleteBackward, // Backspace
    DeleteForward,  // Delete
    Clear,          // Ctrl+U

    // 光标
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
}
