//! 单行文本输入控件
//!
//! 光标以字符为单位，所有修改操作返回内容是否发生变化

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    text: String,
    cursor: usize, // 字符索引
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// 光标之前文本的显示宽度
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// 插入字符串（粘贴），单行控件丢弃换行
    pub fn insert_str(&mut self, s: &str) -> bool {
        let clean: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if clean.is_empty() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &clean);
        self.cursor += clean.chars().count();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str) -> TextField {
        let mut field = TextField::new();
        field.insert_str(text);
        field
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = field_with("ac");
        field.move_left();
        assert!(field.insert_char('b'));
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = field_with("abc");
        field.move_home();
        assert!(!field.delete_backward());
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = field_with("abc");
        assert!(!field.delete_forward());
        field.move_home();
        assert!(field.delete_forward());
        assert_eq!(field.text(), "bc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = field_with("héllo");
        field.move_left();
        field.move_left();
        field.move_left();
        assert!(field.delete_backward());
        assert_eq!(field.text(), "hllo");
        assert!(field.insert_char('é'));
        assert_eq!(field.text(), "héllo");
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut field = field_with("你好a");
        assert_eq!(field.cursor_column(), 5);
        field.move_left();
        assert_eq!(field.cursor_column(), 4);
        field.move_home();
        assert_eq!(field.cursor_column(), 0);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut field = TextField::new();
        assert!(field.insert_str("one\ntwo\r\n"));
        assert_eq!(field.text(), "onetwo");
        assert_eq!(field.cursor(), 6);
        assert!(!field.insert_str("\n"));
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut field = field_with("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_home();
        field.move_right();
        assert_eq!(field.cursor(), 1);
        field.move_end();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_clear() {
        let mut field = field_with("abc");
        assert!(field.clear());
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
        assert!(!field.clear());
    }
}
