//! 通用 UI 组件
//!
//! 输入框、标签等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use unicode_width::UnicodeWidthChar;

use crate::ui::field::TextField;

/// 使光标保持可见所需的水平滚动量
pub fn scroll_offset(cursor_column: usize, visible_width: usize) -> usize {
    cursor_column.saturating_sub(visible_width.saturating_sub(1))
}

/// 不小于 `column` 的第一个字形边界列，避免从宽字符中间开始滚动
pub fn glyph_boundary(text: &str, column: usize) -> usize {
    let mut at = 0;
    for c in text.chars() {
        if at >= column {
            break;
        }
        at += c.width().unwrap_or(0);
    }
    at.max(column)
}

/// [组件] 带占位符的单行输入框，并放置终端光标
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    placeholder: &str,
    active_color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(active_color));
    let inner = block.inner(area);

    let column = field.cursor_column();
    let offset = glyph_boundary(field.text(), scroll_offset(column, inner.width as usize));

    let input = if field.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(field.text())
            .style(Style::default().fg(Color::White))
            .scroll((0, offset as u16))
    };
    frame.render_widget(input.block(block), area);

    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(
            inner.x + (column - offset) as u16,
            inner.y,
        ));
    }
}

/// [组件] 次要样式的文本标签
pub fn render_label(frame: &mut Frame, area: Rect, text: &str) {
    let label = Paragraph::new(text).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(label, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 10, 0 ; "empty")]
    #[test_case(9, 10, 0 ; "last_visible_column")]
    #[test_case(10, 10, 1 ; "one_past")]
    #[test_case(25, 10, 16 ; "far_right")]
    #[test_case(3, 0, 3 ; "zero_width")]
    fn test_scroll_offset(column: usize, width: usize, expected: usize) {
        assert_eq!(scroll_offset(column, width), expected);
    }

    #[test_case("abcdef", 3, 3 ; "ascii_exact")]
    #[test_case("你好世界", 0, 0 ; "start")]
    #[test_case("你好世界", 2, 2 ; "wide_on_boundary")]
    #[test_case("你好世界", 3, 4 ; "wide_mid_glyph_snaps_right")]
    #[test_case("a你b", 2, 3 ; "mixed_mid_glyph")]
    #[test_case("ab", 5, 5 ; "past_end")]
    fn test_glyph_boundary(text: &str, column: usize, expected: usize) {
        assert_eq!(glyph_boundary(text, column), expected);
    }
}
