//! Shared text input rendering component

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders an always-focused input buffer with an inverse-video cursor.
/// Long values wrap onto following lines of `area`.
pub fn render_text_field(frame: &mut Frame, area: Rect, input: &Input, theme: &Theme) {
    let value_style = Style::default().fg(theme.text);
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let value = input.value();
    let cursor_pos = input.visual_cursor();

    // Split value into: before cursor, char at cursor, after cursor
    let before: String = value.chars().take(cursor_pos).collect();
    let cursor_char: String = value
        .chars()
        .nth(cursor_pos)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(cursor_char, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
