//! Always-visible key help bar

use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthStr;

use crate::tui::styles::Theme;

const SEPARATOR: &str = " | ";

pub fn shortcuts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "Quit"),
        ("↑↓/jk", "Move"),
        ("Space", "Toggle"),
        ("a", "Add"),
        ("m/e", "Edit"),
        ("d", "Delete"),
    ]
}

fn help_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, desc)) in shortcuts().into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(theme.dimmed)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(theme.key).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.hint),
        ));
    }
    Line::from(spans)
}

/// Display width of the help text, borders excluded.
pub fn help_width() -> usize {
    let items = shortcuts();
    let keys: usize = items
        .iter()
        .map(|(key, desc)| key.width() + desc.width() + 3)
        .sum();
    keys + SEPARATOR.width() * items.len().saturating_sub(1)
}

pub struct HelpBar;

impl HelpBar {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        let paragraph = Paragraph::new(help_line(theme))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
