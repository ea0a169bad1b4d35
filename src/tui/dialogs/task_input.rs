//! Add / modify task popup

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::{Input, InputRequest};

use super::DialogResult;
use crate::store::stamp_description;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    Add,
    Edit { id: i64 },
}

pub struct TaskInputDialog {
    purpose: InputPurpose,
    input: Input,
}

impl TaskInputDialog {
    pub fn add() -> Self {
        Self {
            purpose: InputPurpose::Add,
            input: Input::default(),
        }
    }

    /// Seeds the buffer with `text`, cursor at the end.
    pub fn edit(id: i64, text: &str) -> Self {
        Self {
            purpose: InputPurpose::Edit { id },
            input: Input::new(text.to_string()),
        }
    }

    pub fn purpose(&self) -> InputPurpose {
        self.purpose
    }

    pub fn title(&self) -> &'static str {
        match self.purpose {
            InputPurpose::Add => "Add New Task",
            InputPurpose::Edit { .. } => "Modify Task",
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Enter submits the buffer with a creation stamp prepended.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let now = Local::now().naive_local();
                DialogResult::Submit(stamp_description(self.input.value(), now))
            }
            KeyCode::Backspace => {
                self.input.handle(InputRequest::DeletePrevChar);
                DialogResult::Continue
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                DialogResult::Continue
            }
            KeyCode::Char(c) => {
                self.input.handle(InputRequest::InsertChar(c));
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let x = area.x + (area.width.saturating_sub(DIALOG_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(DIALOG_HEIGHT)) / 2;

        let dialog_area = Rect {
            x,
            y,
            width: DIALOG_WIDTH.min(area.width),
            height: DIALOG_HEIGHT.min(area.height),
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.title()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        render_text_field(frame, chunks[0], &self.input, theme);

        let action = match self.purpose {
            InputPurpose::Add => " add  ",
            InputPurpose::Edit { .. } => " save  ",
        };
        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.key)),
            Span::styled(action, Style::default().fg(theme.hint)),
            Span::styled("Esc", Style::default().fg(theme.key)),
            Span::styled(" cancel", Style::default().fg(theme.hint)),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }
}
