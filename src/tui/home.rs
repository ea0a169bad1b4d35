//! Home view - task list, navigation and the add/modify popup

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::HelpBar;
use super::dialogs::{DialogResult, InputPurpose, TaskInputDialog};
use super::styles::Theme;
use crate::store::{Task, TaskStore};

const HELP_HEIGHT: u16 = 3;

pub enum Mode {
    Normal,
    Input(TaskInputDialog),
}

pub struct HomeView<'a> {
    store: &'a TaskStore,
    /// Cache of the tasks table. Reloaded after create/delete, patched in
    /// place after toggle/edit.
    tasks: Vec<Task>,

    // UI state
    cursor: usize,
    list_state: ListState,
    mode: Mode,
}

impl<'a> HomeView<'a> {
    pub fn new(store: &'a TaskStore) -> Self {
        Self {
            store,
            tasks: store.all(),
            cursor: 0,
            list_state: ListState::default(),
            mode: Mode::Normal,
        }
    }

    pub fn reload(&mut self) {
        self.tasks = self.store.all();

        // Ensure cursor is valid
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    pub fn has_dialog(&self) -> bool {
        matches!(self.mode, Mode::Input(_))
    }

    /// Rendered list rows, in display order.
    pub fn rows(&self) -> Vec<String> {
        self.tasks.iter().map(Task::row).collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if let Mode::Input(dialog) = &mut self.mode {
            let purpose = dialog.purpose();
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.mode = Mode::Normal;
                }
                DialogResult::Submit(description) => {
                    self.mode = Mode::Normal;
                    self.submit(purpose, description);
                }
            }
            return None;
        }

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => {
                self.mode = Mode::Input(TaskInputDialog::add());
            }
            KeyCode::Char('m') | KeyCode::Char('e') => {
                if let Some(task) = self.selected() {
                    self.mode = Mode::Input(TaskInputDialog::edit(task.id, task.text()));
                }
            }
            KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.tasks.is_empty() {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(self.tasks.len() - 1)
        };
    }

    // Store failures are already logged by the store; the next reload shows
    // what actually persisted.

    fn toggle_selected(&mut self) {
        let Some(task) = self.tasks.get_mut(self.cursor) else {
            return;
        };
        let completed = !task.completed;
        if self.store.update(task.id, completed).is_ok() {
            task.completed = completed;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected().map(|t| t.id) else {
            return;
        };
        tracing::debug!(id, cursor = self.cursor, "Deleting task");
        let _ = self.store.delete(id);
        self.reload();
    }

    fn submit(&mut self, purpose: InputPurpose, description: String) {
        match purpose {
            InputPurpose::Add => {
                let _ = self.store.create(&description, false);
                self.reload();
            }
            InputPurpose::Edit { id } => {
                if self.store.update_description(id, &description).is_err() {
                    return;
                }
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.description = description;
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HELP_HEIGHT), Constraint::Min(0)])
            .split(area);

        HelpBar::render(frame, chunks[0], theme);
        self.render_list(frame, chunks[1], theme);

        // Render popup on top
        if let Mode::Input(dialog) = &self.mode {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" TODO List [{}/{}] ", done, self.tasks.len()))
            .title_style(Style::default().fg(theme.title).bold());

        if self.tasks.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'a' to add one").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| {
                let color = if task.completed {
                    theme.done
                } else {
                    theme.pending
                };
                ListItem::new(task.row()).style(Style::default().fg(color))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.selection)
                .bold(),
        );

        self.list_state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
