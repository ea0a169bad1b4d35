//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tracing::debug;

use super::home::HomeView;
use super::styles::Theme;
use crate::store::TaskStore;

pub struct App<'a> {
    home: HomeView<'a>,
    should_quit: bool,
    theme: Theme,
}

impl<'a> App<'a> {
    pub fn new(store: &'a TaskStore) -> Self {
        Self {
            home: HomeView::new(store),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Blocks on terminal events until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Initial render
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key);
                    if self.should_quit {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    // draw() re-measures the viewport; clear drops stale cells
                    terminal.clear()?;
                }
                _ => continue,
            }

            terminal.draw(|f| self.render(f))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            if !self.home.has_dialog() {
                self.should_quit = true;
                return;
            }
        }

        // Delegate to home view
        if let Some(Action::Quit) = self.home.handle_key(key) {
            self.should_quit = true;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
