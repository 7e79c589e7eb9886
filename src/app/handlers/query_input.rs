//! Query input keyboard handlers

use crate::app::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Query input - type a question and press Enter to run it
    pub(crate) fn handle_query_input(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.start_query(),
            // Ctrl+U = clear the input
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.clear();
                self.cursor_pos = 0;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.cursor_byte_index();
                self.query.insert(at, c);
                self.cursor_pos += 1;
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    self.cursor_pos -= 1;
                    let at = self.cursor_byte_index();
                    self.query.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor_pos < self.query.chars().count() {
                    let at = self.cursor_byte_index();
                    self.query.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.query.chars().count());
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
            }
            KeyCode::End => {
                self.cursor_pos = self.query.chars().count();
            }
            _ => {}
        }
        Ok(())
    }

    /// Byte offset of the char cursor
    fn cursor_byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }
}
