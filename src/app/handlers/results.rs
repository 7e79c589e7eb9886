//! Results panel keyboard handlers

use crate::app::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// Results panel navigation
    pub(crate) fn handle_results(&mut self, key: KeyEvent) -> Result<()> {
        let max = self.result_row_count().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.results_scroll = self.results_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.results_scroll = (self.results_scroll + 1).min(max);
            }
            KeyCode::PageUp => {
                self.results_scroll = self.results_scroll.saturating_sub(20);
            }
            KeyCode::PageDown => {
                self.results_scroll = (self.results_scroll + 20).min(max);
            }
            KeyCode::Home => {
                self.results_scroll = 0;
            }
            KeyCode::End => {
                self.results_scroll = max;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::handlers::tests::{press, test_app};
    use crate::app::ActivePanel;
    use crossterm::event::KeyCode;

    #[test]
    fn test_scroll_stays_at_zero_without_results() {
        let (mut app, _mock, _dir) = test_app();
        app.active_panel = ActivePanel::Results;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_scroll, 0);
    }
}
