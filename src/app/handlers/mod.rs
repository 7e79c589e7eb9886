//! Event handlers for the application

mod chart;
mod data_source_modal;
mod data_sources;
mod history_handler;
mod query_input;
mod results;

use crate::app::export::export_format_for;
use crate::app::{ActivePanel, App, SPINNER_FRAMES};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

impl App {
    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            // Apply replies from background requests
            self.check_completions();
            self.workbench.notifications_mut().expire(Instant::now());

            // Advance spinner animation when loading
            if self.is_loading() {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            }

            terminal.draw(|f| crate::ui::draw(f, self))?;

            // Shorter poll while the spinner is visible
            let poll_duration = if self.is_loading() {
                Duration::from_millis(25)
            } else {
                Duration::from_millis(100)
            };

            if event::poll(poll_duration)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            if self.should_quit {
                break;
            }

            // Let spawned requests make progress on this thread too
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Handle keyboard input
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Quit shortcuts - always work
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) |
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        if self.show_data_source_modal {
            return self.handle_data_source_modal(key);
        }

        if let Some(format) = export_format_for(key.code) {
            self.start_export(format);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_data_source_modal();
                return Ok(());
            }
            KeyCode::Tab => {
                self.active_panel = self.active_panel.next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.active_panel = self.active_panel.previous();
                return Ok(());
            }
            KeyCode::Esc if self.active_panel != ActivePanel::QueryInput => {
                self.active_panel = ActivePanel::QueryInput;
                return Ok(());
            }
            _ => {}
        }

        // Handle based on active panel
        match self.active_panel {
            ActivePanel::QueryInput => self.handle_query_input(key)?,
            ActivePanel::DataSources => self.handle_data_sources(key)?,
            ActivePanel::Results => self.handle_results(key)?,
            ActivePanel::Chart => self.handle_chart(key)?,
            ActivePanel::History => self.handle_history(key)?,
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::api::mock::MockBackend;
    use crate::api::WorkbenchBackend;
    use crate::app::{ActivePanel, App};
    use crate::controller::Workbench;
    use crate::download::Downloads;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;
    use tempfile::TempDir;

    pub(crate) fn test_app() -> (App, Arc<MockBackend>, TempDir) {
        let mock = Arc::new(MockBackend::new());
        let dir = tempfile::tempdir().unwrap();
        let backend: Arc<dyn WorkbenchBackend> = mock.clone();
        let app = App::new(Workbench::new(backend, Downloads::new(dir.path())));
        (app, mock, dir)
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    pub(crate) fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    #[test]
    fn test_ctrl_q_quits() {
        let (mut app, _mock, _dir) = test_app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_panels() {
        let (mut app, _mock, _dir) = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel, ActivePanel::DataSources);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_panel, ActivePanel::History);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_panel, ActivePanel::QueryInput);
    }

    #[test]
    fn test_export_without_session_is_rejected() {
        let (mut app, mock, _dir) = test_app();
        press(&mut app, KeyCode::F(5));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(
            app.workbench.notifications().last_error(),
            Some("No query results to export")
        );
    }

    #[test]
    fn test_ctrl_n_opens_modal_and_captures_keys() {
        let (mut app, _mock, _dir) = test_app();
        ctrl(&mut app, 'n');
        assert!(app.show_data_source_modal);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.data_source_form_focus, 1);
        assert_eq!(app.active_panel, ActivePanel::QueryInput);
    }
}
