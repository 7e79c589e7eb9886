//! Create-data-source modal event handler

use crate::app::App;
use crate::config::DataSourceForm;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Handle keyboard input for the data source modal
    pub(crate) fn handle_data_source_modal(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.close_data_source_modal(),

            // Enter - validate and send; the modal closes when the backend confirms
            KeyCode::Enter => self.start_create_data_source(),

            KeyCode::Up => self.focus_previous_field(),
            KeyCode::Down => self.focus_next_field(),
            KeyCode::BackTab => self.focus_previous_field(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus_previous_field(),
            KeyCode::Tab => self.focus_next_field(),

            // The type field is a selector
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.data_source_form_focus == DataSourceForm::TYPE_FIELD =>
            {
                self.data_source_form.cycle_database_type();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.data_source_form.get_field_mut(self.data_source_form_focus) {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.data_source_form.get_field_mut(self.data_source_form_focus) {
                    field.pop();
                }
            }

            _ => {}
        }

        Ok(())
    }

    fn focus_previous_field(&mut self) {
        self.data_source_form_focus = self.data_source_form_focus.saturating_sub(1);
    }

    fn focus_next_field(&mut self) {
        if self.data_source_form_focus < DataSourceForm::FIELD_COUNT - 1 {
            self.data_source_form_focus += 1;
        }
    }
}
