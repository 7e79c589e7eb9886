//! Data source panel keyboard handlers

use crate::app::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub(crate) fn handle_data_sources(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.workbench.registry_mut().select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.workbench.registry_mut().select_next();
            }
            KeyCode::Char('n') => self.open_data_source_modal(),
            KeyCode::Char('s') => self.start_seed_sample_data(),
            KeyCode::Char('r') => self.reload_data_sources(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::mock::data_source;
    use crate::api::DataSourceId;
    use crate::app::handlers::tests::{press, test_app};
    use crate::app::ActivePanel;
    use crossterm::event::KeyCode;

    #[test]
    fn test_arrows_move_selection() {
        let (mut app, _mock, _dir) = test_app();
        app.workbench
            .registry_mut()
            .replace(vec![data_source(1, "Sales"), data_source(2, "Inventory")]);
        app.active_panel = ActivePanel::DataSources;

        press(&mut app, KeyCode::Down);
        assert_eq!(app.workbench.registry().selected(), Some(DataSourceId(1)));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.workbench.registry().selected(), Some(DataSourceId(2)));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.workbench.registry().selected(), Some(DataSourceId(1)));
    }

    #[test]
    fn test_n_opens_form() {
        let (mut app, _mock, _dir) = test_app();
        app.active_panel = ActivePanel::DataSources;
        press(&mut app, KeyCode::Char('n'));
        assert!(app.show_data_source_modal);
    }
}
