//! Chart panel keyboard handlers

use crate::app::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// t cycles the chart type, x/y cycle the axis columns, Enter draws
    pub(crate) fn handle_chart(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('t') => self.chart_type = self.chart_type.next(),
            KeyCode::Char('x') => self.workbench.axis_mut().cycle_x(),
            KeyCode::Char('y') => self.workbench.axis_mut().cycle_y(),
            KeyCode::Enter => self.start_visualization(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::mock::{data_source, query_response};
    use crate::api::ChartType;
    use crate::app::handlers::tests::{press, test_app};
    use crate::app::ActivePanel;
    use crossterm::event::KeyCode;

    #[test]
    fn test_enter_without_results_is_rejected() {
        let (mut app, mock, _dir) = test_app();
        app.active_panel = ActivePanel::Chart;
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.chart_type, ChartType::Line);

        press(&mut app, KeyCode::Enter);
        assert_eq!(mock.call_count(), 0);
        assert_eq!(
            app.workbench.notifications().last_error(),
            Some("No query results to visualize")
        );
    }

    #[tokio::test]
    async fn test_axis_keys_pick_columns() {
        let (mut app, mock, _dir) = test_app();
        mock.push_query(Ok(query_response(3, 2)));
        app.workbench.registry_mut().replace(vec![data_source(1, "Sales")]);
        app.workbench.registry_mut().select_index(0);
        let selected = app.workbench.registry().selected();
        app.workbench.execute_query("sales", selected).await.unwrap();

        app.active_panel = ActivePanel::Chart;
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.workbench.view().axis.x_column(), Some("customer"));
        assert_eq!(app.workbench.view().axis.y_column(), Some("revenue"));
    }
}
