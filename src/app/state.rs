//! Application state - core data structures and state management
//!
//! This module contains the main App struct and related types.
//! Requests and replies are handled in the actions module.

use crate::api::ChartType;
use crate::config::DataSourceForm;
use crate::controller::{Completion, Workbench};
use tokio::sync::mpsc;

/// Active panel in the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePanel {
    QueryInput,
    DataSources,
    Results,
    Chart,
    History,
}

impl ActivePanel {
    pub fn next(self) -> Self {
        match self {
            ActivePanel::QueryInput => ActivePanel::DataSources,
            ActivePanel::DataSources => ActivePanel::Results,
            ActivePanel::Results => ActivePanel::Chart,
            ActivePanel::Chart => ActivePanel::History,
            ActivePanel::History => ActivePanel::QueryInput,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ActivePanel::QueryInput => ActivePanel::History,
            ActivePanel::DataSources => ActivePanel::QueryInput,
            ActivePanel::Results => ActivePanel::DataSources,
            ActivePanel::Chart => ActivePanel::Results,
            ActivePanel::History => ActivePanel::Chart,
        }
    }
}

/// A background reply plus where it was submitted from
#[derive(Debug)]
pub(crate) struct Reply {
    pub completion: Completion,
    /// Modal instance a create request came from
    pub modal: Option<u64>,
}

/// Spinner animation frames
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main application state
pub struct App {
    // === Workbench ===
    pub workbench: Workbench,

    // === Query Input ===
    /// Current question text
    pub query: String,
    /// Cursor position in query, in chars
    pub cursor_pos: usize,

    // === Panels ===
    pub active_panel: ActivePanel,
    /// First visible row in the results table
    pub results_scroll: usize,
    /// Selected entry in history panel
    pub history_selected: usize,
    /// Chart type used by the next chart request
    pub chart_type: ChartType,
    /// Spinner frame for loading animation
    pub spinner_frame: usize,

    // === Data Source Modal ===
    pub show_data_source_modal: bool,
    pub data_source_form: DataSourceForm,
    /// Focused field in the modal
    pub data_source_form_focus: usize,
    /// Bumped each time the modal opens
    pub(crate) data_source_modal_id: u64,

    // === Background replies ===
    pub(crate) completions_tx: mpsc::UnboundedSender<Reply>,
    pub(crate) completions_rx: mpsc::UnboundedReceiver<Reply>,

    pub should_quit: bool,
}

impl App {
    pub fn new(workbench: Workbench) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            workbench,
            query: String::new(),
            cursor_pos: 0,
            active_panel: ActivePanel::QueryInput,
            results_scroll: 0,
            history_selected: 0,
            chart_type: ChartType::default(),
            spinner_frame: 0,
            show_data_source_modal: false,
            data_source_form: DataSourceForm::new_empty(),
            data_source_form_focus: 0,
            data_source_modal_id: 0,
            completions_tx,
            completions_rx,
            should_quit: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.workbench.loading().is_visible()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Rows in the current results table
    pub fn result_row_count(&self) -> usize {
        self.workbench
            .view()
            .results
            .as_ref()
            .map(|r| r.table.rows().len())
            .unwrap_or(0)
    }

    /// Open the create-data-source modal with a blank form
    pub fn open_data_source_modal(&mut self) {
        self.data_source_form.reset();
        self.data_source_form_focus = 0;
        self.data_source_modal_id += 1;
        self.show_data_source_modal = true;
    }

    pub fn close_data_source_modal(&mut self) {
        self.show_data_source_modal = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_cycle_round_trips() {
        let mut panel = ActivePanel::QueryInput;
        for _ in 0..5 {
            panel = panel.next();
        }
        assert_eq!(panel, ActivePanel::QueryInput);
        assert_eq!(ActivePanel::QueryInput.previous(), ActivePanel::History);
        assert_eq!(ActivePanel::Chart.previous().next(), ActivePanel::Chart);
    }
}
