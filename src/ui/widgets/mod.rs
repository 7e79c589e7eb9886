//! UI widgets for the application

mod chart;
mod data_source_modal;
mod data_sources;
mod helpers;
mod history_list;
mod quality_report;
mod query_input;
mod results_table;

pub use chart::{chart_data, draw_chart_panel, ChartData, Series};
pub use data_source_modal::draw_data_source_modal;
pub use data_sources::draw_data_sources_panel;
pub use helpers::{centered_rect, format_cell_value, format_number, truncate_to_width, wrap_lines};
pub use history_list::draw_history_panel;
pub use quality_report::{draw_quality_report, quality_lines};
pub use query_input::draw_query_input;
pub use results_table::{draw_generated_code, draw_results_table};
