//! Layout management

use crate::app::{ActivePanel, App};
use crate::session::NotificationKind;
use crate::ui::widgets::{
    draw_chart_panel, draw_data_source_modal, draw_data_sources_panel, draw_generated_code,
    draw_history_panel, draw_quality_report, draw_query_input, draw_results_table,
};
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use rust_i18n::t;

/// Draw the main layout
pub fn draw_layout(f: &mut Frame, app: &App, area: Rect) {
    // Main vertical layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Content
            Constraint::Length(1),   // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.show_data_source_modal {
        draw_data_source_modal(f, app, area);
    }
}

/// Draw the header with the selected data source and loading state
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),  // Logo/title
            Constraint::Min(20),     // Data source info
            Constraint::Length(24),  // Loading indicator
        ])
        .split(area);

    let logo = Paragraph::new(vec![
        Line::from(Span::styled("╔════════════════╗", DefaultTheme::title())),
        Line::from(vec![
            Span::styled("║ ", DefaultTheme::title()),
            Span::styled("Bulb Workbench ", Style::default().fg(DefaultTheme::TEXT)),
            Span::styled("║", DefaultTheme::title()),
        ]),
        Line::from(Span::styled("╚════════════════╝", DefaultTheme::title())),
    ])
    .style(DefaultTheme::header());
    f.render_widget(logo, header_chunks[0]);

    let source_line = match app.workbench.registry().selected_source() {
        Some(source) => Line::from(vec![
            Span::styled("● ", DefaultTheme::success()),
            Span::styled(source.name.clone(), DefaultTheme::normal_text()),
            Span::styled(" · ", DefaultTheme::dim_text()),
            Span::styled(source.database_type.clone(), DefaultTheme::dim_text()),
        ]),
        None => Line::from(vec![
            Span::styled("○ ", DefaultTheme::dim_text()),
            Span::styled(t!("no_data_source").to_string(), DefaultTheme::dim_text()),
        ]),
    };
    let export_line = match &app.workbench.view().last_download {
        Some(path) => Line::from(Span::styled(
            t!("last_export", path = path.display()).to_string(),
            DefaultTheme::dim_text(),
        )),
        None => Line::from(""),
    };
    let info = Paragraph::new(vec![Line::from(""), source_line, export_line])
        .style(DefaultTheme::header());
    f.render_widget(info, header_chunks[1]);

    let loading_line = if app.is_loading() {
        Line::from(Span::styled(
            format!("{} {} ", app.spinner(), t!("loading")),
            DefaultTheme::warning(),
        ))
    } else {
        Line::from("")
    };
    let loading = Paragraph::new(vec![Line::from(""), loading_line])
        .style(DefaultTheme::header())
        .alignment(Alignment::Right);
    f.render_widget(loading, header_chunks[2]);
}

/// Draw main content area
fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    // Horizontal split: left (query + results), right (sources + chart + history)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62),
            Constraint::Percentage(38),
        ])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Query input
            Constraint::Length(8),   // Generated SQL/Python
            Constraint::Min(6),      // Results table
            Constraint::Length(10),  // Quality report
        ])
        .split(h_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),   // Data sources
            Constraint::Min(10),     // Chart
            Constraint::Length(8),   // History
        ])
        .split(h_chunks[1]);

    let active = app.active_panel;
    draw_query_input(f, app, left_chunks[0], active == ActivePanel::QueryInput);
    draw_generated_code(f, app, left_chunks[1]);
    draw_results_table(f, app, left_chunks[2], active == ActivePanel::Results);
    draw_quality_report(f, app, left_chunks[3]);
    draw_data_sources_panel(f, app, right_chunks[0], active == ActivePanel::DataSources);
    draw_chart_panel(f, app, right_chunks[1], active == ActivePanel::Chart);
    draw_history_panel(f, app, right_chunks[2], active == ActivePanel::History);
}

/// Draw the status bar: the newest toast, else key hints
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let message = match app.workbench.notifications().latest() {
        Some(n) if n.kind == NotificationKind::Error => {
            Span::styled(format!("❌ {}", n.message), DefaultTheme::error())
        }
        Some(n) => Span::styled(format!("✓ {}", n.message), DefaultTheme::success()),
        None => Span::styled(t!("help_line").to_string(), DefaultTheme::dim_text()),
    };

    f.render_widget(Paragraph::new(message).style(DefaultTheme::status_bar()), area);
}
