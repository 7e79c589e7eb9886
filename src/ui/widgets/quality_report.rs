//! Data quality report widget

use crate::app::App;
use crate::render::QualityView;
use crate::ui::widgets::helpers::format_number;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use rust_i18n::t;

/// Lines for a quality view: totals, duplicates, missing values, suggestions
pub fn quality_lines(quality: &QualityView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", t!("quality_total_rows")), DefaultTheme::dim_text()),
        Span::styled(format_number(quality.total_rows as i64), DefaultTheme::normal_text()),
        Span::styled(format!("   {}: ", t!("quality_total_columns")), DefaultTheme::dim_text()),
        Span::styled(quality.total_columns.to_string(), DefaultTheme::normal_text()),
    ])];

    if let Some(warning) = &quality.duplicate_warning {
        lines.push(Line::from(Span::styled(format!("⚠ {}", warning), DefaultTheme::warning())));
    }

    if !quality.missing.is_empty() {
        let missing = quality
            .missing
            .iter()
            .map(|(col, count)| format!("{} ({})", col, count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t!("quality_missing")), DefaultTheme::dim_text()),
            Span::styled(missing, DefaultTheme::warning()),
        ]));
    }

    if quality.has_suggestions() {
        lines.push(Line::from(Span::styled(
            format!("{}:", t!("quality_suggestions")),
            DefaultTheme::dim_text(),
        )));
        for s in &quality.suggestions {
            let mut spans = vec![
                Span::raw("• "),
                Span::styled(s.label.clone(), DefaultTheme::info()),
            ];
            if let Some(detail) = &s.detail {
                spans.push(Span::styled(format!(" ({})", detail), DefaultTheme::dim_text()));
            }
            spans.push(Span::styled(format!(": {}", s.advice), DefaultTheme::normal_text()));
            lines.push(Line::from(spans));
        }
    }

    lines
}

/// Draw the data quality panel
pub fn draw_quality_report(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::inactive_border())
        .title(Span::styled(format!(" {} ", t!("title_quality")), DefaultTheme::title()));

    let lines = app
        .workbench
        .view()
        .results
        .as_ref()
        .map(|r| quality_lines(&r.quality))
        .unwrap_or_default();

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
