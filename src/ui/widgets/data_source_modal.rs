//! Create-data-source modal widget

use crate::app::App;
use crate::config::DataSourceForm;
use crate::ui::widgets::helpers::centered_rect;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use rust_i18n::t;

/// Draw the data source modal over the main layout
pub fn draw_data_source_modal(f: &mut Frame, app: &App, area: Rect) {
    let modal_area = centered_rect(60, 50, area);
    f.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(format!(" {} ", t!("title_new_data_source")))
        .title_style(DefaultTheme::title())
        .borders(Borders::ALL)
        .border_style(DefaultTheme::popup_border())
        .style(DefaultTheme::popup());

    let inner = modal_block.inner(modal_area);
    f.render_widget(modal_block, modal_area);

    let form = &app.data_source_form;
    let mut constraints = vec![Constraint::Length(2); DataSourceForm::FIELD_COUNT];
    constraints.push(Constraint::Length(1)); // Spacing
    constraints.push(Constraint::Length(1)); // Hint
    constraints.push(Constraint::Min(0));

    let field_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for i in 0..DataSourceForm::FIELD_COUNT {
        let value = if i == DataSourceForm::TYPE_FIELD {
            format!("◀ {} ▶", form.get_field(i))
        } else {
            form.get_field(i)
        };
        draw_form_field(
            f,
            DataSourceForm::get_field_label(i),
            &value,
            i == app.data_source_form_focus,
            field_chunks[i],
        );
    }

    let hint_style = if form.is_valid() {
        DefaultTheme::success()
    } else {
        DefaultTheme::dim_text()
    };
    let hint = Paragraph::new(Span::styled(t!("form_hint").to_string(), hint_style));
    f.render_widget(hint, field_chunks[DataSourceForm::FIELD_COUNT + 1]);
}

/// Draw a single form field
fn draw_form_field(f: &mut Frame, label: &str, value: &str, is_focused: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),  // Label
            Constraint::Min(20),     // Input
        ])
        .split(area);

    let label_style = if is_focused {
        Style::default().fg(DefaultTheme::GOLD).add_modifier(Modifier::BOLD)
    } else {
        DefaultTheme::normal_text()
    };
    f.render_widget(Paragraph::new(format!("{}:", label)).style(label_style), chunks[0]);

    let input_style = if is_focused {
        Style::default()
            .fg(DefaultTheme::TEXT)
            .bg(DefaultTheme::BG_HIGHLIGHT)
    } else {
        Style::default().fg(DefaultTheme::TEXT)
    };

    // Show cursor if focused
    let display = if is_focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(display).style(input_style).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(DefaultTheme::border(is_focused)),
    );
    f.render_widget(input, chunks[1]);
}
