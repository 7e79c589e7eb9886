//! Results table and generated code widgets

use crate::app::App;
use crate::render::ResultsView;
use crate::ui::widgets::helpers::{format_cell_value, truncate_to_width, wrap_lines};
use crate::ui::DefaultTheme;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use rust_i18n::t;

/// Widest a column may get
const MAX_COL_WIDTH: usize = 30;

/// Draw the results table panel
pub fn draw_results_table(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let border_style = DefaultTheme::border(active);
    let Some(results) = app.workbench.view().results.as_ref() else {
        let empty = Paragraph::new(Span::styled(
            t!("no_queries_yet").to_string(),
            DefaultTheme::dim_text(),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(format!(" {} ", t!("title_results")), DefaultTheme::title())),
        );
        f.render_widget(empty, area);
        return;
    };

    let title = format!(" {} │ {} ", t!("title_results"), results.summary);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, DefaultTheme::title()));

    if let Some(placeholder) = results.table.placeholder() {
        let empty = Paragraph::new(Span::styled(placeholder, DefaultTheme::dim_text()))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Leave a line for the truncation note
    let note = results.table.truncation_note();
    let (table_area, note_area) = if note.is_some() && area.height > 4 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    draw_table(f, app, results, table_area, block, active);

    if let (Some(note), Some(note_area)) = (note, note_area) {
        f.render_widget(
            Paragraph::new(Span::styled(note, DefaultTheme::warning())),
            note_area,
        );
    }
}

fn draw_table(f: &mut Frame, app: &App, results: &ResultsView, area: Rect, block: Block, active: bool) {
    let columns = results.table.columns();
    let rows = results.table.rows();
    let row_num_width = (rows.len().to_string().len() + 2).max(4) as u16;

    // Size each column to its widest visible content, capped
    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(row_num_width))
        .chain(columns.iter().enumerate().map(|(i, name)| {
            let content = rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| format_cell_value(c).0.chars().count())
                .max()
                .unwrap_or(0);
            let width = content.max(name.chars().count()).min(MAX_COL_WIDTH) + 2;
            Constraint::Length(width as u16)
        }))
        .collect();

    let header_cells = std::iter::once(Cell::from(" # ").style(DefaultTheme::table_header())).chain(
        columns.iter().map(|c| {
            Cell::from(truncate_to_width(c, MAX_COL_WIDTH)).style(DefaultTheme::table_header())
        }),
    );
    let header = Row::new(header_cells).height(1);

    let visible_height = area.height.saturating_sub(3) as usize;
    let scroll_offset = app.results_scroll.min(rows.len().saturating_sub(1));

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(row_idx, row)| {
            let mut cells = vec![Cell::from(format!(
                "{:>width$} ",
                row_idx + 1,
                width = row_num_width as usize - 1
            ))
            .style(DefaultTheme::row_number())];

            cells.extend(row.iter().map(|cell| {
                let (value, is_null) = format_cell_value(cell);
                let style = if is_null {
                    DefaultTheme::null_value()
                } else {
                    DefaultTheme::normal_text()
                };
                Cell::from(truncate_to_width(&value, MAX_COL_WIDTH)).style(style)
            }));
            Row::new(cells)
        })
        .collect();

    let table = Table::new(table_rows, widths).header(header).block(block);
    f.render_widget(table, area);

    if rows.len() > visible_height && active {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"));

        let mut scrollbar_state = ScrollbarState::new(rows.len()).position(scroll_offset);

        f.render_stateful_widget(
            scrollbar,
            area.inner(&Margin { vertical: 1, horizontal: 0 }),
            &mut scrollbar_state,
        );
    }
}

/// Draw the generated SQL and Python for the last query
pub fn draw_generated_code(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::inactive_border())
        .title(Span::styled(format!(" {} ", t!("title_generated")), DefaultTheme::title()));

    let Some(results) = app.workbench.view().results.as_ref() else {
        f.render_widget(block, area);
        return;
    };

    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (label, code) in [
        (t!("sql_label"), &results.generated_sql),
        (t!("python_label"), &results.generated_python),
    ] {
        if code.trim().is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(format!("-- {}", label), DefaultTheme::comment())));
        for source_line in code.lines() {
            lines.extend(
                wrap_lines(source_line, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, DefaultTheme::code()))),
            );
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
