//! History panel widget

use crate::app::App;
use crate::ui::widgets::helpers::truncate_to_width;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use rust_i18n::t;

/// Draw the history panel, newest first
pub fn draw_history_panel(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let history = app.workbench.history();
    let title = format!(
        " {} ({}) {}",
        t!("title_history"),
        history.len(),
        if active { "▪ " } else { "" }
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::border(active))
        .title(Span::styled(title, DefaultTheme::title()));

    if history.is_empty() {
        let empty = Paragraph::new(Span::styled(t!("no_queries_yet").to_string(), DefaultTheme::dim_text()))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // "HH:MM:SS │ "
    let preview_width = (area.width as usize).saturating_sub(2 + 11);
    let items: Vec<ListItem> = history
        .entries()
        .enumerate()
        .map(|(idx, entry)| {
            let query_preview: String = entry.text.chars().filter(|c| !c.is_control()).collect();
            let query_preview = truncate_to_width(&query_preview, preview_width);

            let style = if active && idx == app.history_selected {
                DefaultTheme::selected()
            } else {
                DefaultTheme::normal_text()
            };

            ListItem::new(format!("{} │ {}", entry.formatted_time(), query_preview)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
