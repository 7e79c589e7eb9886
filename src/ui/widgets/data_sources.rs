//! Data source selector widget

use crate::app::App;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use rust_i18n::t;

pub fn draw_data_sources_panel(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let registry = app.workbench.registry();
    let title = format!(" {} {}", t!("title_data_sources"), if active { "▪ " } else { "" });
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::border(active))
        .title(Span::styled(title, DefaultTheme::title()));

    if registry.sources().is_empty() {
        let hint = Paragraph::new(Span::styled(
            t!("no_data_sources_hint").to_string(),
            DefaultTheme::dim_text(),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let selected = registry.selected();
    let items: Vec<ListItem> = registry
        .sources()
        .iter()
        .map(|source| {
            let is_selected = selected == Some(source.id);
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(DefaultTheme::GOLD).add_modifier(Modifier::BOLD)
            } else {
                DefaultTheme::normal_text()
            };
            ListItem::new(format!("{}{}", prefix, source.label())).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
