//! Query input widget

use crate::app::App;
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

/// Draw the single-line question input with a cursor when focused
pub fn draw_query_input(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let title = format!(" {} {}", t!("title_query"), if active { "▪ " } else { "" });
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::border(active))
        .title(Span::styled(title, DefaultTheme::title()));

    let inner = block.inner(area);
    let before_cursor: String = app.query.chars().take(app.cursor_pos).collect();
    let cursor_col = before_cursor.width() as u16;

    // Scroll horizontally so the cursor stays visible
    let scroll_x = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    let input = Paragraph::new(app.query.as_str())
        .style(DefaultTheme::normal_text())
        .scroll((0, scroll_x))
        .block(block);
    f.render_widget(input, area);

    if active && !app.show_data_source_modal {
        f.set_cursor(inner.x + cursor_col - scroll_x, inner.y);
    }
}
