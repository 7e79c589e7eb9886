//! Terminal UI
//!
//! Draws the workbench view-models. Nothing here mutates workbench state.

mod layout;
mod theme;
mod widgets;

pub use layout::draw_layout;
pub use theme::DefaultTheme;
pub use widgets::*;

use crate::app::App;
use ratatui::Frame;

/// Draw one frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.size();
    draw_layout(f, app, area);
}
