//! Color theme

use ratatui::style::{Color, Modifier, Style};

pub struct DefaultTheme;

impl DefaultTheme {
    pub const PRIMARY: Color = Color::Rgb(0, 102, 204);
    pub const GOLD: Color = Color::Rgb(230, 180, 40);
    pub const SUCCESS: Color = Color::Rgb(80, 200, 120);
    pub const ERROR: Color = Color::Rgb(235, 87, 87);
    pub const WARNING: Color = Color::Rgb(242, 153, 74);
    pub const INFO: Color = Color::Rgb(86, 182, 194);
    pub const COMMENT: Color = Color::Rgb(106, 153, 85);

    pub const TEXT: Color = Color::Rgb(230, 230, 230);
    pub const TEXT_DIM: Color = Color::Rgb(160, 160, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 110);

    pub const BG_PANEL: Color = Color::Rgb(24, 26, 32);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 50, 64);
    pub const BG_STATUS: Color = Color::Rgb(18, 20, 26);

    pub fn active_border() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn border(active: bool) -> Style {
        if active {
            Self::active_border()
        } else {
            Self::inactive_border()
        }
    }

    pub fn title() -> Style {
        Style::default().fg(Self::GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_PANEL)
    }

    pub fn normal_text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dim_text() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn code() -> Style {
        Style::default().fg(Self::INFO)
    }

    pub fn comment() -> Style {
        Style::default().fg(Self::COMMENT).add_modifier(Modifier::ITALIC)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlighted() -> Style {
        Style::default().bg(Self::BG_HIGHLIGHT)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::INFO).add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Self::GOLD)
            .bg(Self::BG_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_number() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn null_value() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::ITALIC)
    }

    pub fn popup() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_PANEL)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_DIM).bg(Self::BG_STATUS)
    }
}
