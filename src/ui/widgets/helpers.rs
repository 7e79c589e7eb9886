//! Helper functions for UI widgets

use crate::api::CellValue;
use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format cell value for display with NULL handling
pub fn format_cell_value(cell: &CellValue) -> (String, bool) {
    match cell {
        CellValue::Null => (cell.to_string(), true),
        CellValue::Int(v) => (format_number(*v), false),
        CellValue::Float(v) => (format_float(*v), false),
        other => (other.to_string(), false),
    }
}

/// Format number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Floats with at most four decimals, trailing zeros dropped
fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Cut `text` to at most `width` terminal columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Wrap text into lines no wider than `width`
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Rect of the given percentage size centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1000), "-1,000");
    }

    #[test]
    fn test_null_and_empty_are_distinct() {
        assert_eq!(format_cell_value(&CellValue::Null), ("NULL".to_string(), true));
        assert_eq!(
            format_cell_value(&CellValue::String(String::new())),
            (String::new(), false)
        );
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(format_cell_value(&CellValue::Float(1234.5)).0, "1234.5");
        assert_eq!(format_cell_value(&CellValue::Float(0.123456)).0, "0.1235");
        assert_eq!(format_cell_value(&CellValue::Float(2.0)).0, "2");
    }

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate_to_width("revenue", 10), "revenue");
        assert_eq!(truncate_to_width("revenue", 4), "rev…");
        // Wide chars take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("SELECT customer, revenue FROM sales", 16);
        assert!(lines.iter().all(|l| l.width() <= 16));
        assert_eq!(lines.join(" "), "SELECT customer, revenue FROM sales");
    }
}
