//! Export shortcuts for query results

use crate::api::ExportFormat;
use crate::app::App;
use crossterm::event::KeyCode;

/// Function keys bound to each export format
pub const EXPORT_KEYS: [(KeyCode, ExportFormat); 4] = [
    (KeyCode::F(5), ExportFormat::Csv),
    (KeyCode::F(6), ExportFormat::Sql),
    (KeyCode::F(7), ExportFormat::Json),
    (KeyCode::F(8), ExportFormat::Python),
];

/// Export format bound to a key, if any
pub fn export_format_for(code: KeyCode) -> Option<ExportFormat> {
    EXPORT_KEYS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, format)| *format)
}

impl App {
    /// Export the current session; the file lands in the download directory
    pub fn start_export(&mut self, format: ExportFormat) {
        match self.workbench.begin_export(format) {
            Ok(dispatch) => self.spawn_dispatch(dispatch),
            Err(e) => tracing::debug!("Export rejected: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_map_to_formats() {
        assert_eq!(export_format_for(KeyCode::F(5)), Some(ExportFormat::Csv));
        assert_eq!(export_format_for(KeyCode::F(8)), Some(ExportFormat::Python));
        assert_eq!(export_format_for(KeyCode::F(9)), None);
    }
}
