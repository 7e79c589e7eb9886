//! Bulb analytics workbench - Library
//! Natural-language queries, data quality reports, charts and exports

#[macro_use]
extern crate rust_i18n;

// Initialize i18n with locales from the "locales" directory
// Fallback to English if translation not found
i18n!("locales", fallback = "en");

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;
pub mod ui;

/// Available locales in the application
const AVAILABLE_LOCALES: &[&str] = &["en", "pt-BR"];

/// Initialize the locale based on config or system settings
pub fn init_locale(config_locale: Option<&str>) {
    let locale = match config_locale {
        Some(loc) => loc.to_string(),
        None => sys_locale::get_locale().unwrap_or_else(|| "en".to_string()),
    };
    rust_i18n::set_locale(&resolve_locale(&locale));
}

/// Map a raw locale string onto one of the shipped locales
pub fn resolve_locale(locale: &str) -> String {
    // - Replace underscore with dash (pt_BR -> pt-BR)
    // - Remove encoding suffix (.UTF-8, .utf8, etc)
    let normalized = locale
        .replace('_', "-")
        .split('.')
        .next()
        .unwrap_or("en")
        .to_string();

    // "C" and "POSIX" mean default/English
    if normalized == "C" || normalized == "POSIX" {
        return "en".to_string();
    }

    if AVAILABLE_LOCALES.contains(&normalized.as_str()) {
        return normalized;
    }

    // Try base language (e.g., "pt" from "pt-PT"), then any locale sharing it
    let base = normalized.split('-').next().unwrap_or("en");
    if AVAILABLE_LOCALES.contains(&base) {
        return base.to_string();
    }
    AVAILABLE_LOCALES
        .iter()
        .find(|l| l.starts_with(base))
        .map(|s| s.to_string())
        .unwrap_or_else(|| "en".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("pt_BR.UTF-8"), "pt-BR");
        assert_eq!(resolve_locale("pt-PT"), "pt-BR");
        assert_eq!(resolve_locale("en_US.utf8"), "en");
        assert_eq!(resolve_locale("C"), "en");
        assert_eq!(resolve_locale("de-DE"), "en");
    }
}
