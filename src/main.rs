//! Bulb analytics workbench - terminal client

use anyhow::Result;
use bulb_workbench::api::http::HttpBackend;
use bulb_workbench::api::WorkbenchBackend;
use bulb_workbench::app::App;
use bulb_workbench::config::AppConfig;
use bulb_workbench::controller::Workbench;
use bulb_workbench::download::Downloads;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry BULB_API_URL / RUST_LOG
    dotenvy::dotenv().ok();

    let (mut config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.apply_env();

    bulb_workbench::logging::init_logging(config.log_path().as_deref())?;
    if let Some(e) = config_error {
        warn!("Using default config: {:#}", e);
    }
    bulb_workbench::init_locale(config.locale.as_deref());
    info!("Starting bulb against {}", config.api_url);

    let backend: Arc<dyn WorkbenchBackend> =
        Arc::new(HttpBackend::new(config.api_url.clone(), config.request_timeout())?);
    let downloads = Downloads::new(config.download_dir());
    let workbench =
        Workbench::new(backend, downloads).with_notification_ttl(config.notification_ttl());

    let mut app = App::new(workbench);
    app.reload_data_sources();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("Exited with error: {:#}", e);
    }
    info!("Bye");
    result
}
