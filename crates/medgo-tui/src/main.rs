use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use medgo_core::settings::Settings;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{stdout, Stdout};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod events;
mod layout;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, load_error) = match Settings::load() {
        Ok(s) => (s, None),
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            (Settings::default(), Some(e))
        }
    };
    init_logging(&settings)?;
    if let Some(err) = load_error {
        warn!(%err, "settings rejected, running with defaults");
    }

    let mut terminal = init_terminal()?;
    let result = match App::new(settings) {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(err) => Err(err),
    };

    restore_terminal(&mut terminal)?;
    info!("shut down");

    result
}

/// Terminal output belongs to the UI, so diagnostics go to the log file.
/// `RUST_LOG` overrides the configured level.
fn init_logging(settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .with_context(|| format!("opening log file {}", settings.log_file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
