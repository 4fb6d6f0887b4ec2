//! Contact Form TUI - a terminal contact form
//!
//! A Ratatui-based form with live field validation and a summary of the
//! last successful submission.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::ContactFormConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    let loaded = ContactFormConfig::load();

    // Initialize logging; the guard flushes the log file on exit
    let default_filter = loaded
        .as_ref()
        .map(|config| config.log_filter())
        .unwrap_or(config::DEFAULT_LOG_FILTER);
    let log_dir = ContactFormConfig::log_dir();
    let _log_guard = match logging::init(&log_dir, default_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled ({}): {err:#}", log_dir.display());
            None
        }
    };

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        ContactFormConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Each key is handled to completion before the next redraw
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            tracing::info!("Quitting contact form");
            return Ok(());
        }
    }
}
