//! Intake TUI - terminal intake form for purchase requests
//!
//! A Ratatui-based two-step form that collects a request, its justification,
//! a vendor and the contract terms, then hands the result to a submission
//! sink.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::IntakeConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = IntakeConfig::load()?;
    // Flushes buffered log lines on drop, so it must outlive the terminal
    let log_guard = init_logging(&config)?;

    let sink = sink::from_config(&config);
    tracing::info!(sink = sink.name(), "starting intake form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(sink);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        // exit() skips destructors
        drop(log_guard);
        std::process::exit(1);
    }

    tracing::info!(
        submitted = app.state.submitted_count,
        "intake form closed"
    );
    Ok(())
}

/// Log to a file while the terminal is in raw mode, or stderr if there is no
/// data directory.
///
/// File output goes through a non-blocking writer. The returned guard must be
/// held until shutdown or the last buffered lines are lost.
fn init_logging(config: &IntakeConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "intake_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    let Some(path) = config.log_path() else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(None);
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file_appender(&path)?);

    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();
    Ok(Some(guard))
}

/// Appender that writes to exactly `path`, creating its directory
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let log_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let log_filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("intake-tui.log");
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_filename)
        .build(log_dir)?;
    Ok(appender)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Redraw after every handled event
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported on some platforms
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.quit();
                } else {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
