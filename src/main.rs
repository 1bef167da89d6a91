//! Ride Booking TUI - terminal booking form for ride requests
//!
//! A Ratatui-based form that validates rider details and sends them to an
//! external form collector.

mod app;
mod collector;
mod config;
mod controller;
mod error;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::BookingConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Once;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGING: Once = Once::new();

const LOG_FILE_PREFIX: &str = "ride-booking-tui";

/// Install the global tracing subscriber. Safe to call more than once; only
/// the first call has any effect and only the first call can return a guard.
///
/// The terminal owns stdout/stderr while the UI is up, so logs go to a file in
/// the platform data directory when one can be opened. The returned guard
/// flushes the background writer and must live until the program exits.
fn init_logging() -> Option<WorkerGuard> {
    let mut guard = None;
    LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "ride_booking_tui=info".into());

        let appender = ProjectDirs::from("com", "ridebooking", "ride-booking-tui").and_then(|dirs| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .build(dirs.data_local_dir())
                .ok()
        });

        let registry = tracing_subscriber::registry().with(filter);
        match appender {
            Some(appender) => {
                let (writer, worker) = tracing_appender::non_blocking(appender);
                guard = Some(worker);
                registry
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init();
            }
            None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
        }
    });
    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the guard flushes buffered lines on exit
    let log_guard = init_logging();

    let config = BookingConfig::load()?;
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Faster polling (16ms = ~60fps) while something is moving or a submission is pending
        let poll_duration = if app.needs_fast_redraw() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Let the spawned submission task make progress between frames
        tokio::task::yield_now().await;

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key, Instant::now())?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let _first = init_logging();
        let second = init_logging();
        assert!(second.is_none());
        tracing::info!("still logging after a repeated init");
    }
}
