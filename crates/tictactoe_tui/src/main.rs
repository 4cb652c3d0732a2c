//! Tic-tac-toe terminal game
//!
//! Two local players take turns clicking cells with the mouse.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Instant;
use tictactoe_core::{NameEntry, Players};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(path) = cli.log_file.clone() {
        config.set_log_file(path);
    }

    initialize_tracing(config.log_file())?;
    info!(config_path = %cli.config.display(), "Starting tic-tac-toe");

    let app = if cli.has_both_names() {
        let players = Players::new(
            cli.player_x.as_deref().unwrap_or_default(),
            cli.player_o.as_deref().unwrap_or_default(),
        );
        App::with_players(config, players)
    } else {
        let entry = NameEntry::with_text(
            cli.player_x.as_deref().unwrap_or_default(),
            cli.player_o.as_deref().unwrap_or_default(),
        );
        App::new(config, entry)
    };

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Logs to a file so output doesn't tear the alternate screen.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_core=debug,tictactoe_tui=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    setup_with(
        || Ok(enable_raw_mode()?),
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            // Setup error takes precedence
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        },
    )
}

/// Runs `enter` after `enable`, calling `reset` if `enter` fails.
fn setup_with<T>(
    enable: impl FnOnce() -> Result<()>,
    enter: impl FnOnce() -> Result<T>,
    reset: impl FnOnce(),
) -> Result<T> {
    enable()?;
    enter().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        reset();
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, wait up to one frame for input, tick animation; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let frame = app.config().frame_interval();

    loop {
        let mut geometry = None;
        terminal.draw(|f| geometry = ui::draw(f, &app))?;
        app.set_geometry(geometry);

        let deadline = Instant::now() + frame;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            let event = event::read()?;
            let command = input::translate(&event, app.input_mode(), *app.config().restart_key());
            if let Some(command) = command {
                debug!(?command, "Input");
                app.handle_command(command);
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_setup_failure_resets_terminal() {
        let reset = Cell::new(false);
        let result: Result<()> = setup_with(
            || Ok(()),
            || Err(anyhow::anyhow!("no tty")),
            || reset.set(true),
        );
        assert!(result.is_err());
        assert!(reset.get());
    }

    #[test]
    fn test_setup_success_keeps_terminal() {
        let reset = Cell::new(false);
        let result = setup_with(|| Ok(()), || Ok(7), || reset.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!reset.get());
    }

    #[test]
    fn test_enable_failure_skips_enter() {
        let entered = Cell::new(false);
        let reset = Cell::new(false);
        let result: Result<()> = setup_with(
            || Err(anyhow::anyhow!("raw mode unavailable")),
            || {
                entered.set(true);
                Ok(())
            },
            || reset.set(true),
        );
        assert!(result.is_err());
        assert!(!entered.get());
        assert!(!reset.get());
    }
}
