//! Terminal UI for the guessing game.

mod app;
mod input;
mod ui;

pub use app::TerminalApp;
pub use input::{DraftEdit, KeyAction, apply_edit, map_key};

use crate::games::guess::GuessGame;
use crate::session::{DisplaySurface, InputEvent, dispatch};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Log file written while the terminal is in raw mode.
pub const LOG_FILE: &str = "strictly_guess_tui.log";

/// Runs the terminal front end until the player quits.
pub async fn run_tui(mut game: GuessGame) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = spawn_key_reader(key_tx);

    let mut app = TerminalApp::new(game.config().clone(), game.current());
    let res = run_app(&mut terminal, &mut game, &mut app, &mut key_rx).await;

    // Closing the channel stops the reader at its next poll.
    drop(key_rx);
    if reader.join().is_err() {
        warn!("Key reader thread panicked");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    res
}

/// Forwards key presses from a blocking thread into the async loop.
fn spawn_key_reader(tx: mpsc::UnboundedSender<KeyEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("Key reader stopped");
    })
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut GuessGame,
    app: &mut TerminalApp,
    key_rx: &mut mpsc::UnboundedReceiver<KeyEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            biased;

            key = key_rx.recv() => {
                let Some(key) = key else {
                    info!("Key reader closed");
                    return Ok(());
                };
                match map_key(key) {
                    KeyAction::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyAction::Edit(edit) => app.edit(edit),
                    KeyAction::Submit => {
                        let raw = app.take_draft();
                        app.render(&dispatch(game, InputEvent::Submit(raw)))?;
                    }
                    KeyAction::Reset => {
                        app.edit(DraftEdit::Clear);
                        app.render(&dispatch(game, InputEvent::Reset))?;
                    }
                    KeyAction::Ignore => {}
                }
            }
            instruction = game.next_highlight() => {
                app.render(&instruction)?;
            }
        }
    }
}
