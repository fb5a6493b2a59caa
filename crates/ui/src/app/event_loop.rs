use super::{App, rendering};
use crate::event_handler::EventHandler;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Result, Stdout, Write};
use std::{panic, time::Duration};

pub async fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    let terminal = crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(std::io::stdout())));
    let mut terminal = match terminal {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal(&mut std::io::stdout());
            return Err(e);
        }
    };

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut std::io::stdout());
        original_hook(panic_info);
    }));

    let result = session(app, &mut terminal).await;
    let restored = restore_terminal(&mut std::io::stdout());

    result.and(restored)
}

/// Draw and handle events until the app exits
async fn session(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.clear()?;
    rendering::draw(app, terminal)?;
    tracing::info!(backend = %app.backend_label(), "chat session started");

    while !app.should_exit {
        let tui_poll = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            EventHandler::read()
        };

        tokio::select! {
            maybe_event = tui_poll => {
                if let Some(event) = maybe_event? {
                    app.handle_event(event);
                    rendering::draw(app, terminal)?;
                }
            }
            Some(completion) = app.completion_rx.recv() => {
                app.handle_completion(completion);
                rendering::draw(app, terminal)?;
            }
        }
    }

    tracing::info!(
        messages = app.view().transcript.len(),
        in_flight = app.controller().in_flight(),
        "chat session ended"
    );
    Ok(())
}

/// Leave raw mode and the alternate screen and show the cursor
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore_terminal(out: &mut impl Write) -> Result<()> {
    let raw = crossterm::terminal::disable_raw_mode();
    let screen = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen, crossterm::cursor::Show);
    raw.and(screen)
}
