use std::io::Result;
use std::{panic, time::Duration};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::App;
use super::rendering::draw;
use crate::event_handler::EventHandler;

/// Run the display until the user quits
///
/// One cooperative loop owns every timer and channel: terminal input, the
/// transport's update stream, and the fixed reveal tick. The tick interval
/// dies with the loop, so no reveal timer can outlive the message it was
/// animating.
pub async fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen, EnableMouseCapture)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let backend = CrosstermBackend::new(std::io::stdout());
        if let Ok(mut terminal) = Terminal::new(backend) {
            let _ = terminal.show_cursor();
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    draw(app, &mut terminal)?;

    let mut ticker = tokio::time::interval(Duration::from_millis(app.tick_ms));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    while !app.should_exit {
        let input_poll = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            EventHandler::read()
        };

        tokio::select! {
            _ = ticker.tick() => {
                if app.on_tick() {
                    draw(app, &mut terminal)?;
                }
            }
            maybe_event = input_poll => {
                if let Some(event) = maybe_event {
                    if let Some(action) = EventHandler::map_event(&event) {
                        app.handle_action(action);
                    }
                    draw(app, &mut terminal)?;
                }
            }
            maybe_update = async {
                match app.updates {
                    Some(ref mut rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match maybe_update {
                    Some(update) => {
                        app.handle_update(update);
                        draw(app, &mut terminal)?;
                    }
                    None => {
                        // transport is gone; the view stays browsable
                        app.updates = None;
                    }
                }
            }
        }
    }

    terminal.show_cursor()?;
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
