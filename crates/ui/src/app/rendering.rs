use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::Result;

use super::App;
use crate::components::{Footer, Header, TranscriptPane};

/// Draw one frame: header, transcript, hint bar
pub fn draw(app: &mut App, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Header::new(&app.view, &app.title, app.theme);
        header.render(frame, rows[0]);

        let mut pane = TranscriptPane::new(&mut app.view, app.theme, app.animation_frame);
        pane.render(frame, rows[1]);

        let footer = Footer::new(&app.view, app.theme);
        footer.render(frame, rows[2]);
    })?;

    Ok(())
}
