mod key_action;

pub use key_action::KeyAction;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

const WHEEL_ROWS: usize = 3;
const PAGE_ROWS: usize = 10;

/// Input reader and key map for the transcript display
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    ///
    /// Polls briefly so the caller's select loop keeps breathing; returns
    /// `None` on timeout. Terminal errors are logged, not propagated: they
    /// are fatal anyway and the loop exits on the next iteration.
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(std::time::Duration::from_millis(10)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::error!("terminal read error: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::error!("event poll error: {}", e);
                None
            }
        }
    }

    /// Map a terminal event to an action
    pub fn map_event(event: &Event) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::map_key_event(*key_event),
            Event::Mouse(mouse_event) => Self::map_mouse_event(*mouse_event),
            _ => None,
        }
    }

    fn map_key_event(event: KeyEvent) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(KeyAction::Quit);
        }

        match event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::ScrollUp { rows: 1 }),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::ScrollDown { rows: 1 }),
            KeyCode::PageUp => Some(KeyAction::ScrollUp { rows: PAGE_ROWS }),
            KeyCode::PageDown => Some(KeyAction::ScrollDown { rows: PAGE_ROWS }),
            KeyCode::End | KeyCode::Char('G') => Some(KeyAction::JumpToBottom),
            KeyCode::Tab => Some(KeyAction::FocusNext),
            KeyCode::BackTab => Some(KeyAction::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::ToggleDisclosure),
            KeyCode::Char('c') => Some(KeyAction::CopyContent),
            KeyCode::Char('r') => Some(KeyAction::Regenerate),
            KeyCode::Esc => Some(KeyAction::ClearFocus),
            KeyCode::Char('q') => Some(KeyAction::Quit),
            _ => None,
        }
    }

    fn map_mouse_event(event: MouseEvent) -> Option<KeyAction> {
        match event.kind {
            MouseEventKind::ScrollUp => Some(KeyAction::ScrollUp { rows: WHEEL_ROWS }),
            MouseEventKind::ScrollDown => Some(KeyAction::ScrollDown { rows: WHEEL_ROWS }),
            _ => None,
        }
    }
}
