mod event_loop;
mod rendering;

pub use event_loop::run;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use rill_core::{DisplayConfig, Message, TranscriptUpdate};

use crate::event_handler::KeyAction;
use crate::theme::{Theme, ThemePalette};
use crate::transcript::TranscriptView;

/// The transcript display application
///
/// Owns the view state and the two channels that connect it to the host: an
/// update receiver fed by the transport and a regenerate sender that carries
/// the user's request back out. Everything else is reaction to input events
/// and the reveal tick.
pub struct App {
    pub(crate) view: TranscriptView,
    pub(crate) theme: ThemePalette,
    pub(crate) title: String,
    pub(crate) tick_ms: u64,
    pub(crate) animation_frame: u8,
    pub(crate) should_exit: bool,
    pub(crate) updates: Option<UnboundedReceiver<TranscriptUpdate>>,
    regenerate_tx: UnboundedSender<Message>,
}

impl App {
    pub fn new(
        config: &DisplayConfig, title: impl Into<String>, updates: UnboundedReceiver<TranscriptUpdate>,
        regenerate_tx: UnboundedSender<Message>,
    ) -> Self {
        Self {
            view: TranscriptView::with_limits(config.max_messages, config.follow_threshold),
            theme: Theme::palette(),
            title: title.into(),
            tick_ms: config.reveal_tick_ms.max(1),
            animation_frame: 0,
            should_exit: false,
            updates: Some(updates),
            regenerate_tx,
        }
    }

    pub fn view(&self) -> &TranscriptView {
        &self.view
    }

    /// Apply one transport event
    pub fn handle_update(&mut self, update: TranscriptUpdate) {
        self.view.apply_update(update);
    }

    /// Advance the reveal tick; returns whether a redraw is worthwhile
    pub(crate) fn on_tick(&mut self) -> bool {
        let advanced = self.view.tick_reveal();
        if advanced || self.view.has_status() {
            self.animation_frame = self.animation_frame.wrapping_add(1);
            return true;
        }
        false
    }

    /// React to a mapped input action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ScrollUp { rows } => self.view.scroll_up(rows),
            KeyAction::ScrollDown { rows } => self.view.scroll_down(rows),
            KeyAction::JumpToBottom => self.view.jump_to_bottom(),
            KeyAction::FocusNext => {
                self.view.focus_next();
            }
            KeyAction::FocusPrev => {
                self.view.focus_prev();
            }
            KeyAction::ClearFocus => self.view.clear_focus(),
            KeyAction::ToggleDisclosure => {
                self.view.toggle_focused_disclosure();
            }
            KeyAction::CopyContent => self.copy_content(),
            KeyAction::Regenerate => self.request_regenerate(),
            KeyAction::Quit => self.should_exit = true,
        }
    }

    /// Copy the addressed assistant turn to the system clipboard
    ///
    /// Clipboard trouble is logged and swallowed: a failed copy must never
    /// take the display down.
    fn copy_content(&mut self) {
        let Some(message) = self.view.copy_candidate() else {
            return;
        };
        let content = message.content.clone();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(content)) {
            Ok(()) => tracing::debug!(message_id = %message.id, "copied assistant content"),
            Err(e) => tracing::warn!("clipboard unavailable: {}", e),
        }
    }

    /// Send the regenerate request when one is currently offered
    fn request_regenerate(&mut self) {
        let Some(message) = self.view.regenerate_candidate() else {
            return;
        };
        if let Err(e) = self.regenerate_tx.send(message.clone()) {
            tracing::warn!("regenerate receiver dropped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_core::AgentStatus;
    use tokio::sync::mpsc;

    fn test_app() -> (App, UnboundedSender<TranscriptUpdate>, UnboundedReceiver<Message>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let (regen_tx, regen_rx) = mpsc::unbounded_channel();
        let app = App::new(&DisplayConfig::default(), "test session", update_rx, regen_tx);
        (app, update_tx, regen_rx)
    }

    #[test]
    fn test_updates_flow_into_the_view() {
        let (mut app, _update_tx, _regen_rx) = test_app();
        app.handle_update(TranscriptUpdate::Messages {
            messages: vec![Message::user("u1", "hello")],
        });
        assert_eq!(app.view().len(), 1);
    }

    #[test]
    fn test_regenerate_sends_the_last_assistant_turn() {
        let (mut app, _update_tx, mut regen_rx) = test_app();
        app.handle_update(TranscriptUpdate::Messages {
            messages: vec![Message::user("u1", "hi"), Message::assistant("a1", "answer")],
        });

        app.handle_action(KeyAction::Regenerate);
        let requested = regen_rx.try_recv().unwrap();
        assert_eq!(requested.id, "a1");
    }

    #[test]
    fn test_regenerate_suppressed_while_status_active() {
        let (mut app, _update_tx, mut regen_rx) = test_app();
        app.handle_update(TranscriptUpdate::Messages {
            messages: vec![Message::assistant("a1", "answer")],
        });
        app.handle_update(TranscriptUpdate::Status {
            active: true,
            text: "working".to_string(),
            status: AgentStatus::Executing,
        });

        app.handle_action(KeyAction::Regenerate);
        assert!(regen_rx.try_recv().is_err());
    }

    #[test]
    fn test_tick_requests_redraw_only_while_animating() {
        let (mut app, _update_tx, _regen_rx) = test_app();
        assert!(!app.on_tick());

        app.handle_update(TranscriptUpdate::Messages {
            messages: vec![Message::assistant("a1", "some words to reveal")],
        });
        assert!(app.on_tick());

        // drain the reveal; once caught up and statusless, ticks go quiet
        while app.on_tick() {}
        assert!(!app.on_tick());
    }

    #[test]
    fn test_quit_action() {
        let (mut app, _update_tx, _regen_rx) = test_app();
        assert!(!app.should_exit);
        app.handle_action(KeyAction::Quit);
        assert!(app.should_exit);
    }
}
