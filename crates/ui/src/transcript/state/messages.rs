use std::collections::HashSet;

use rill_core::{AgentStatus, Message, Role, TranscriptUpdate};

use super::{StatusIndicator, TranscriptView};

impl TranscriptView {
    /// Replace the message list wholesale
    ///
    /// This is the only way content enters the view: the transport owns the
    /// list and re-delivers it on every change, append-mostly in practice.
    /// Identity-keyed state survives for ids that are still present and is
    /// pruned for ids that vanished; the reveal cursor follows the streaming
    /// target derived from the new tail.
    pub fn set_messages(&mut self, mut messages: Vec<Message>) {
        if messages.len() > self.max_messages {
            let excess = messages.len() - self.max_messages;
            messages.drain(..excess);
        }
        self.messages = messages;
        self.prune_keyed_state();
        self.sync_reveal_target();
        self.follow.on_content_change(self.messages.len(), self.status.is_some());
    }

    /// Show or hide the transient status indicator
    pub fn set_status(&mut self, active: bool, text: impl Into<String>, kind: AgentStatus) {
        self.status = active.then(|| StatusIndicator { text: text.into(), kind });
        self.follow.on_content_change(self.messages.len(), self.status.is_some());
    }

    /// Apply one transport event
    pub fn apply_update(&mut self, update: TranscriptUpdate) {
        match update {
            TranscriptUpdate::Messages { messages } => self.set_messages(messages),
            TranscriptUpdate::Status { active, text, status } => self.set_status(active, text, status),
        }
    }

    /// Drop disclosure and focus state for messages no longer in the list
    fn prune_keyed_state(&mut self) {
        let ids: HashSet<&str> = self.messages.iter().map(|m| m.id.as_str()).collect();
        self.expanded.retain(|id, _| ids.contains(id.as_str()));
        if let Some(focused) = &self.focused_id
            && !ids.contains(focused.as_str())
        {
            self.focused_id = None;
        }
    }

    /// Re-derive the streaming target from the tail of the list
    ///
    /// The last message is the reveal target while it is an assistant turn;
    /// anything else (tool turn appended, list cleared) releases the
    /// scheduler. Retargeting the same id keeps the cursor, so growth of an
    /// in-flight turn reveals from where it left off.
    fn sync_reveal_target(&mut self) {
        match self.messages.last() {
            Some(last) if last.role == Role::Assistant => self.reveal.retarget(&last.id),
            _ => self.reveal.release(),
        }
    }

    /// Advance the reveal cursor one tick
    ///
    /// Returns whether anything moved, so the caller can skip redraws once
    /// the reveal has caught up and nothing else is animating.
    pub fn tick_reveal(&mut self) -> bool {
        let Some(last) = self.messages.last() else {
            return false;
        };
        if self.reveal.target_id() != Some(last.id.as_str()) {
            return false;
        }
        self.reveal.tick(&last.content)
    }

    /// The content of `message` that is currently on screen
    ///
    /// The streaming target shows its revealed prefix; every other message
    /// shows its full content.
    pub fn visible_content<'a>(&'a self, message: &'a Message) -> &'a str {
        if self.reveal.target_id() == Some(message.id.as_str()) {
            self.reveal.visible_prefix(&message.content)
        } else {
            &message.content
        }
    }

    /// Whether `message` should render a reveal cursor after its text
    pub fn shows_reveal_cursor(&self, message: &Message) -> bool {
        self.reveal.target_id() == Some(message.id.as_str()) && !self.reveal.is_caught_up(&message.content)
    }

    /// The message regeneration may target right now
    ///
    /// Offered iff the last message is an assistant turn and no transient
    /// status is showing.
    pub fn regenerate_candidate(&self) -> Option<&Message> {
        if self.status.is_some() {
            return None;
        }
        self.messages.last().filter(|m| m.role == Role::Assistant)
    }

    /// The message a copy action targets: the focused assistant turn when
    /// there is one, the latest assistant turn otherwise
    pub fn copy_candidate(&self) -> Option<&Message> {
        if let Some(id) = &self.focused_id
            && let Some(message) = self.messages.iter().find(|m| &m.id == id)
            && message.role == Role::Assistant
        {
            return Some(message);
        }
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn status(&self) -> Option<&StatusIndicator> {
        self.status.as_ref()
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streaming_turns() -> Vec<Message> {
        vec![
            Message::user("u1", "What's the weather?"),
            Message::assistant("a1", "Looking that up for you now."),
        ]
    }

    #[test]
    fn test_last_assistant_message_becomes_reveal_target() {
        let mut view = TranscriptView::new();
        view.set_messages(streaming_turns());

        let last = view.last().unwrap().clone();
        assert_eq!(view.visible_content(&last), "");
        assert!(view.shows_reveal_cursor(&last));

        view.tick_reveal();
        assert_eq!(view.visible_content(&last).chars().count(), 2);
    }

    #[test]
    fn test_growth_keeps_cursor_for_same_identity() {
        let mut view = TranscriptView::new();
        view.set_messages(streaming_turns());
        for _ in 0..4 {
            view.tick_reveal();
        }
        let revealed_before = view.visible_content(&view.last().unwrap().clone()).chars().count();

        let mut messages = streaming_turns();
        messages[1] = messages[1].clone().with_content("Looking that up for you now. It is sunny.");
        view.set_messages(messages);

        let last = view.last().unwrap().clone();
        assert_eq!(view.visible_content(&last).chars().count(), revealed_before);
    }

    #[test]
    fn test_new_identity_resets_cursor() {
        let mut view = TranscriptView::new();
        view.set_messages(streaming_turns());
        for _ in 0..10 {
            view.tick_reveal();
        }

        let mut messages = streaming_turns();
        messages.push(Message::user("u2", "thanks"));
        messages.push(Message::assistant("a2", "Any time."));
        view.set_messages(messages);

        let last = view.last().unwrap().clone();
        assert_eq!(view.visible_content(&last), "");
        view.tick_reveal();
        assert_eq!(view.visible_content(&last), "A");
    }

    #[test]
    fn test_non_assistant_tail_releases_target() {
        let mut view = TranscriptView::new();
        let mut messages = streaming_turns();
        view.set_messages(messages.clone());
        view.tick_reveal();

        messages.push(Message::tool(
            "t1",
            rill_core::ToolResponse::new("lookup", r#"{"ok":true}"#),
        ));
        view.set_messages(messages);

        // superseded assistant turn renders complete, no cursor
        let assistant = view.messages()[1].clone();
        assert_eq!(view.visible_content(&assistant), assistant.content);
        assert!(!view.shows_reveal_cursor(&assistant));
        assert!(!view.tick_reveal());
    }

    #[test]
    fn test_older_messages_render_full_content() {
        let mut view = TranscriptView::new();
        let messages = vec![
            Message::assistant("a1", "First answer."),
            Message::user("u2", "and?"),
            Message::assistant("a2", "Second answer."),
        ];
        view.set_messages(messages);

        let first = view.messages()[0].clone();
        assert_eq!(view.visible_content(&first), "First answer.");
        assert!(!view.shows_reveal_cursor(&first));
    }

    #[test]
    fn test_status_lifecycle() {
        let mut view = TranscriptView::new();
        assert!(!view.has_status());

        view.set_status(true, "querying the index", AgentStatus::Executing);
        assert_eq!(view.status().unwrap().kind, AgentStatus::Executing);
        assert_eq!(view.status().unwrap().text, "querying the index");

        view.set_status(false, "", AgentStatus::Unspecified);
        assert!(!view.has_status());
    }

    #[test]
    fn test_apply_update_dispatches() {
        let mut view = TranscriptView::new();
        view.apply_update(TranscriptUpdate::Messages { messages: streaming_turns() });
        assert_eq!(view.len(), 2);

        view.apply_update(TranscriptUpdate::Status {
            active: true,
            text: "thinking it over".to_string(),
            status: AgentStatus::Thinking,
        });
        assert!(view.has_status());
    }

    #[test]
    fn test_retention_cap_drops_oldest() {
        let mut view = TranscriptView::with_limits(3, 20);
        let messages: Vec<Message> = (0..5).map(|i| Message::user(format!("u{}", i), "hi")).collect();
        view.set_messages(messages);

        assert_eq!(view.len(), 3);
        assert_eq!(view.messages()[0].id, "u2");
    }

    #[test]
    fn test_pruning_discards_state_for_removed_ids() {
        let mut view = TranscriptView::new();
        let mut messages = streaming_turns();
        messages.push(Message::tool(
            "t1",
            rill_core::ToolResponse::new("lookup", r#"{"ok":true}"#),
        ));
        view.set_messages(messages);
        view.toggle_expanded("t1");
        assert!(view.is_expanded("t1"));

        view.set_messages(streaming_turns());
        assert!(!view.is_expanded("t1"));
    }

    #[test]
    fn test_regenerate_gating() {
        let mut view = TranscriptView::new();
        assert!(view.regenerate_candidate().is_none());

        view.set_messages(streaming_turns());
        assert_eq!(view.regenerate_candidate().unwrap().id, "a1");

        // no regenerate while the agent is visibly working
        view.set_status(true, "", AgentStatus::Unspecified);
        assert!(view.regenerate_candidate().is_none());
        view.set_status(false, "", AgentStatus::Unspecified);

        // no regenerate when the tail is not an assistant turn
        let mut messages = streaming_turns();
        messages.push(Message::user("u2", "wait"));
        view.set_messages(messages);
        assert!(view.regenerate_candidate().is_none());
    }

    #[test]
    fn test_copy_candidate_prefers_focused_assistant() {
        let mut view = TranscriptView::new();
        view.set_messages(vec![
            Message::assistant("a1", "First answer."),
            Message::user("u2", "more"),
            Message::assistant("a2", "Second answer."),
        ]);

        assert_eq!(view.copy_candidate().unwrap().id, "a2");

        view.focus_next();
        assert_eq!(view.copy_candidate().unwrap().id, "a1");
    }
}
