use rill_core::{Message, Role};

use super::TranscriptView;

impl TranscriptView {
    /// Whether keyboard focus can land on this message
    ///
    /// Assistant turns (copy target) and tool turns carrying a response
    /// (disclosure target) are focusable; user and system turns are not.
    fn is_focusable(message: &Message) -> bool {
        match message.role {
            Role::Assistant => true,
            Role::Tool => message.tool_response().is_some(),
            Role::User | Role::System => false,
        }
    }

    fn focusable_ids(&self) -> Vec<String> {
        self.messages.iter().filter(|m| Self::is_focusable(m)).map(|m| m.id.clone()).collect()
    }

    /// Move focus to the next focusable message
    pub fn focus_next(&mut self) -> bool {
        let ids = self.focusable_ids();
        if ids.is_empty() {
            return false;
        }

        let next = match &self.focused_id {
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(pos) if pos + 1 < ids.len() => Some(ids[pos + 1].clone()),
                Some(_) => None,
                None => ids.first().cloned(),
            },
            None => ids.first().cloned(),
        };

        match next {
            Some(id) => {
                self.focused_id = Some(id);
                true
            }
            None => false,
        }
    }

    /// Move focus to the previous focusable message
    pub fn focus_prev(&mut self) -> bool {
        let ids = self.focusable_ids();
        if ids.is_empty() {
            return false;
        }

        let prev = match &self.focused_id {
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(pos) if pos > 0 => Some(ids[pos - 1].clone()),
                Some(_) => None,
                None => ids.last().cloned(),
            },
            None => ids.last().cloned(),
        };

        match prev {
            Some(id) => {
                self.focused_id = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused_id = None;
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused_id.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }

    /// Disclosure state for a tool entry, collapsed unless toggled
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip a tool entry between collapsed and expanded
    ///
    /// The arena entry is created lazily on first toggle and pruned when the
    /// message leaves the list.
    pub fn toggle_expanded(&mut self, id: &str) {
        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Toggle disclosure on the focused message, when it is a tool entry
    pub fn toggle_focused_disclosure(&mut self) -> bool {
        let Some(id) = self.focused_id.clone() else {
            return false;
        };
        let is_tool = self
            .messages
            .iter()
            .any(|m| m.id == id && m.role == Role::Tool && m.tool_response().is_some());
        if !is_tool {
            return false;
        }
        self.toggle_expanded(&id);
        true
    }
}
