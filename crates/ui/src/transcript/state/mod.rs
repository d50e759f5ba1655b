mod focus;
mod messages;
mod scroll;

use std::collections::HashMap;

use rill_core::{AgentStatus, Message};

use crate::follow::FollowController;
use crate::reveal::RevealScheduler;

/// The transient "agent is working" indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub text: String,
    pub kind: AgentStatus,
}

/// View state for the conversation transcript
///
/// Holds the ordered message list as delivered by the transport, the
/// transient status indicator, and everything keyed by message identity:
/// the reveal cursor for the streaming assistant turn, the disclosure arena
/// for tool responses, and keyboard focus. Scroll bookkeeping and the follow
/// controller live here too, so one owner mutates each piece of state.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptView {
    messages: Vec<Message>,
    max_messages: usize,
    status: Option<StatusIndicator>,
    reveal: RevealScheduler,
    follow: FollowController,
    expanded: HashMap<String, bool>,
    focused_id: Option<String>,
    scroll_top: usize,
    layout: Option<(usize, usize)>,
}

impl TranscriptView {
    /// Create an empty view with default limits
    pub fn new() -> Self {
        Self::with_limits(1000, crate::follow::FOLLOW_THRESHOLD)
    }

    /// Create an empty view with explicit retention and follow limits
    pub fn with_limits(max_messages: usize, follow_threshold: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages,
            status: None,
            reveal: RevealScheduler::new(),
            follow: FollowController::with_threshold(follow_threshold),
            expanded: HashMap::new(),
            focused_id: None,
            scroll_top: 0,
            layout: None,
        }
    }
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self::new()
    }
}
