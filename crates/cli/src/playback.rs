//! Scripted stand-in for the external transport.
//!
//! The display engine consumes an ordered message list and status flags from
//! whatever feeds it; in the real system that is an SSE client. The playback
//! feed produces the same update stream from a script, including chunked
//! delivery of assistant text, so the engine's streaming behavior can be
//! driven end to end without a network.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use rill_core::{AgentStatus, Message, ToolCall, ToolResponse, TranscriptUpdate};

fn default_chunk_chars() -> usize {
    12
}

fn default_chunk_delay_ms() -> u64 {
    90
}

/// One step of a scripted conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum PlaybackStep {
    /// Append a user turn
    User {
        #[serde(default)]
        id: Option<String>,
        text: String,
    },
    /// Append a system annotation
    System {
        #[serde(default)]
        id: Option<String>,
        text: String,
    },
    /// Show or hide the transient status indicator
    Status {
        active: bool,
        #[serde(default)]
        text: String,
        #[serde(default)]
        kind: AgentStatus,
    },
    /// Append an assistant turn, delivered in growing chunks
    Assistant {
        #[serde(default)]
        id: Option<String>,
        text: String,
        #[serde(default)]
        tool_calls: Vec<ToolCall>,
        #[serde(default = "default_chunk_chars")]
        chunk_chars: usize,
        #[serde(default = "default_chunk_delay_ms")]
        chunk_delay_ms: u64,
    },
    /// Append a tool-response turn
    Tool {
        #[serde(default)]
        id: Option<String>,
        name: String,
        data: String,
    },
    /// Do nothing for a while
    Pause { ms: u64 },
}

/// A scripted conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackScript {
    #[serde(default)]
    pub title: Option<String>,
    pub steps: Vec<PlaybackStep>,
}

impl PlaybackScript {
    /// Read a script from JSON
    pub fn from_json(raw: &str) -> rill_core::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Feeds transcript updates from a script, then serves regenerate requests
pub struct Player {
    messages: Vec<Message>,
    updates_tx: UnboundedSender<TranscriptUpdate>,
    next_id: usize,
}

impl Player {
    pub fn new(updates_tx: UnboundedSender<TranscriptUpdate>) -> Self {
        Self { messages: Vec::new(), updates_tx, next_id: 0 }
    }

    fn alloc_id(&mut self, explicit: Option<String>, prefix: &str) -> String {
        match explicit {
            Some(id) => id,
            None => {
                self.next_id += 1;
                format!("{}-{}", prefix, self.next_id)
            }
        }
    }

    /// Deliver the current list wholesale, the way the real transport does
    fn emit(&self) -> bool {
        self.updates_tx
            .send(TranscriptUpdate::Messages { messages: self.messages.clone() })
            .is_ok()
    }

    fn emit_status(&self, active: bool, text: &str, kind: AgentStatus) -> bool {
        self.updates_tx
            .send(TranscriptUpdate::Status { active, text: text.to_string(), status: kind })
            .is_ok()
    }

    /// Play the script, then answer regenerate requests until cancelled
    pub async fn run(
        mut self, script: PlaybackScript, mut regenerate_rx: UnboundedReceiver<Message>, cancel: CancellationToken,
    ) {
        for step in script.steps {
            if cancel.is_cancelled() {
                return;
            }
            if !self.play_step(step, &cancel).await {
                return;
            }
        }

        tracing::info!("playback complete, serving regenerate requests");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => return,
                request = regenerate_rx.recv() => {
                    match request {
                        Some(message) => {
                            if !self.regenerate(&message, &cancel).await {
                                return;
                            }
                        }
                        None => return,
                    }
                }
            }
        }
    }

    /// Apply one step; false means the display hung up
    async fn play_step(&mut self, step: PlaybackStep, cancel: &CancellationToken) -> bool {
        match step {
            PlaybackStep::User { id, text } => {
                let id = self.alloc_id(id, "user");
                self.messages.push(Message::user(id, text));
                self.emit()
            }
            PlaybackStep::System { id, text } => {
                let id = self.alloc_id(id, "system");
                self.messages.push(Message::system(id, text));
                self.emit()
            }
            PlaybackStep::Status { active, text, kind } => self.emit_status(active, &text, kind),
            PlaybackStep::Assistant { id, text, tool_calls, chunk_chars, chunk_delay_ms } => {
                let id = self.alloc_id(id, "assistant");
                self.stream_assistant(&id, &text, tool_calls, chunk_chars, chunk_delay_ms, cancel)
                    .await
            }
            PlaybackStep::Tool { id, name, data } => {
                let id = self.alloc_id(id, "tool");
                self.messages.push(Message::tool(id, ToolResponse::new(name, data)));
                self.emit()
            }
            PlaybackStep::Pause { ms } => {
                self.sleep(ms, cancel).await;
                true
            }
        }
    }

    /// Grow an assistant turn chunk by chunk, re-delivering the list each time
    ///
    /// Chunks are sized in characters and split on character boundaries, the
    /// bursty shape the reveal scheduler is built to smooth over.
    async fn stream_assistant(
        &mut self, id: &str, text: &str, tool_calls: Vec<ToolCall>, chunk_chars: usize, chunk_delay_ms: u64,
        cancel: &CancellationToken,
    ) -> bool {
        let opening = Message::assistant_with_tool_calls(id, "", tool_calls);
        self.messages.push(opening);
        if !self.emit() {
            return false;
        }

        let chunk_chars = chunk_chars.max(1);
        let chars: Vec<char> = text.chars().collect();
        let mut delivered = 0;
        while delivered < chars.len() {
            if cancel.is_cancelled() {
                return false;
            }
            self.sleep(chunk_delay_ms, cancel).await;

            delivered = (delivered + chunk_chars).min(chars.len());
            let partial: String = chars[..delivered].iter().collect();
            if let Some(last) = self.messages.last_mut() {
                *last = last.clone().with_content(partial);
            }
            if !self.emit() {
                return false;
            }
        }
        true
    }

    /// Replay the requested assistant turn as a fresh streaming delivery
    async fn regenerate(&mut self, request: &Message, cancel: &CancellationToken) -> bool {
        tracing::info!(message_id = %request.id, "regenerate requested");
        let Some(last) = self.messages.last() else {
            return true;
        };
        if last.id != request.id {
            tracing::warn!(message_id = %request.id, "stale regenerate request ignored");
            return true;
        }

        let text = last.content.clone();
        let tool_calls = last.tool_calls().to_vec();
        let replay_id = format!("{}-r{}", request.id, self.next_id);
        self.next_id += 1;
        self.messages.pop();

        if !self.emit_status(true, "regenerating the last answer", AgentStatus::Thinking) {
            return false;
        }
        self.sleep(600, cancel).await;
        if !self.emit_status(false, "", AgentStatus::Unspecified) {
            return false;
        }
        self.stream_assistant(&replay_id, &text, tool_calls, default_chunk_chars(), default_chunk_delay_ms(), cancel)
            .await
    }

    async fn sleep(&self, ms: u64, cancel: &CancellationToken) {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(Duration::from_millis(ms)) => {}
        }
    }
}

/// The conversation played when no script file is given
pub fn demo_script() -> PlaybackScript {
    PlaybackScript {
        title: Some("rill demo".to_string()),
        steps: vec![
            PlaybackStep::System { id: None, text: "session started".to_string() },
            PlaybackStep::User { id: None, text: "What changed in the storage layer this week?".to_string() },
            PlaybackStep::Status {
                active: true,
                text: "reading the question".to_string(),
                kind: AgentStatus::Thinking,
            },
            PlaybackStep::Pause { ms: 900 },
            PlaybackStep::Status {
                active: true,
                text: "searching commit history".to_string(),
                kind: AgentStatus::Executing,
            },
            PlaybackStep::Assistant {
                id: None,
                text: "Let me look at the recent commits touching the storage layer.".to_string(),
                tool_calls: vec![ToolCall::new(
                    "call-1",
                    "git_log",
                    r#"{"path":"src/storage","since":"1 week ago","limit":20}"#,
                )],
                chunk_chars: 12,
                chunk_delay_ms: 90,
            },
            PlaybackStep::Tool {
                id: None,
                name: "git_log".to_string(),
                data: r#"{"commits":[{"sha":"f3a21c","subject":"storage: batch wal fsyncs"},{"sha":"9b10de","subject":"storage: fix torn-page recovery"}],"total":2}"#.to_string(),
            },
            PlaybackStep::Status {
                active: true,
                text: "summarizing the findings".to_string(),
                kind: AgentStatus::Planning,
            },
            PlaybackStep::Pause { ms: 700 },
            PlaybackStep::Status { active: false, text: String::new(), kind: AgentStatus::Unspecified },
            PlaybackStep::Assistant {
                id: None,
                text: "Two storage changes landed this week.\n\nFirst, WAL fsyncs are now batched: commits within the same \
                       flush window share a single fsync, which cuts sync-heavy write loads down noticeably. Second, \
                       torn-page recovery was fixed so a crash mid-write no longer needs a full rebuild; recovery now \
                       replays from the last checksum-valid page.\n\nBoth changes are behind the existing storage config \
                       and need no migration."
                    .to_string(),
                tool_calls: Vec::new(),
                chunk_chars: 24,
                chunk_delay_ms: 120,
            },
        ],
    }
}
