use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Human turn
    User,
    /// Model turn (may stream)
    Assistant,
    /// Tool-response turn
    Tool,
    /// Session annotation
    System,
}

impl Role {
    pub const VALUES: &[Role] = &[Role::User, Role::Assistant, Role::Tool, Role::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "tool" => Ok(Role::Tool),
            "system" => Ok(Role::System),
            _ => Err(crate::Error::Parse(format!("unknown role: {}", s))),
        }
    }
}

/// A tool invocation recorded on an assistant turn
///
/// `arguments` is serialized structured data as the transport produced it and
/// is not guaranteed to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), arguments: arguments.into() }
    }
}

/// The payload a tool produced
///
/// Same caveat as [`ToolCall::arguments`]: `response_data` may or may not
/// parse as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub name: String,
    pub response_data: String,
}

impl ToolResponse {
    pub fn new(name: impl Into<String>, response_data: impl Into<String>) -> Self {
        Self { name: name.into(), response_data: response_data.into() }
    }
}

/// Optional structured attachments on a message
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_response: Option<ToolResponse>,
}

/// One transcript turn
///
/// Messages are immutable once appended: the transport never edits a message
/// in place, it replaces the whole list. `id` is the stable identity that
/// per-message UI state (reveal cursor, disclosure) is keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl Message {
    fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self { id: id.into(), role, content: content.into(), timestamp: Utc::now(), metadata: None }
    }

    /// Create a user message
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, Role::Assistant, content)
    }

    /// Create an assistant message carrying tool calls
    pub fn assistant_with_tool_calls(
        id: impl Into<String>, content: impl Into<String>, tool_calls: Vec<ToolCall>,
    ) -> Self {
        let mut message = Self::new(id, Role::Assistant, content);
        message.metadata = Some(MessageMetadata { tool_calls, tool_response: None });
        message
    }

    /// Create a tool turn wrapping a response payload
    pub fn tool(id: impl Into<String>, response: ToolResponse) -> Self {
        let mut message = Self::new(id, Role::Tool, "");
        message.metadata = Some(MessageMetadata { tool_calls: Vec::new(), tool_response: Some(response) });
        message
    }

    /// Create a system annotation
    pub fn system(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, Role::System, content)
    }

    /// Replace the content, returning a new message with the same identity
    ///
    /// Used by transports that re-deliver a growing assistant turn: the list
    /// entry is swapped wholesale, the id stays stable.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Tool calls attached to this message, empty when absent
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.metadata.as_ref().map(|m| m.tool_calls.as_slice()).unwrap_or_default()
    }

    /// Tool response attached to this message, if any
    pub fn tool_response(&self) -> Option<&ToolResponse> {
        self.metadata.as_ref().and_then(|m| m.tool_response.as_ref())
    }
}

/// What the transient status indicator is signaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStatus {
    Planning,
    Thinking,
    Executing,
    #[default]
    Unspecified,
}

impl AgentStatus {
    /// Label shown next to the pulsing indicator
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Planning => "Planning",
            AgentStatus::Thinking => "Thinking",
            AgentStatus::Executing => "Executing",
            AgentStatus::Unspecified => "Processing",
        }
    }
}

/// One input event from the transport/state layer
///
/// The engine consumes these and nothing else: either the full ordered
/// message list (append-mostly, but replacement is wholesale) or a change to
/// the transient status indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TranscriptUpdate {
    Messages { messages: Vec<Message> },
    Status {
        active: bool,
        #[serde(default)]
        text: String,
        #[serde(default)]
        status: AgentStatus,
    },
}
