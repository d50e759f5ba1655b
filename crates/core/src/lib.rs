pub mod config;
pub mod error;
pub mod logging;
pub mod message;

pub use config::{Config, DisplayConfig, LoggingConfig};
pub use error::{Error, Result};
pub use message::{AgentStatus, Message, MessageMetadata, Role, ToolCall, ToolResponse, TranscriptUpdate};
