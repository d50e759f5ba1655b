pub mod preview;
mod renderer;
mod state;

pub use renderer::TranscriptRenderer;
pub use state::{StatusIndicator, TranscriptView};
