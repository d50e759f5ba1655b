pub mod app;
pub mod components;
pub mod event_handler;
pub mod follow;
pub mod reveal;
pub mod theme;
pub mod transcript;

pub use app::App;
pub use event_handler::{EventHandler, KeyAction};
pub use follow::{FollowController, Viewport};
pub use reveal::RevealScheduler;
pub use theme::{Theme, ThemePalette};
pub use transcript::{TranscriptRenderer, TranscriptView};
