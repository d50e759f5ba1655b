mod footer;
mod header;
mod transcript;

pub use footer::Footer;
pub use header::Header;
pub use transcript::TranscriptPane;
