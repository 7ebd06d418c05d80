/// Viewer session module
///
/// This module owns the lightbox state machine and video resolution:
/// - Open/step/close/render over an ordered navigation set (session.rs)
/// - YouTube id extraction and embed URL construction (video.rs)

pub mod session;
pub mod video;

pub use session::{DisplayPayload, MediaKind, NavigableEntry, ViewerSession};
pub use video::EmbedOptions;
