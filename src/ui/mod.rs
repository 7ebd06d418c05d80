/// UI widget module
///
/// Thin presentation layer over the catalog and viewer cores:
/// - Filter bar, featured strip and card grid (grid.rs)
/// - Lightbox overlay (lightbox.rs)
///
/// These functions only translate state into widgets and widget events into
/// messages; all portfolio logic lives in the core modules.

pub mod grid;
pub mod lightbox;
