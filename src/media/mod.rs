/// Media handling module
///
/// This module handles the image assets referenced by the catalog:
/// - Downloading asset bytes, resolving relative paths (fetch.rs)
/// - Downscaling fetched images to grid thumbnails (thumbnail.rs)

pub mod fetch;
pub mod thumbnail;
