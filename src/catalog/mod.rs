/// Catalog pipeline module
///
/// This module owns everything between the raw portfolio document and the
/// grid-ready item list:
/// - Fetch with embedded fallback (loader.rs)
/// - Untrusted-field sanitization (sanitize.rs)
/// - Normalization and gallery expansion (data.rs)

pub mod data;
pub mod loader;
pub mod sanitize;

pub use data::{featured, CatalogItem};
pub use loader::{load, CatalogError, CatalogSource};
