/// Catalog loading: network fetch with an embedded fallback
///
/// The loader never hands out partially-sanitized data. Whatever the source,
/// the document goes through [`normalize`](super::data::normalize) before the
/// caller sees it.
use std::time::Duration;

use thiserror::Error;

use super::data::{normalize, CatalogItem, RawCatalog};

/// The portfolio document compiled into the binary. The same data the
/// original site inlined into the page; used whenever the network cannot be.
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/portfolio.json");

/// Errors surfaced by [`load`]. Record-level problems are not errors; they
/// degrade silently during normalization.
///
/// `Clone` because load results travel inside UI messages.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The fetch failed and no fallback produced a usable document.
    #[error("portfolio data unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// The catalog text is not a valid JSON document.
    #[error("portfolio document is malformed: {reason}")]
    Malformed { reason: String },
}

/// Where the catalog document comes from.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Absolute URL of the catalog document. `None` runs fully offline on
    /// the embedded copy, skipping the network entirely.
    pub url: Option<String>,
}

impl CatalogSource {
    pub fn offline() -> Self {
        Self { url: None }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()) }
    }

    /// Origin handed to video embeds: defined only when the catalog is
    /// served over http(s), never for the embedded/offline context.
    pub fn origin(&self) -> Option<String> {
        let url = url::Url::parse(self.url.as_deref()?).ok()?;
        match url.scheme() {
            "http" | "https" => Some(url.origin().ascii_serialization()),
            _ => None,
        }
    }
}

/// Load, sanitize and flatten the catalog.
///
/// Remote sources are fetched with caching disabled; any failure (transport,
/// status, parse) falls back to the embedded document. Offline sources parse
/// the embedded document directly.
pub async fn load(source: &CatalogSource) -> Result<Vec<CatalogItem>, CatalogError> {
    let raw = match &source.url {
        None => parse_catalog(EMBEDDED_CATALOG)?,
        Some(url) => resolve(fetch_catalog(url).await, Some(EMBEDDED_CATALOG))?,
    };

    let items = normalize(&raw);
    println!("🖼️  Portfolio loaded: {} entries", items.len());
    Ok(items)
}

async fn fetch_catalog(url: &str) -> Result<RawCatalog, CatalogError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| CatalogError::DataUnavailable { reason: e.to_string() })?;

    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| CatalogError::DataUnavailable { reason: e.to_string() })?;

    if !response.status().is_success() {
        return Err(CatalogError::DataUnavailable {
            reason: format!("server answered {}", response.status()),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::DataUnavailable { reason: e.to_string() })?;

    parse_catalog(&text)
}

/// Decide between a fetched document and the fallback. A fetch failure uses
/// the fallback when it exists and parses; otherwise the original failure
/// stands.
fn resolve(
    fetched: Result<RawCatalog, CatalogError>,
    fallback: Option<&str>,
) -> Result<RawCatalog, CatalogError> {
    match fetched {
        Ok(raw) => Ok(raw),
        Err(err) => {
            if let Some(text) = fallback {
                if let Ok(raw) = parse_catalog(text) {
                    println!("⚠️  Falling back to embedded portfolio data: {}", err);
                    return Ok(raw);
                }
            }
            Err(err)
        }
    }
}

fn parse_catalog(text: &str) -> Result<RawCatalog, CatalogError> {
    serde_json::from_str(text).map_err(|e| CatalogError::Malformed { reason: e.to_string() })
}
