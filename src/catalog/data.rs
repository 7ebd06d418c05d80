/// Catalog data structures and normalization
///
/// The raw catalog document is untrusted: fields may be missing, wrong-typed
/// or unsafe. Everything is validated once here, at the normalization
/// boundary, and the rest of the application only ever sees the strict
/// [`CatalogItem`] type.
use serde::Deserialize;
use serde_json::Value;

use super::sanitize::{safe_asset_url, safe_srcset};

/// Number of entries shown on the featured strip.
pub const FEATURED_COUNT: usize = 3;

/// The catalog document as fetched: two sequences of loosely-typed records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub galleries: Vec<Value>,
}

/// A single displayable portfolio unit, fully sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub title: String,
    pub description: String,
    /// Filter key matched against the category bar ("all" matches everything).
    pub category: String,
    /// Display tags; order matters.
    pub tags: Vec<String>,
    pub alt: String,
    /// Sanitized primary image URL. Empty only for gallery items whose
    /// gallery has no images, which are dropped before rendering.
    pub image: String,
    /// Sanitized responsive candidates, may be empty.
    pub image_srcset: String,
    pub video_url: Option<String>,
    /// True when this entry collapses a multi-image gallery into one card.
    pub is_gallery: bool,
    /// Populated only when `is_gallery` is true.
    pub gallery_images: Vec<String>,
}

impl CatalogItem {
    /// An entry with neither an image nor gallery images cannot be rendered.
    pub fn is_renderable(&self) -> bool {
        !self.image.is_empty() || !self.gallery_images.is_empty()
    }
}

/// Normalize a raw catalog into the flat, ordered item list.
///
/// Sanitized items come first, followed by the expanded galleries, each group
/// keeping its relative order. Entries that fail the renderability invariant
/// are dropped here and never reach the UI.
pub fn normalize(raw: &RawCatalog) -> Vec<CatalogItem> {
    let mut items: Vec<CatalogItem> = raw.items.iter().map(item_from_record).collect();
    items.extend(raw.galleries.iter().map(gallery_item_from_record));

    let before = items.len();
    items.retain(CatalogItem::is_renderable);
    let dropped = before - items.len();
    if dropped > 0 {
        println!("⚠️  Dropped {} catalog entries with no displayable image", dropped);
    }

    items
}

/// The slice shown on the featured strip: the first entries of the same
/// normalized list the grid uses, so lightbox indices stay consistent.
pub fn featured(items: &[CatalogItem]) -> &[CatalogItem] {
    &items[..items.len().min(FEATURED_COUNT)]
}

fn item_from_record(record: &Value) -> CatalogItem {
    let title = str_field(record, "title");
    let srcset_source = {
        let srcset = str_field(record, "imageSrcset");
        if srcset.is_empty() {
            str_field(record, "image")
        } else {
            srcset
        }
    };
    let alt = {
        let alt = str_field(record, "alt");
        if alt.is_empty() {
            title.clone()
        } else {
            alt
        }
    };

    CatalogItem {
        description: str_field(record, "description"),
        category: str_field(record, "category"),
        tags: str_seq(record, "tags"),
        image: safe_asset_url(&str_field(record, "image")),
        image_srcset: safe_srcset(&srcset_source),
        video_url: opt_str_field(record, "videoUrl"),
        is_gallery: false,
        gallery_images: Vec::new(),
        title,
        alt,
    }
}

/// Collapse a gallery record into exactly one grid item. The card shows the
/// gallery's first image; the full image list rides along for the lightbox.
fn gallery_item_from_record(record: &Value) -> CatalogItem {
    let images: Vec<String> = str_seq(record, "images")
        .iter()
        .map(|url| safe_asset_url(url))
        .collect();
    let first_image = images.first().cloned().unwrap_or_default();

    let raw_title = str_field(record, "title");
    let title = if raw_title.is_empty() {
        "Project Gallery".to_owned()
    } else {
        raw_title.clone()
    };
    let alt_subject = if raw_title.is_empty() { "Project" } else { raw_title.as_str() };

    let category = {
        let category = str_field(record, "category");
        if category.is_empty() {
            "residential".to_owned()
        } else {
            category
        }
    };

    CatalogItem {
        description: str_field(record, "description"),
        alt: format!("{} gallery preview", alt_subject),
        image: first_image.clone(),
        image_srcset: first_image,
        tags: vec!["Residential".to_owned(), "Gallery".to_owned()],
        video_url: None,
        is_gallery: true,
        gallery_images: images,
        title,
        category,
    }
}

fn str_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn opt_str_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn str_seq(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
