/// Lightbox navigation state machine
///
/// A session is an explicit value owned by the application state and passed
/// into the operations below; there are no ambient globals. All transitions
/// are synchronous and pure, so the whole machine is testable without a UI
/// runtime.
use crate::catalog::CatalogItem;

use super::video::{youtube_embed_url, EmbedOptions};

/// One entry in the active navigation set.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigableEntry {
    /// A top-level catalog item, navigated in grid order.
    Item(CatalogItem),
    /// A synthesized per-image entry from an expanded gallery.
    GalleryImage {
        title: String,
        description: String,
        image: String,
        alt: String,
        gallery_title: String,
    },
}

impl NavigableEntry {
    pub fn title(&self) -> &str {
        match self {
            NavigableEntry::Item(item) => &item.title,
            NavigableEntry::GalleryImage { title, .. } => title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            NavigableEntry::Item(item) => &item.description,
            NavigableEntry::GalleryImage { description, .. } => description,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            NavigableEntry::Item(item) => &item.image,
            NavigableEntry::GalleryImage { image, .. } => image,
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            NavigableEntry::Item(item) => {
                if item.alt.is_empty() {
                    &item.title
                } else {
                    &item.alt
                }
            }
            NavigableEntry::GalleryImage { alt, .. } => alt,
        }
    }

    pub fn video_url(&self) -> Option<&str> {
        match self {
            NavigableEntry::Item(item) => item.video_url.as_deref(),
            NavigableEntry::GalleryImage { .. } => None,
        }
    }
}

/// How the active entry should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Everything the presentation layer needs to draw the active entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayload {
    pub media_kind: MediaKind,
    pub image_url: String,
    pub video_embed_url: Option<String>,
    /// Original watch URL, for the "watch on YouTube" affordance.
    pub video_link: Option<String>,
    pub title: String,
    pub description: String,
    pub alt: String,
}

/// The lightbox session: closed, or open over an ordered navigation set.
///
/// Invariant while open: `index < entries.len()`. The public operations
/// preserve it; `open` always produces at least one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerSession {
    #[default]
    Closed,
    Open {
        entries: Vec<NavigableEntry>,
        index: usize,
    },
}

impl ViewerSession {
    /// Open the session on an activated item.
    ///
    /// Galleries with at least one image expand into per-image entries
    /// starting at the first. Anything else navigates the supplied context
    /// list, seeded at the first entry whose title matches the activated
    /// item; no match clamps to the start. Prior session state is replaced
    /// wholesale before any render can observe it.
    pub fn open(&mut self, item: &CatalogItem, context: &[CatalogItem]) {
        if item.is_gallery && !item.gallery_images.is_empty() {
            let count = item.gallery_images.len();
            let entries = item
                .gallery_images
                .iter()
                .enumerate()
                .map(|(position, image)| NavigableEntry::GalleryImage {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    image: image.clone(),
                    alt: format!("{} - Image {} of {}", item.title, position + 1, count),
                    gallery_title: item.title.clone(),
                })
                .collect();
            *self = ViewerSession::Open { entries, index: 0 };
            return;
        }

        let entries: Vec<NavigableEntry> = if context.is_empty() {
            vec![NavigableEntry::Item(item.clone())]
        } else {
            context.iter().cloned().map(NavigableEntry::Item).collect()
        };
        let index = context
            .iter()
            .position(|other| other.title == item.title)
            .unwrap_or(0);

        *self = ViewerSession::Open { entries, index };
    }

    /// Move one entry in either direction, wrapping at both ends.
    /// No-op while closed.
    pub fn step(&mut self, direction: i32) {
        if let ViewerSession::Open { entries, index } = self {
            if entries.is_empty() {
                return;
            }
            let len = entries.len() as i64;
            *index = (*index as i64 + i64::from(direction)).rem_euclid(len) as usize;
        }
    }

    pub fn close(&mut self) {
        *self = ViewerSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ViewerSession::Open { .. })
    }

    /// The entry currently in view, if any.
    pub fn active(&self) -> Option<&NavigableEntry> {
        match self {
            ViewerSession::Closed => None,
            ViewerSession::Open { entries, index } => entries.get(*index),
        }
    }

    /// Produce the render instruction for the current state. Pure; `None`
    /// while closed. A video URL that cannot be resolved degrades silently
    /// to image display.
    pub fn render(&self, options: &EmbedOptions) -> Option<DisplayPayload> {
        let ViewerSession::Open { entries, index } = self else {
            return None;
        };
        let entry = entries.get(*index)?;

        let video_link = entry.video_url().map(str::to_owned);
        let video_embed_url = entry
            .video_url()
            .and_then(|url| youtube_embed_url(url, options));
        let media_kind = if video_embed_url.is_some() {
            MediaKind::Video
        } else {
            MediaKind::Image
        };

        // Gallery images get a position counter in the title when there is
        // anything to count.
        let title = match entry {
            NavigableEntry::GalleryImage { gallery_title, .. } if entries.len() > 1 => {
                format!("{} ({} / {})", gallery_title, *index + 1, entries.len())
            }
            _ => entry.title().to_owned(),
        };

        Some(DisplayPayload {
            media_kind,
            image_url: entry.image().to_owned(),
            video_embed_url,
            video_link,
            title,
            description: entry.description().to_owned(),
            alt: entry.alt().to_owned(),
        })
    }
}
