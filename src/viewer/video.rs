/// YouTube URL parsing and embed construction
///
/// Portfolio entries may carry a video URL in any of the common shapes
/// (watch, embed, `v/`, shorts, short-link). Anything unrecognizable is not
/// an error; the caller falls back to image display.
use once_cell::sync::Lazy;
use regex::Regex;
use url::form_urlencoded;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|v/|shorts/))([\w-]{11})")
        .expect("video id pattern is valid")
});

/// Display-context inputs for embed construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedOptions {
    /// When set, autoplay is omitted from embed URLs.
    pub reduced_motion: bool,
    /// Origin of the catalog's host, present only for http(s) sources.
    pub page_origin: Option<String>,
}

/// Extract the 11-character video id from a supported YouTube URL shape.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Build a privacy-respecting embed URL for a video link, or `None` when the
/// link is not a recognizable YouTube URL.
pub fn youtube_embed_url(url: &str, options: &EmbedOptions) -> Option<String> {
    let id = youtube_video_id(url)?;

    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("rel", "0");
    params.append_pair("modestbranding", "1");
    params.append_pair("playsinline", "1");
    if !options.reduced_motion {
        params.append_pair("autoplay", "1");
    }
    if let Some(origin) = &options.page_origin {
        params.append_pair("origin", origin);
    }

    Some(format!(
        "https://www.youtube-nocookie.com/embed/{}?{}",
        id,
        params.finish()
    ))
}
