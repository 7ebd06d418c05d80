/// Grid thumbnail generation
///
/// Fetched portfolio images are downscaled once and kept in memory for the
/// card grid; the lightbox fetches the full asset separately.
use image::imageops::FilterType;
use image::GenericImageView;

/// Size of generated thumbnails (bounding box edge)
const THUMBNAIL_SIZE: u32 = 256;

/// Decoded RGBA pixels sized for an iced image handle.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Downscale image bytes to grid size, preserving aspect ratio.
/// CPU-bound; callers run it on a blocking task.
pub fn make_thumbnail(bytes: &[u8]) -> Result<Thumbnail, String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    // resize() would upscale anything smaller than the box
    let resized = if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
    } else {
        img
    };
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Thumbnail {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Fetch an asset and downscale it, in one task-friendly future.
pub async fn fetch_thumbnail(url: String) -> Result<Thumbnail, String> {
    let bytes = super::fetch::fetch_asset(url).await?;

    tokio::task::spawn_blocking(move || make_thumbnail(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgba8(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_thumbnails_fit_the_bounding_box() {
        let thumb = make_thumbnail(&png_bytes(1024, 512)).unwrap();
        assert_eq!(thumb.width, 256);
        assert_eq!(thumb.height, 128);
        assert_eq!(thumb.rgba.len(), (thumb.width * thumb.height * 4) as usize);
    }

    #[test]
    fn test_small_images_are_not_upscaled() {
        let thumb = make_thumbnail(&png_bytes(64, 64)).unwrap();
        assert_eq!(thumb.width, 64);
        assert_eq!(thumb.height, 64);
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        assert!(make_thumbnail(b"definitely not an image").is_err());
    }
}
