use image::imageops::FilterType;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Result, SiteError};

/// Longest edge of cached images
const PREVIEW_SIZE: u32 = 800;

/// Get the image cache directory
/// Returns ~/.cache/maelstrom-frames/images on Linux
pub fn cache_dir() -> Result<PathBuf> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(SiteError::NoDirectory("cache"))?;

    path.push("maelstrom-frames");
    path.push("images");
    Ok(path)
}

/// Where the cached copy of `key` lives (doesn't fetch, just returns the expected path)
pub fn cached_path(cache_dir: &Path, key: &str) -> PathBuf {
    cache_dir.join(format!("{}.jpg", sanitize(key)))
}

/// Keys become file names; keep them to a safe alphabet
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Return the cached image for `key`, downloading and downscaling `url`
/// first if it isn't cached yet
pub async fn fetch_cached(url: String, key: String, cache_dir: PathBuf) -> std::result::Result<PathBuf, Arc<SiteError>> {
    fetch_cached_inner(&url, &key, cache_dir).await.map_err(Arc::new)
}

async fn fetch_cached_inner(url: &str, key: &str, cache_dir: PathBuf) -> Result<PathBuf> {
    let path = cached_path(&cache_dir, key);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        let entry = path.clone();
        if tokio::task::spawn_blocking(move || is_decodable(&entry)).await? {
            debug!(key, "image cache hit");
            return Ok(path);
        }
        warn!("⚠️  Dropping unreadable cached image: {}", path.display());
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| SiteError::io(&path, e))?;
    }

    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;
    debug!(key, bytes = bytes.len(), "downloaded image");

    // Decoding and resizing is CPU-bound
    let target = path.clone();
    tokio::task::spawn_blocking(move || store_preview(&bytes, &target)).await??;

    info!("📸 Cached image: {}", path.display());
    Ok(path)
}

/// A cache entry counts only if it decodes completely
fn is_decodable(path: &Path) -> bool {
    image::open(path).is_ok()
}

/// Decode, downscale and save as JPEG. The file is written beside `path`
/// and renamed into place, so `path` only ever holds a finished image.
fn store_preview(bytes: &[u8], path: &Path) -> Result<()> {
    let img = image::load_from_memory(bytes)?;
    let preview = if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
        img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3)
    } else {
        img
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    let partial = path.with_extension("part");
    // JPEG has no alpha channel
    if let Err(err) = preview.to_rgb8().save_with_format(&partial, ImageFormat::Jpeg) {
        let _ = fs::remove_file(&partial);
        return Err(err.into());
    }
    fs::rename(&partial, path).map_err(|e| SiteError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_cached_path_is_sanitized() {
        let path = cached_path(Path::new("/cache"), "portfolio/1?x");
        assert_eq!(path, PathBuf::from("/cache/portfolio_1_x.jpg"));
    }

    #[test]
    fn test_store_preview_downscales_large_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images").join("big.jpg");
        store_preview(&png_bytes(1600, 1000), &path).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 800);
        assert_eq!(saved.height(), 500);
    }

    #[test]
    fn test_store_preview_keeps_small_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.jpg");
        store_preview(&png_bytes(320, 200), &path).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 320);
    }

    #[test]
    fn test_store_preview_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jpg");
        assert!(matches!(store_preview(b"not an image", &path), Err(SiteError::Image(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_store_preview_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.jpg");
        store_preview(&png_bytes(64, 64), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("part").exists());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = cached_path(dir.path(), "hero");
        store_preview(&png_bytes(40, 30), &path).unwrap();

        // The URL is never contacted when a readable copy exists
        let found = fetch_cached(
            "http://invalid.invalid/hero.jpg".to_string(),
            "hero".to_string(),
            dir.path().to_path_buf(),
        )
        .await
        .unwrap();
        assert_eq!(found, path);
        assert_eq!(image::open(&found).unwrap().width(), 40);
    }

    #[tokio::test]
    async fn test_truncated_cache_entry_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let path = cached_path(dir.path(), "portfolio-1");
        // A JPEG cut off right after its start-of-image marker
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let outcome = fetch_cached(
            "http://invalid.invalid/portfolio-1.jpg".to_string(),
            "portfolio-1".to_string(),
            dir.path().to_path_buf(),
        )
        .await;
        // Went to the network instead of serving the broken copy
        let err = outcome.unwrap_err();
        assert!(matches!(*err, SiteError::Http(_)), "{err}");
        assert!(!path.exists());
    }
}
