/// Remote imagery
///
/// This module handles:
/// - Downloading portfolio and hero images
/// - Downscaling them for display
/// - Caching the results on disk

pub mod thumbnail;
