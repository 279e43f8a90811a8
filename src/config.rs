/// Site configuration
///
/// Read once at startup from `config.json` in the user's config directory
/// (or the path in `MAELSTROM_FRAMES_CONFIG`). Every field has a default, so
/// a missing or partial file is fine.
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SiteError};
use crate::state::delivery::Delivery;
use crate::state::outbox::Outbox;

pub const CONFIG_ENV: &str = "MAELSTROM_FRAMES_CONFIG";

/// Which delivery submitted inquiries use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    #[default]
    Simulated,
    Outbox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub studio_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub studio_location: String,
    pub delivery: DeliveryMode,
    /// Time a submission spends in "submitting"
    pub submission_delay_ms: u64,
    /// Outbox location; defaults to the user data directory
    pub outbox_path: Option<PathBuf>,
    /// Scroll offset after which the header turns solid
    pub scroll_threshold_px: f32,
    /// Window width below which the overlay menu replaces header links
    pub mobile_breakpoint_px: f32,
    /// Download and cache remote imagery
    pub fetch_images: bool,
    /// Used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            studio_name: "Maelstrom Frames".to_string(),
            contact_email: "hello@maelstromframes.com".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            studio_location: "New York, USA".to_string(),
            delivery: DeliveryMode::Simulated,
            submission_delay_ms: 1500,
            outbox_path: None,
            scroll_threshold_px: 50.0,
            mobile_breakpoint_px: 1024.0,
            fetch_images: true,
            log_filter: "info,maelstrom_frames=debug".to_string(),
        }
    }
}

impl SiteConfig {
    /// Config file location: `$MAELSTROM_FRAMES_CONFIG`, else
    /// `<config_dir>/maelstrom-frames/config.json`
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let mut path = dirs::config_dir().ok_or(SiteError::NoDirectory("config"))?;
        path.push("maelstrom-frames");
        path.push("config.json");
        Ok(path)
    }

    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load `path`, falling back to defaults if it is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(SiteError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                warn!("⚠️  Ignoring config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    #[cfg(test)]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| SiteError::io(path, e))
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    /// Build the delivery the form should use
    pub fn delivery(&self) -> Result<Delivery> {
        let delay = self.submission_delay();
        match self.delivery {
            DeliveryMode::Simulated => Ok(Delivery::Simulated { delay }),
            DeliveryMode::Outbox => {
                let db_path = match &self.outbox_path {
                    Some(path) => path.clone(),
                    None => Outbox::default_path()?,
                };
                Ok(Delivery::Outbox { db_path, delay })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.submission_delay(), Duration::from_millis(1500));
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(
            config.delivery().unwrap(),
            Delivery::Simulated {
                delay: Duration::from_millis(1500)
            }
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "delivery": "outbox", "outbox_path": "/tmp/mf.db", "fetch_images": false }"#)
            .unwrap();

        let config = SiteConfig::load_or_default(&path);
        assert_eq!(config.delivery, DeliveryMode::Outbox);
        assert!(!config.fetch_images);
        assert_eq!(config.studio_name, "Maelstrom Frames");
        assert_eq!(
            config.delivery().unwrap(),
            Delivery::Outbox {
                db_path: PathBuf::from("/tmp/mf.db"),
                delay: Duration::from_millis(1500)
            }
        );
    }

    #[test]
    fn test_missing_or_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(SiteConfig::load_or_default(&missing), SiteConfig::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(SiteConfig::load(&broken).is_err());
        assert_eq!(SiteConfig::load_or_default(&broken), SiteConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.json");
        let config = SiteConfig {
            studio_name: "Test Studio".to_string(),
            submission_delay_ms: 10,
            ..SiteConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(SiteConfig::load(&path).unwrap(), config);
    }
}
