/// User interface
///
/// This module handles:
/// - The page stage and per-section reveals (stage.rs, reveal.rs)
/// - Header, overlay menu and footer (shell.rs)
/// - Shared building blocks such as photos, cards and grids (widgets.rs)
/// - The hero backdrop canvas (backdrop.rs)
/// - One view per route (pages/)
use std::collections::HashMap;
use std::time::Instant;

use iced::widget::image::Handle;
use iced::Size;

use crate::config::SiteConfig;

pub mod backdrop;
pub mod pages;
pub mod reveal;
pub mod shell;
pub mod stage;
pub mod style;
pub mod widgets;

/// Height of the fixed header; inner pages pad their first section by it
pub const HEADER_HEIGHT: f32 = 80.0;

/// Everything a page view reads besides its own state
pub struct Context<'a> {
    /// Time the current frame is drawn for
    pub now: Instant,
    pub viewport: Size,
    pub config: &'a SiteConfig,
    /// Downloaded images by cache key
    pub images: &'a HashMap<String, Handle>,
}

impl Context<'_> {
    pub fn image(&self, key: &str) -> Option<&Handle> {
        self.images.get(key)
    }

    /// Grid columns for the current window width
    pub fn columns(&self) -> usize {
        stage::columns(self.viewport.width)
    }
}
