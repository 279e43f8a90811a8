/// Shared data structures for the application state
///
/// These types describe the portfolio as the pages display it. Items are
/// immutable and compiled in (see catalog.rs).
use std::fmt;

/// Main portfolio category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wedding,
    Event,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Wedding => "wedding",
            Category::Event => "event",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "wedding" => Some(Category::Wedding),
            "event" => Some(Category::Event),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Wedding => "Wedding",
            Category::Event => "Event",
        })
    }
}

/// Wedding tradition (only weddings carry one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcategory {
    Hindu,
    Muslim,
    Christian,
}

impl Subcategory {
    pub const ALL: [Subcategory; 3] = [Subcategory::Hindu, Subcategory::Muslim, Subcategory::Christian];

    pub fn key(self) -> &'static str {
        match self {
            Subcategory::Hindu => "hindu",
            Subcategory::Muslim => "muslim",
            Subcategory::Christian => "christian",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Subcategory::ALL.into_iter().find(|sub| sub.key() == key)
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Subcategory::Hindu => "Hindu Wedding",
            Subcategory::Muslim => "Muslim Wedding",
            Subcategory::Christian => "Christian Wedding",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Subcategory::Hindu => "Hindu",
            Subcategory::Muslim => "Muslim",
            Subcategory::Christian => "Christian",
        })
    }
}

/// Whether a project was delivered as stills or film
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Photo,
    Video,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MediaType::Photo => "Photo",
            MediaType::Video => "Video",
        })
    }
}

/// A single project in the portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioItem {
    /// Unique id, also the `/portfolio/<id>` path segment
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub location: &'static str,
    /// Display label such as "June 2024" (never parsed)
    pub date: &'static str,
    /// Remote image URL
    pub image: &'static str,
    pub media_type: MediaType,
    /// Shown as a large card on the home page
    pub featured: bool,
}

impl PortfolioItem {
    /// Key used for the image cache
    pub fn image_key(&self) -> String {
        format!("portfolio-{}", self.id)
    }
}

/// A remote image used outside the portfolio (page heroes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub key: &'static str,
    pub url: &'static str,
}
