/// The compiled-in portfolio and hero imagery
use super::data::{Asset, Category, MediaType, PortfolioItem, Subcategory};

const GARDEN: &str = "https://images.unsplash.com/photo-1519741497674-611481863552?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const STAGE: &str = "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const CEREMONY: &str = "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const FESTIVAL: &str = "https://images.unsplash.com/photo-1478147427282-58a87a120781?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const RECEPTION: &str = "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const LAUNCH: &str = "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
const CONFERENCE: &str = "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Full-width hero background shared by the landing and inner pages
pub const HERO: Asset = Asset {
    key: "hero",
    url: "https://images.unsplash.com/photo-1519741497674-611481863552?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
};

/// Every project, in display order
pub static PORTFOLIO: [PortfolioItem; 12] = [
    PortfolioItem {
        id: 1,
        title: "Elegant Garden Wedding",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Christian),
        location: "Tuscany, Italy",
        date: "June 2024",
        image: GARDEN,
        media_type: MediaType::Photo,
        featured: true,
    },
    PortfolioItem {
        id: 2,
        title: "Corporate Annual Meeting",
        category: Category::Event,
        subcategory: None,
        location: "New York, USA",
        date: "May 2024",
        image: STAGE,
        media_type: MediaType::Video,
        featured: false,
    },
    PortfolioItem {
        id: 3,
        title: "Traditional Hindu Ceremony",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Hindu),
        location: "Mumbai, India",
        date: "April 2024",
        image: CEREMONY,
        media_type: MediaType::Photo,
        featured: true,
    },
    PortfolioItem {
        id: 4,
        title: "Music Festival Coverage",
        category: Category::Event,
        subcategory: None,
        location: "Coachella, USA",
        date: "March 2024",
        image: FESTIVAL,
        media_type: MediaType::Video,
        featured: false,
    },
    PortfolioItem {
        id: 5,
        title: "Beautiful Nikah Ceremony",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Muslim),
        location: "Dubai, UAE",
        date: "February 2024",
        image: RECEPTION,
        media_type: MediaType::Photo,
        featured: false,
    },
    PortfolioItem {
        id: 6,
        title: "Product Launch Event",
        category: Category::Event,
        subcategory: None,
        location: "San Francisco, USA",
        date: "January 2024",
        image: LAUNCH,
        media_type: MediaType::Video,
        featured: false,
    },
    PortfolioItem {
        id: 7,
        title: "Grand Hindu Wedding",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Hindu),
        location: "Delhi, India",
        date: "December 2023",
        image: GARDEN,
        media_type: MediaType::Photo,
        featured: false,
    },
    PortfolioItem {
        id: 8,
        title: "Conference Documentation",
        category: Category::Event,
        subcategory: None,
        location: "London, UK",
        date: "November 2023",
        image: CONFERENCE,
        media_type: MediaType::Video,
        featured: false,
    },
    PortfolioItem {
        id: 9,
        title: "Elegant Christian Wedding",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Christian),
        location: "Bali, Indonesia",
        date: "October 2023",
        image: RECEPTION,
        media_type: MediaType::Photo,
        featured: false,
    },
    PortfolioItem {
        id: 10,
        title: "Muslim Wedding Celebration",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Muslim),
        location: "Kuala Lumpur, Malaysia",
        date: "September 2023",
        image: GARDEN,
        media_type: MediaType::Photo,
        featured: false,
    },
    PortfolioItem {
        id: 11,
        title: "Hindu Wedding Festivities",
        category: Category::Wedding,
        subcategory: Some(Subcategory::Hindu),
        location: "Bangalore, India",
        date: "August 2023",
        image: CEREMONY,
        media_type: MediaType::Video,
        featured: false,
    },
    PortfolioItem {
        id: 12,
        title: "Corporate Gala",
        category: Category::Event,
        subcategory: None,
        location: "Paris, France",
        date: "July 2023",
        image: CONFERENCE,
        media_type: MediaType::Photo,
        featured: false,
    },
];

/// Look up a project by id
pub fn find(id: u32) -> Option<&'static PortfolioItem> {
    PORTFOLIO.iter().find(|item| item.id == id)
}

/// The six projects shown on the landing page
pub fn highlights() -> &'static [PortfolioItem] {
    &PORTFOLIO[..6]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = PORTFOLIO.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_only_weddings_carry_a_subcategory() {
        for item in PORTFOLIO.iter() {
            assert_eq!(item.subcategory.is_some(), item.category == Category::Wedding, "{}", item.title);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find(7).map(|item| item.title), Some("Grand Hindu Wedding"));
        assert!(find(99).is_none());
    }

    #[test]
    fn test_highlights_lead_with_featured() {
        let featured: Vec<u32> = highlights().iter().filter(|i| i.featured).map(|i| i.id).collect();
        assert_eq!(featured, vec![1, 3]);
    }
}
