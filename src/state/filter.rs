/// Portfolio filter selection
///
/// Two-level selection: a main filter (all / wedding / event) and, only
/// while weddings are shown, a wedding tradition.
use std::fmt;

use super::data::{Category, PortfolioItem, Subcategory};

/// The main filter row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainFilter {
    #[default]
    All,
    Only(Category),
    /// A key that names no category; matches nothing
    Unmatched,
}

impl MainFilter {
    /// Buttons in display order
    pub const BUTTONS: [MainFilter; 3] = [
        MainFilter::All,
        MainFilter::Only(Category::Wedding),
        MainFilter::Only(Category::Event),
    ];

    /// Parse a filter key. Unknown keys become `Unmatched`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => MainFilter::All,
            other => Category::from_key(other)
                .map(MainFilter::Only)
                .unwrap_or(MainFilter::Unmatched),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MainFilter::All => "All Work",
            MainFilter::Only(Category::Wedding) => "Weddings",
            MainFilter::Only(Category::Event) => "Events",
            MainFilter::Unmatched => "Unknown",
        }
    }
}

impl fmt::Display for MainFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current filter selection of the portfolio page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    main: MainFilter,
    sub: Option<Subcategory>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main(&self) -> MainFilter {
        self.main
    }

    pub fn subcategory(&self) -> Option<Subcategory> {
        self.sub
    }

    /// Whether the wedding tradition row is visible
    pub fn shows_subcategories(&self) -> bool {
        self.main == MainFilter::Only(Category::Wedding)
    }

    /// Click on a main filter button. Switching to a different main filter
    /// clears the tradition; clicking the active one keeps it.
    ///
    /// Returns whether the selection changed.
    pub fn select_main(&mut self, main: MainFilter) -> bool {
        if self.main == main {
            return false;
        }
        self.main = main;
        self.sub = None;
        true
    }

    /// Click on a tradition button (`None` = "All Weddings"). Ignored unless
    /// weddings are shown.
    ///
    /// Returns whether the selection changed.
    pub fn select_subcategory(&mut self, sub: Option<Subcategory>) -> bool {
        if !self.shows_subcategories() || self.sub == sub {
            return false;
        }
        self.sub = sub;
        true
    }

    /// Whether an item passes the current selection
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self.main {
            MainFilter::All => true,
            MainFilter::Unmatched => false,
            MainFilter::Only(category) if item.category != category => false,
            MainFilter::Only(_) => match self.sub {
                None => true,
                Some(sub) => item.subcategory == Some(sub),
            },
        }
    }

    /// The visible subset, in original order
    pub fn apply<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::PORTFOLIO;

    fn ids(items: &[&PortfolioItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let filter = FilterState::new();
        assert_eq!(ids(&filter.apply(&PORTFOLIO)), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_category_is_an_order_preserving_subsequence() {
        let mut filter = FilterState::new();
        filter.select_main(MainFilter::Only(Category::Event));
        assert_eq!(ids(&filter.apply(&PORTFOLIO)), vec![2, 4, 6, 8, 12]);

        filter.select_main(MainFilter::Only(Category::Wedding));
        assert_eq!(ids(&filter.apply(&PORTFOLIO)), vec![1, 3, 5, 7, 9, 10, 11]);
    }

    #[test]
    fn test_wedding_hindu_yields_three_seven_eleven() {
        let mut filter = FilterState::new();
        filter.select_main(MainFilter::Only(Category::Wedding));
        filter.select_subcategory(Some(Subcategory::Hindu));
        assert_eq!(ids(&filter.apply(&PORTFOLIO)), vec![3, 7, 11]);
    }

    #[test]
    fn test_subcategory_never_matches_events() {
        for sub in Subcategory::ALL {
            let mut filter = FilterState::new();
            filter.select_main(MainFilter::Only(Category::Wedding));
            filter.select_subcategory(Some(sub));
            assert!(filter
                .apply(&PORTFOLIO)
                .iter()
                .all(|item| item.category == Category::Wedding && item.subcategory == Some(sub)));
        }
    }

    #[test]
    fn test_switching_away_and_back_resets_subcategory() {
        let mut filter = FilterState::new();
        filter.select_main(MainFilter::Only(Category::Wedding));
        filter.select_subcategory(Some(Subcategory::Hindu));
        filter.select_main(MainFilter::Only(Category::Event));
        filter.select_main(MainFilter::Only(Category::Wedding));

        assert_eq!(filter.subcategory(), None);
        assert_eq!(ids(&filter.apply(&PORTFOLIO)), vec![1, 3, 5, 7, 9, 10, 11]);
    }

    #[test]
    fn test_reselecting_wedding_keeps_drill_in() {
        let mut filter = FilterState::new();
        filter.select_main(MainFilter::Only(Category::Wedding));
        filter.select_subcategory(Some(Subcategory::Muslim));
        assert!(!filter.select_main(MainFilter::Only(Category::Wedding)));
        assert_eq!(filter.subcategory(), Some(Subcategory::Muslim));
    }

    #[test]
    fn test_subcategory_ignored_outside_weddings() {
        let mut filter = FilterState::new();
        assert!(!filter.select_subcategory(Some(Subcategory::Hindu)));
        filter.select_main(MainFilter::Only(Category::Event));
        assert!(!filter.select_subcategory(Some(Subcategory::Hindu)));
        assert_eq!(filter.subcategory(), None);
        assert!(!filter.shows_subcategories());
    }

    #[test]
    fn test_unknown_key_yields_empty_set() {
        let mut filter = FilterState::new();
        filter.select_main(MainFilter::from_key("portraits"));
        assert_eq!(filter.main(), MainFilter::Unmatched);
        assert!(filter.apply(&PORTFOLIO).is_empty());
    }

    #[test]
    fn test_keys_round_trip_through_parse() {
        for button in MainFilter::BUTTONS {
            let key = match button {
                MainFilter::All => "all",
                MainFilter::Only(category) => category.key(),
                MainFilter::Unmatched => unreachable!(),
            };
            assert_eq!(MainFilter::from_key(key), button);
        }
    }
}
