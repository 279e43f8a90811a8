/// Page routes
use std::fmt;

/// Every page the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Portfolio,
    /// `/portfolio/<id>`
    Project(u32),
    Events,
    Contact,
}

/// Header and overlay links, in display order
pub const NAV_LINKS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Portfolio, "Portfolio"),
    (Route::Events, "Events"),
    (Route::Contact, "Contact"),
];

impl Route {
    /// Parse a path such as `/portfolio/3`. A trailing slash is accepted.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        match trimmed {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/services" => Some(Route::Services),
            "/portfolio" => Some(Route::Portfolio),
            "/events" => Some(Route::Events),
            "/contact" => Some(Route::Contact),
            other => other
                .strip_prefix("/portfolio/")
                .and_then(|id| id.parse().ok())
                .map(Route::Project),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Project(id) => format!("/portfolio/{id}"),
            Route::Events => "/events".to_string(),
            Route::Contact => "/contact".to_string(),
        }
    }

    pub fn is_home(&self) -> bool {
        *self == Route::Home
    }

    /// Whether a header link for `link` is highlighted on this route
    pub fn highlights(&self, link: Route) -> bool {
        match (self, link) {
            (Route::Project(_), Route::Portfolio) => true,
            (current, link) => *current == link,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/services/"), Some(Route::Services));
        assert_eq!(Route::parse("/portfolio"), Some(Route::Portfolio));
        assert_eq!(Route::parse("/portfolio/11"), Some(Route::Project(11)));
        assert_eq!(Route::parse("/events"), Some(Route::Events));
        assert_eq!(Route::parse("/contact"), Some(Route::Contact));
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/blog"), None);
        assert_eq!(Route::parse("/portfolio/abc"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_path_round_trip() {
        for (route, _) in NAV_LINKS {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse(&Route::Project(4).path()), Some(Route::Project(4)));
    }

    #[test]
    fn test_project_highlights_portfolio_link() {
        assert!(Route::Project(2).highlights(Route::Portfolio));
        assert!(!Route::About.highlights(Route::Portfolio));
    }
}
