/// One page per route
///
/// Every page owns a `Stage` whose sections it declares top to bottom, and
/// reports the height of each section for the current window size. Dropping
/// a page drops its stage, which releases every tween it started.
use std::time::{Duration, Instant};

use iced::{Element, Point, Size};

use crate::motion::{Ease, LiveTweens, RevealSpec, VisualState};
use crate::routes::Route;
use crate::ui::stage::Stage;
use crate::ui::Context;
use crate::Message;

pub mod about;
pub mod contact;
pub mod events;
pub mod home;
pub mod portfolio;
pub mod project;
pub mod services;

use about::AboutPage;
use contact::ContactPage;
use events::EventsPage;
use home::HomePage;
use portfolio::PortfolioPage;
use project::ProjectPage;
use services::ServicesPage;

/// Inner page hero: eyebrow, title, lead
pub const HERO_SLOW: RevealSpec = RevealSpec::mount(VisualState::hidden(60.0), 1200, Ease::Power3Out, 200);
/// Shorter hero entrance for the browsing pages
pub const HERO_QUICK: RevealSpec = RevealSpec::mount(VisualState::hidden(40.0), 700, Ease::Power2Out, 100);

#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    About(AboutPage),
    Services(ServicesPage),
    Portfolio(PortfolioPage),
    Project(ProjectPage),
    Events(EventsPage),
    Contact(ContactPage),
}

impl Page {
    /// Build the page for `route` and start its mount entrances
    pub fn mount(route: Route, live: LiveTweens, now: Instant) -> Self {
        let mut page = match route {
            Route::Home => Page::Home(HomePage::new(live)),
            Route::About => Page::About(AboutPage::new(live)),
            Route::Services => Page::Services(ServicesPage::new(live)),
            Route::Portfolio => Page::Portfolio(PortfolioPage::new(live)),
            Route::Project(id) => Page::Project(ProjectPage::new(id, live)),
            Route::Events => Page::Events(EventsPage::new(live)),
            Route::Contact => Page::Contact(ContactPage::new(live)),
        };
        page.stage_mut().mount(now);
        page
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        match self {
            Page::Home(page) => page.stage(),
            Page::About(page) => page.stage(),
            Page::Services(page) => page.stage(),
            Page::Portfolio(page) => page.stage(),
            Page::Project(page) => page.stage(),
            Page::Events(page) => page.stage(),
            Page::Contact(page) => page.stage(),
        }
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        match self {
            Page::Home(page) => page.stage_mut(),
            Page::About(page) => page.stage_mut(),
            Page::Services(page) => page.stage_mut(),
            Page::Portfolio(page) => page.stage_mut(),
            Page::Project(page) => page.stage_mut(),
            Page::Events(page) => page.stage_mut(),
            Page::Contact(page) => page.stage_mut(),
        }
    }

    pub fn heights(&self, viewport: Size) -> Vec<f32> {
        match self {
            Page::Home(page) => page.heights(viewport),
            Page::About(page) => page.heights(viewport),
            Page::Services(page) => page.heights(viewport),
            Page::Portfolio(page) => page.heights(viewport),
            Page::Project(page) => page.heights(viewport),
            Page::Events(page) => page.heights(viewport),
            Page::Contact(page) => page.heights(viewport),
        }
    }

    /// Feed a scroll position (or a resize) to the scroll triggers
    pub fn observe(&mut self, scroll_y: f32, viewport: Size, now: Instant) {
        let heights = self.heights(viewport);
        if let Page::Home(home) = self {
            home.scrolled(scroll_y, viewport);
        }
        self.stage_mut().observe(&heights, scroll_y, viewport.height, now);
    }

    /// Pointer moved over the home hero
    pub fn pointer_moved(&mut self, normalized: Point) {
        if let Page::Home(home) = self {
            home.pointer_moved(normalized);
        }
    }

    /// Retire finished tweens and step the hero parallax. Returns whether
    /// another frame is needed.
    pub fn tick(&mut self, now: Instant, elapsed: Duration) -> bool {
        let animating = self.stage_mut().tick(now);
        let settling = match self {
            Page::Home(home) => home.advance(elapsed),
            _ => false,
        };
        animating || settling
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, Page::Home(home) if home.is_settling())
    }

    pub fn portfolio_mut(&mut self) -> Option<&mut PortfolioPage> {
        match self {
            Page::Portfolio(page) => Some(page),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn contact(&self) -> Option<&ContactPage> {
        match self {
            Page::Contact(page) => Some(page),
            _ => None,
        }
    }

    pub fn contact_mut(&mut self) -> Option<&mut ContactPage> {
        match self {
            Page::Contact(page) => Some(page),
            _ => None,
        }
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        match self {
            Page::Home(page) => page.view(ctx),
            Page::About(page) => page.view(ctx),
            Page::Services(page) => page.view(ctx),
            Page::Portfolio(page) => page.view(ctx),
            Page::Project(page) => page.view(ctx),
            Page::Events(page) => page.view(ctx),
            Page::Contact(page) => page.view(ctx),
        }
    }
}
