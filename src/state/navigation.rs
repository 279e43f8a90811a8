/// Navigation shell state
///
/// The header switches between a transparent treatment over the home hero
/// and a solid bar. Narrow windows get a full-window overlay menu that locks
/// the page scroll while it is open.
use crate::routes::Route;

/// How the header is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    /// Over the home hero, before the visitor scrolls
    Transparent,
    Solid,
}

/// What the page should do with a scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    /// Take the new offset
    Follow,
    /// Locked, and already where it was pinned
    Hold,
    /// Locked: put the page back at this offset
    Restore(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    threshold: f32,
    breakpoint: f32,
    menu_open: bool,
    scroll_locked: bool,
    scrolled: bool,
    narrow: bool,
    /// Last offset the page was allowed to take
    offset_y: f32,
}

impl NavState {
    pub fn new(threshold: f32, breakpoint: f32, window_width: f32) -> Self {
        Self {
            threshold,
            breakpoint,
            menu_open: false,
            scroll_locked: false,
            scrolled: false,
            narrow: window_width < breakpoint,
            offset_y: 0.0,
        }
    }

    /// The page scrolled to `offset_y`. While the overlay holds the scroll
    /// lock the page stays pinned where it was when the menu opened.
    pub fn on_scroll(&mut self, offset_y: f32) -> ScrollAction {
        if self.scroll_locked {
            return if (offset_y - self.offset_y).abs() > f32::EPSILON {
                ScrollAction::Restore(self.offset_y)
            } else {
                ScrollAction::Hold
            };
        }
        self.offset_y = offset_y;
        self.scrolled = offset_y > self.threshold;
        ScrollAction::Follow
    }

    /// Record a window width change. Leaving the narrow layout closes the
    /// overlay (it no longer exists there).
    pub fn on_resize(&mut self, width: f32) {
        self.narrow = width < self.breakpoint;
        if !self.narrow {
            self.close_menu();
        }
    }

    pub fn treatment(&self, route: Route) -> Treatment {
        if self.scrolled || !route.is_home() {
            Treatment::Solid
        } else {
            Treatment::Transparent
        }
    }

    /// Menu button. Does nothing on wide windows.
    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else if self.narrow {
            self.menu_open = true;
            self.scroll_locked = true;
        }
    }

    /// Close control, backdrop, Escape
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.scroll_locked = false;
    }

    /// A route link was activated (header or overlay). The new page starts
    /// at the top.
    pub fn activate_link(&mut self) {
        self.close_menu();
        self.scrolled = false;
        self.offset_y = 0.0;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[cfg(test)]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }
}
