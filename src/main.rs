use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use iced::keyboard::{self, key, Key};
use iced::widget::image::Handle;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{column, scrollable, stack};
use iced::{window, Element, Length, Point, Size, Subscription, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod config;
mod content;
mod error;
mod media;
mod motion;
mod routes;
mod state;
mod ui;

use config::SiteConfig;
use error::SiteError;
use media::thumbnail;
use motion::LiveTweens;
use routes::Route;
use state::catalog;
use state::contact::{EventType, Field, Receipt, Ticket};
use state::data::Subcategory;
use state::delivery::{self, Delivery};
use state::filter::MainFilter;
use state::navigation::{NavState, ScrollAction};
use ui::pages::Page;
use ui::{shell, style, Context};

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A header, overlay, card or button link
    Navigate(Route),
    ToggleMenu,
    /// Close control, backdrop click or Escape
    CloseMenu,
    Scrolled(Viewport),
    /// Animation frame while anything is moving
    Frame(Instant),
    Resized(Size),
    /// Pointer over the home hero, normalized to 0..1
    Pointer(Point),
    Filter(MainFilter),
    /// `None` is "All Weddings"
    SubFilter(Option<Subcategory>),
    FieldChanged(Field, String),
    EventTypePicked(EventType),
    Submit,
    /// Delivery outcome for the submission that issued the ticket
    Submitted(Ticket, Result<Receipt, Arc<SiteError>>),
    /// A remote image landed in the cache (or failed to)
    ImageReady(String, Result<PathBuf, Arc<SiteError>>),
}

/// Main application state
struct MaelstromFrames {
    config: SiteConfig,
    route: Route,
    page: Page,
    nav: NavState,
    /// Tweens in flight across the whole app; drives the frame subscription
    live: LiveTweens,
    /// Time the view samples animations at
    now: Instant,
    /// Previous frame, while the hero parallax is settling
    last_frame: Option<Instant>,
    viewport: Size,
    scroll_y: f32,
    delivery: Delivery,
    images: HashMap<String, Handle>,
}

fn page_scroll() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl MaelstromFrames {
    fn new(config: SiteConfig, route: Route) -> (Self, Task<Message>) {
        let viewport = Size::new(1280.0, 860.0);
        let now = Instant::now();
        let live = LiveTweens::new();

        let delivery = config.delivery().unwrap_or_else(|err| {
            warn!("⚠️  Outbox unavailable ({}), inquiries will be simulated", err);
            Delivery::Simulated {
                delay: config.submission_delay(),
            }
        });

        let mut page = Page::mount(route, live.clone(), now);
        page.observe(0.0, viewport, now);
        let nav = NavState::new(config.scroll_threshold_px, config.mobile_breakpoint_px, viewport.width);

        let mut tasks = vec![window::get_latest()
            .and_then(window::get_size)
            .map(Message::Resized)];
        if config.fetch_images {
            tasks.extend(fetch_images());
        }

        info!(route = %route.path(), delivery = ?delivery, "🎨 Maelstrom Frames ready");
        (
            MaelstromFrames {
                config,
                route,
                page,
                nav,
                live,
                now,
                last_frame: None,
                viewport,
                scroll_y: 0.0,
                delivery,
                images: HashMap::new(),
            },
            Task::batch(tasks),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Navigate(route) => {
                self.nav.activate_link();
                debug!(from = %self.route.path(), to = %route.path(), "navigate");
                self.route = route;
                self.now = now;
                self.scroll_y = 0.0;
                // The old page's tweens are released as it drops
                self.page = Page::mount(route, self.live.clone(), now);
                self.page.observe(0.0, self.viewport, now);
                return scrollable::scroll_to(page_scroll(), AbsoluteOffset { x: 0.0, y: 0.0 });
            }
            Message::ToggleMenu => self.nav.toggle_menu(),
            Message::CloseMenu => self.nav.close_menu(),
            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset().y;
                match self.nav.on_scroll(offset) {
                    ScrollAction::Restore(y) => {
                        return scrollable::scroll_to(page_scroll(), AbsoluteOffset { x: 0.0, y });
                    }
                    ScrollAction::Hold => return Task::none(),
                    ScrollAction::Follow => {}
                }
                self.scroll_y = offset;
                self.now = now;
                self.page.observe(offset, self.viewport, now);
            }
            Message::Frame(at) => {
                let elapsed = self.last_frame.map(|last| at - last).unwrap_or_default();
                self.now = at;
                let moving = self.page.tick(at, elapsed);
                self.last_frame = moving.then_some(at);
            }
            Message::Resized(size) => {
                self.viewport = size;
                self.now = now;
                self.nav.on_resize(size.width);
                self.page.observe(self.scroll_y, size, now);
            }
            Message::Pointer(position) => self.page.pointer_moved(position),
            Message::Filter(main) => {
                if let Some(portfolio) = self.page.portfolio_mut() {
                    self.now = now;
                    portfolio.select_main(main, now);
                }
            }
            Message::SubFilter(sub) => {
                if let Some(portfolio) = self.page.portfolio_mut() {
                    self.now = now;
                    portfolio.select_subcategory(sub, now);
                }
            }
            Message::FieldChanged(field, value) => {
                if let Some(contact) = self.page.contact_mut() {
                    contact.form_mut().edit(field, value);
                }
            }
            Message::EventTypePicked(event_type) => {
                if let Some(contact) = self.page.contact_mut() {
                    contact.form_mut().pick_event_type(event_type);
                }
            }
            Message::Submit => {
                let Some(contact) = self.page.contact_mut() else {
                    return Task::none();
                };
                match contact.form_mut().begin_submit(Utc::now()) {
                    Ok((ticket, inquiry)) => {
                        info!(%ticket, event_type = %inquiry.event_type, "📨 Sending inquiry");
                        return Task::perform(
                            delivery::deliver(self.delivery.clone(), inquiry),
                            move |outcome| Message::Submitted(ticket, outcome),
                        );
                    }
                    Err(err) => debug!("submit refused: {}", err),
                }
            }
            Message::Submitted(ticket, outcome) => {
                let applied = self
                    .page
                    .contact_mut()
                    .is_some_and(|contact| contact.form_mut().finish_submit(ticket, &outcome));
                if !applied {
                    debug!(%ticket, "inquiry finished after its form was left");
                }
            }
            Message::ImageReady(key, Ok(path)) => {
                self.images.insert(key, Handle::from_path(path));
            }
            Message::ImageReady(key, Err(err)) => {
                warn!("⚠️  Image {} unavailable: {}", key, err);
            }
        }
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let ctx = Context {
            now: self.now,
            viewport: self.viewport,
            config: &self.config,
            images: &self.images,
        };

        let page = scrollable(column![self.page.view(&ctx), shell::footer(&self.config)])
            .id(page_scroll())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![page, shell::header(self.route, &self.nav, &self.config)];
        if self.nav.menu_open() {
            layers = layers.push(shell::overlay(self.route));
        }
        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = if self.live.count() > 0 || self.page.is_settling() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };
        Subscription::batch([
            frames,
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
            keyboard::on_key_press(|key, _modifiers| match key {
                Key::Named(key::Named::Escape) => Some(Message::CloseMenu),
                _ => None,
            }),
        ])
    }

    fn theme(&self) -> Theme {
        style::theme()
    }
}

/// One download task per remote image not yet cached
fn fetch_images() -> Vec<Task<Message>> {
    let cache_dir = match thumbnail::cache_dir() {
        Ok(dir) => dir,
        Err(err) => {
            warn!("⚠️  No image cache: {}", err);
            return Vec::new();
        }
    };

    let hero = (catalog::HERO.key.to_string(), catalog::HERO.url);
    let projects = catalog::PORTFOLIO.iter().map(|item| (item.image_key(), item.image));
    std::iter::once(hero)
        .chain(projects)
        .map(|(key, url)| {
            let done = key.clone();
            Task::perform(
                thumbnail::fetch_cached(url.to_string(), key, cache_dir.clone()),
                move |result| Message::ImageReady(done.clone(), result),
            )
        })
        .collect()
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> iced::Result {
    let config = match SiteConfig::default_path() {
        Ok(path) => SiteConfig::load_or_default(&path),
        Err(_) => SiteConfig::default(),
    };
    init_tracing(&config.log_filter);

    // Optional start page, e.g. `maelstrom-frames /portfolio/3`
    let route = std::env::args()
        .nth(1)
        .and_then(|path| Route::parse(&path))
        .unwrap_or(Route::Home);

    iced::application("Maelstrom Frames", MaelstromFrames::update, MaelstromFrames::view)
        .subscription(MaelstromFrames::subscription)
        .theme(MaelstromFrames::theme)
        .window_size(Size::new(1280.0, 860.0))
        .centered()
        .run_with(move || MaelstromFrames::new(config, route))
}
