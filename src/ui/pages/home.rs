use std::time::Duration;

use iced::widget::{canvas, column, container, row, stack};
use iced::{Alignment, Element, Length, Point, Size};

use crate::content::{STATS, SERVICES, TAGLINE, TESTIMONIALS, WHY_CHOOSE_US};
use crate::motion::parallax::pointer_offset;
use crate::motion::{Cue, Ease, LiveTweens, Parallax, RevealSpec, TriggerBand, VisualState};
use crate::routes::Route;
use crate::state::catalog::{self, HERO};
use crate::state::data::PortfolioItem;
use crate::ui::backdrop::HeroBackdrop;
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, grid_height, Section, Stage};
use crate::ui::style::{self, GOLD, IVORY, MUTED};
use crate::ui::widgets::{
    band, grid, heading, photo, point_card, project_card, route_button, testimonial_card, titled_height,
    BAND_PADDING, BLOCK_SPACING, GUTTER,
};
use crate::ui::Context;
use crate::Message;

/// Badge, heading, subheading, then the two buttons 150 ms apart
const HERO_CUES: &[Cue] = &[
    Cue {
        delay: Duration::ZERO,
        duration: Duration::from_millis(800),
        from: VisualState::hidden(30.0),
    },
    Cue {
        delay: Duration::from_millis(300),
        duration: Duration::from_millis(1200),
        from: VisualState::hidden(80.0),
    },
    Cue {
        delay: Duration::from_millis(600),
        duration: Duration::from_millis(1000),
        from: VisualState::hidden(50.0),
    },
    Cue {
        delay: Duration::from_millis(900),
        duration: Duration::from_millis(800),
        from: VisualState::hidden(40.0),
    },
    Cue {
        delay: Duration::from_millis(1050),
        duration: Duration::from_millis(800),
        from: VisualState::hidden(40.0),
    },
];

const HERO_ENTRANCE: RevealSpec = RevealSpec::sequence(HERO_CUES, Ease::Power3Out);
const STAT: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_90, VisualState::hidden_scaled(40.0, 0.95), 600, Ease::Power2Out, 50);
const TITLE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(80.0), 1200, Ease::Power3Out, 0);
const FEATURE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden_scaled(100.0, 0.95), 1000, Ease::Power3Out, 150);
const WORK_TITLE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_90, VisualState::hidden(50.0), 700, Ease::Power2Out, 0);
const TILE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden_scaled(60.0, 0.98), 600, Ease::Power2Out, 50);
const QUOTE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden_scaled(60.0, 0.98), 600, Ease::Power2Out, 60);
const CALL: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(80.0), 1000, Ease::Power3Out, 200);

/// Services shown on the landing page
const PREVIEWED_SERVICES: usize = 4;
const STAT_HEIGHT: f32 = 130.0;
const FEATURE_HEIGHT: f32 = 250.0;
const FEATURED_TILE: f32 = 440.0;
const TILE_HEIGHT: f32 = 320.0;
const QUOTE_HEIGHT: f32 = 280.0;
const CALL_HEIGHT: f32 = 420.0;
const BUTTON_ROW: f32 = 52.0;

/// The landing page
#[derive(Debug)]
pub struct HomePage {
    stage: Stage,
    hero: Section,
    stats: Section,
    services_title: Section,
    services: Section,
    why_title: Section,
    why: Section,
    work_title: Section,
    work: Section,
    voices_title: Section,
    voices: Section,
    call: Section,
    parallax: Parallax,
    pointer: (f32, f32),
}

impl HomePage {
    pub fn new(live: LiveTweens) -> Self {
        let mut stage = Stage::new("home", live);
        let hero = stage.section(HERO_ENTRANCE, HERO_CUES.len());
        let stats = stage.section(STAT, STATS.len());
        let services_title = stage.section(TITLE, 1);
        let services = stage.layer(services_title, FEATURE, PREVIEWED_SERVICES);
        let why_title = stage.section(TITLE, 1);
        let why = stage.layer(why_title, FEATURE, WHY_CHOOSE_US.len());
        let work_title = stage.section(WORK_TITLE, 1);
        let work = stage.layer(work_title, TILE, catalog::highlights().len());
        let voices_title = stage.section(WORK_TITLE, 1);
        let voices = stage.layer(voices_title, QUOTE, TESTIMONIALS.len());
        let call = stage.section(CALL, 4);

        Self {
            stage,
            hero,
            stats,
            services_title,
            services,
            why_title,
            why,
            work_title,
            work,
            voices_title,
            voices,
            call,
            parallax: Parallax::hero(),
            pointer: (0.0, 0.0),
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Section heights, top to bottom
    pub fn heights(&self, viewport: Size) -> Vec<f32> {
        let cols = columns(viewport.width);
        let stat_cols = if cols < 3 { 2 } else { 4 };
        let (featured, rest) = split_highlights();
        vec![
            hero_height(viewport),
            BAND_PADDING + grid_height(STATS.len(), stat_cols, STAT_HEIGHT, GUTTER),
            titled_height(grid_height(PREVIEWED_SERVICES, cols.min(2), FEATURE_HEIGHT, GUTTER)),
            titled_height(grid_height(WHY_CHOOSE_US.len(), cols.min(2), FEATURE_HEIGHT, GUTTER)),
            titled_height(
                grid_height(featured.len(), cols.min(2), FEATURED_TILE, GUTTER)
                    + GUTTER
                    + grid_height(rest.len(), cols, TILE_HEIGHT, GUTTER)
                    + BLOCK_SPACING
                    + BUTTON_ROW,
            ),
            titled_height(grid_height(TESTIMONIALS.len(), cols, QUOTE_HEIGHT, GUTTER)),
            CALL_HEIGHT,
        ]
    }

    /// Scrub the hero parallax toward the new scroll position
    pub fn scrolled(&mut self, scroll_y: f32, viewport: Size) {
        self.parallax.scroll_to(scroll_y, 0.0, hero_height(viewport));
    }

    /// Pointer moved over the hero, in 0..1 canvas coordinates
    pub fn pointer_moved(&mut self, normalized: Point) {
        self.pointer = pointer_offset(normalized.x, normalized.y);
    }

    /// Advance the parallax. Returns whether it is still settling.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.parallax.advance(elapsed)
    }

    pub fn is_settling(&self) -> bool {
        self.parallax.is_settling()
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let viewport = ctx.viewport;
        let heights = self.heights(viewport);
        let height = |index: usize| heights.get(index).copied().unwrap_or_default();
        column![
            self.hero_view(ctx, height(0)),
            band(self.stats_view(ctx), height(1), false),
            band(self.services_view(ctx), height(2), true),
            band(self.why_view(ctx), height(3), false),
            band(self.work_view(ctx), height(4), true),
            band(self.voices_view(ctx), height(5), false),
            self.call_view(ctx, height(6)),
        ]
        .into()
    }

    fn hero_view<'a>(&'a self, ctx: &Context<'a>, height: f32) -> Element<'a, Message> {
        let now = ctx.now;
        let cue = |index| self.stage.visual(self.hero, index, now);

        let badge_opacity = cue(0).opacity;
        let badge = container(fade_text("Professional Photography & Videography", 14.0, IVORY, cue(0)))
            .padding([10, 22])
            .style(move |_theme| style::card(badge_opacity * 0.6));
        let content = column![
            lifted(badge, cue(0)),
            lifted(fade_text("Capturing Moments, Creating Memories", 64.0, IVORY, cue(1)), cue(1)),
            lifted(fade_text(TAGLINE, 21.0, MUTED, cue(2)), cue(2)),
            row![
                route_button("View Our Work", Route::Portfolio, true, cue(3)),
                route_button("Get a Quote", Route::Contact, false, cue(4)),
            ]
            .spacing(18),
        ]
        .spacing(26)
        .align_x(Alignment::Center);

        let has_image = ctx.image(HERO.key).is_some();
        let backdrop = canvas(HeroBackdrop {
            scale: self.parallax.scale(),
            offset: self.pointer,
            over_image: has_image,
        })
        .width(Length::Fill)
        .height(Length::Fixed(height));

        container(stack![
            photo(ctx, HERO.key, height, 1.0),
            backdrop,
            container(content).center(Length::Fill).padding(40),
        ])
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
    }

    fn stats_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let cols = if ctx.columns() < 3 { 2 } else { 4 };
        let cells = STATS
            .iter()
            .enumerate()
            .map(|(index, stat)| {
                let visual = self.stage.visual(self.stats, index, ctx.now);
                let body = column![
                    fade_text(stat.number, 44.0, GOLD, visual),
                    fade_text(stat.label, 15.0, MUTED, visual),
                ]
                .spacing(6)
                .align_x(Alignment::Center);
                lifted(
                    container(body)
                        .center_x(Length::Fill)
                        .height(Length::Fixed(STAT_HEIGHT))
                        .padding(20)
                        .style(move |_theme| style::card(visual.opacity)),
                    visual,
                )
                .into()
            })
            .collect();
        grid(cells, cols, GUTTER)
    }

    fn services_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let title = self.stage.visual(self.services_title, 0, ctx.now);
        let cells = SERVICES
            .iter()
            .take(PREVIEWED_SERVICES)
            .enumerate()
            .map(|(index, service)| {
                let visual = self.stage.visual(self.services, index, ctx.now);
                point_card(service.icon, service.title, service.summary, FEATURE_HEIGHT, visual)
            })
            .collect();
        column![
            heading("WHAT WE DO", "Our Services", Some("Comprehensive photography and videography for every occasion"), title),
            grid(cells, ctx.columns().min(2), GUTTER),
        ]
        .spacing(BLOCK_SPACING)
        .into()
    }

    fn why_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let title = self.stage.visual(self.why_title, 0, ctx.now);
        let cells = WHY_CHOOSE_US
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let visual = self.stage.visual(self.why, index, ctx.now);
                point_card(point.icon, point.title, point.description, FEATURE_HEIGHT, visual)
            })
            .collect();
        column![
            heading("WHY US", "Why Choose Maelstrom Frames", None, title),
            grid(cells, ctx.columns().min(2), GUTTER),
        ]
        .spacing(BLOCK_SPACING)
        .into()
    }

    fn work_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let title = self.stage.visual(self.work_title, 0, ctx.now);
        let (featured, rest) = split_highlights();
        let tile = |index: usize, item, height| project_card(ctx, item, height, self.stage.visual(self.work, index, ctx.now));

        let large = featured.iter().enumerate().map(|(index, item)| tile(index, *item, FEATURED_TILE)).collect();
        let small = rest
            .iter()
            .enumerate()
            .map(|(index, item)| tile(featured.len() + index, *item, TILE_HEIGHT))
            .collect();

        let more = self.stage.visual(self.work_title, 0, ctx.now);
        column![
            heading("PORTFOLIO", "Featured Work", Some("A glimpse of the moments we've captured"), title),
            column![grid(large, ctx.columns().min(2), GUTTER), grid(small, ctx.columns(), GUTTER)].spacing(GUTTER),
            container(route_button("View Full Portfolio", Route::Portfolio, false, more))
                .center_x(Length::Fill)
                .height(Length::Fixed(BUTTON_ROW)),
        ]
        .spacing(BLOCK_SPACING)
        .into()
    }

    fn voices_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let title = self.stage.visual(self.voices_title, 0, ctx.now);
        let cells = TESTIMONIALS
            .iter()
            .enumerate()
            .map(|(index, quote)| testimonial_card(quote, QUOTE_HEIGHT, self.stage.visual(self.voices, index, ctx.now)))
            .collect();
        column![
            heading("TESTIMONIALS", "What Our Clients Say", None, title),
            grid(cells, ctx.columns(), GUTTER),
        ]
        .spacing(BLOCK_SPACING)
        .into()
    }

    fn call_view<'a>(&'a self, ctx: &Context<'a>, height: f32) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.call, index, ctx.now);
        let content = column![
            lifted(fade_text("Ready to Capture Your Special Moments?", 44.0, IVORY, step(0)), step(0)),
            lifted(
                fade_text("Let's create something beautiful together. Get in touch to discuss your event.", 18.0, IVORY, step(1)),
                step(1),
            ),
            row![
                route_button("Book a Consultation", Route::Contact, true, step(2)),
                route_button("View Services", Route::Services, false, step(3)),
            ]
            .spacing(18),
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .center(Length::Fill)
            .height(Length::Fixed(height))
            .padding(40)
            .clip(true)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(style::faded(GOLD, 0.85))),
                ..container::Style::default()
            })
            .into()
    }
}

fn hero_height(viewport: Size) -> f32 {
    viewport.height.max(560.0)
}

/// Featured highlights first (large tiles), then the rest, each in catalog order
fn split_highlights() -> (Vec<&'static PortfolioItem>, Vec<&'static PortfolioItem>) {
    catalog::highlights().iter().partition(|item| item.featured)
}
