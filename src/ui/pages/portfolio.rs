use std::time::{Duration, Instant};

use iced::widget::{button, column, container, text, Row};
use iced::{Alignment, Element, Length, Size};

use super::HERO_QUICK;
use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, TweenTiming, VisualState};
use crate::state::catalog::PORTFOLIO;
use crate::state::data::Subcategory;
use crate::state::filter::{FilterState, MainFilter};
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, grid_height, Section, Stage};
use crate::ui::style::{self, MUTED};
use crate::ui::widgets::{band, grid, page_hero, project_card, BAND_PADDING, BLOCK_SPACING, GUTTER, PAGE_HERO_HEIGHT};
use crate::ui::Context;
use crate::Message;

const TILES: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden_scaled(60.0, 0.98), 600, Ease::Power2Out, 50);

/// Short entrance played on the visible tiles after every filter change
const REFILTER_FROM: VisualState = VisualState::hidden_scaled(20.0, 0.95);
const REFILTER_TIMING: TweenTiming = TweenTiming::new(Duration::from_millis(400), Ease::Power2Out);
const REFILTER_STAGGER: Duration = Duration::from_millis(30);

const TILE_HEIGHT: f32 = 380.0;
const FILTER_ROW: f32 = 44.0;
const EMPTY_HEIGHT: f32 = 120.0;

/// Filterable project gallery
#[derive(Debug)]
pub struct PortfolioPage {
    stage: Stage,
    hero: Section,
    tiles: Section,
    filter: FilterState,
}

impl PortfolioPage {
    pub fn new(live: LiveTweens) -> Self {
        let filter = FilterState::new();
        let mut stage = Stage::new("portfolio", live);
        let hero = stage.section(HERO_QUICK, 3);
        let tiles = stage.section(TILES, filter.apply(&PORTFOLIO).len());
        Self {
            stage,
            hero,
            tiles,
            filter,
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// A main filter button was clicked
    pub fn select_main(&mut self, main: MainFilter, now: Instant) {
        if self.filter.select_main(main) {
            self.refilter(now);
        }
    }

    /// A tradition button was clicked (`None` is "All Weddings")
    pub fn select_subcategory(&mut self, sub: Option<Subcategory>, now: Instant) {
        if self.filter.select_subcategory(sub) {
            self.refilter(now);
        }
    }

    fn refilter(&mut self, now: Instant) {
        let visible = self.filter.apply(&PORTFOLIO).len();
        tracing::debug!(filter = %self.filter.main(), sub = ?self.filter.subcategory(), visible, "portfolio filtered");
        self.stage
            .replay(self.tiles, visible, REFILTER_FROM, REFILTER_TIMING, REFILTER_STAGGER, now);
    }

    pub fn heights(&self, viewport: Size) -> Vec<f32> {
        let visible = self.filter.apply(&PORTFOLIO).len();
        let rows = if self.filter.shows_subcategories() { 2.0 } else { 1.0 };
        let filters = rows * FILTER_ROW + (rows - 1.0) * 12.0;
        let body = match visible {
            0 => EMPTY_HEIGHT,
            n => grid_height(n, columns(viewport.width), TILE_HEIGHT, GUTTER),
        };
        vec![PAGE_HERO_HEIGHT, BAND_PADDING + filters + BLOCK_SPACING + body]
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let heights = self.heights(ctx.viewport);
        let height = heights.get(1).copied().unwrap_or_default();

        let mut controls = column![chips(
            MainFilter::BUTTONS
                .into_iter()
                .map(|main| (main.label(), self.filter.main() == main, Message::Filter(main))),
        )]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        if self.filter.shows_subcategories() {
            let all = ("All Weddings", self.filter.subcategory().is_none(), Message::SubFilter(None));
            let traditions = Subcategory::ALL
                .into_iter()
                .map(|sub| (sub.label(), self.filter.subcategory() == Some(sub), Message::SubFilter(Some(sub))));
            controls = controls.push(chips(std::iter::once(all).chain(traditions)));
        }

        let visible = self.filter.apply(&PORTFOLIO);
        let gallery: Element<'a, Message> = if visible.is_empty() {
            container(fade_text("No projects match this filter yet.", 17.0, MUTED, VisualState::IDENTITY))
                .height(Length::Fixed(EMPTY_HEIGHT))
                .center_x(Length::Fill)
                .into()
        } else {
            let cells = visible
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let visual = self.stage.visual(self.tiles, index, ctx.now);
                    project_card(ctx, item, TILE_HEIGHT, visual)
                })
                .collect();
            grid(cells, ctx.columns(), GUTTER)
        };

        column![
            page_hero(
                &self.stage,
                self.hero,
                ctx.now,
                "OUR PORTFOLIO",
                "Stories We've Told",
                "Weddings and events captured across four continents",
            ),
            band(column![controls, gallery].spacing(BLOCK_SPACING), height, true),
        ]
        .into()
    }
}

/// A centered row of filter chips
fn chips<'a>(entries: impl Iterator<Item = (&'a str, bool, Message)>) -> Element<'a, Message> {
    let row = entries.fold(Row::new().spacing(12), |row, (label, active, message)| {
        row.push(
            button(text(label).size(15))
                .padding([10, 22])
                .height(Length::Fixed(FILTER_ROW))
                .style(style::chip(active))
                .on_press(message),
        )
    });
    lifted(row, VisualState::IDENTITY).center_x(Length::Fill).into()
}
