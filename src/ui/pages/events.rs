use iced::widget::column;
use iced::{Alignment, Element, Length, Size};

use super::HERO_SLOW;
use crate::content::{EVENT_TYPES, PROCESS};
use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, VisualState};
use crate::routes::Route;
use crate::state::catalog::PORTFOLIO;
use crate::state::data::{Category, PortfolioItem};
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, grid_height, Section, Stage};
use crate::ui::style::{IVORY, MUTED};
use crate::ui::widgets::{
    band, grid, heading, page_hero, point_card, project_card, route_button, titled_height, GUTTER, PAGE_HERO_HEIGHT,
};
use crate::ui::Context;
use crate::Message;

const TITLE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(60.0), 900, Ease::Power3Out, 0);
const CARD: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden_scaled(50.0, 0.95), 700, Ease::Power2Out, 100);
const STEP: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden(40.0), 600, Ease::Power2Out, 150);
const CALL: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(60.0), 800, Ease::Power3Out, 150);

const CARD_HEIGHT: f32 = 260.0;
const STEP_HEIGHT: f32 = 230.0;
const TILE_HEIGHT: f32 = 360.0;
const RECENT_COUNT: usize = 3;
const CALL_HEIGHT: f32 = 320.0;

/// Event coverage: what we shoot, how we work, recent jobs
#[derive(Debug)]
pub struct EventsPage {
    stage: Stage,
    hero: Section,
    types_title: Section,
    types: Section,
    process_title: Section,
    process: Section,
    recent_title: Section,
    recent: Section,
    call: Section,
}

impl EventsPage {
    pub fn new(live: LiveTweens) -> Self {
        let mut stage = Stage::new("events", live);
        let hero = stage.section(HERO_SLOW, 3);
        let types_title = stage.section(TITLE, 1);
        let types = stage.layer(types_title, CARD, EVENT_TYPES.len());
        let process_title = stage.section(TITLE, 1);
        let process = stage.layer(process_title, STEP, PROCESS.len());
        let recent_title = stage.section(TITLE, 1);
        let recent = stage.layer(recent_title, CARD, recent_events().len());
        let call = stage.section(CALL, 3);
        Self {
            stage,
            hero,
            types_title,
            types,
            process_title,
            process,
            recent_title,
            recent,
            call,
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn heights(&self, viewport: Size) -> Vec<f32> {
        let cols = columns(viewport.width);
        // Four cards read better two by two than three plus one
        let pairs = cols.min(2);
        vec![
            PAGE_HERO_HEIGHT,
            titled_height(grid_height(EVENT_TYPES.len(), pairs, CARD_HEIGHT, GUTTER)),
            titled_height(grid_height(PROCESS.len(), pairs, STEP_HEIGHT, GUTTER)),
            titled_height(grid_height(recent_events().len(), cols, TILE_HEIGHT, GUTTER)),
            CALL_HEIGHT,
        ]
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let heights = self.heights(ctx.viewport);
        let height = |index: usize| heights.get(index).copied().unwrap_or_default();
        let pairs = ctx.columns().min(2);

        let types = EVENT_TYPES
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let visual = self.stage.visual(self.types, index, ctx.now);
                point_card(point.icon, point.title, point.description, CARD_HEIGHT, visual)
            })
            .collect();
        let steps = PROCESS
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let visual = self.stage.visual(self.process, index, ctx.now);
                point_card(point.icon, point.title, point.description, STEP_HEIGHT, visual)
            })
            .collect();
        let recent = recent_events()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let visual = self.stage.visual(self.recent, index, ctx.now);
                project_card(ctx, item, TILE_HEIGHT, visual)
            })
            .collect();

        let title = |section| self.stage.visual(section, 0, ctx.now);
        column![
            page_hero(
                &self.stage,
                self.hero,
                ctx.now,
                "EVENT COVERAGE",
                "Every Occasion, Every Detail",
                "Corporate functions, festivals, celebrations and private gatherings",
            ),
            band(
                column![
                    heading("WHAT WE COVER", "Events We Capture", None, title(self.types_title)),
                    grid(types, pairs, GUTTER),
                ]
                .spacing(40),
                height(1),
                true,
            ),
            band(
                column![
                    heading(
                        "HOW WE WORK",
                        "Our Process",
                        Some("From first call to final delivery"),
                        title(self.process_title),
                    ),
                    grid(steps, pairs, GUTTER),
                ]
                .spacing(40),
                height(2),
                false,
            ),
            band(
                column![
                    heading("RECENT WORK", "Latest Events", None, title(self.recent_title)),
                    grid(recent, ctx.columns(), GUTTER),
                ]
                .spacing(40),
                height(3),
                true,
            ),
            band(self.call_view(ctx), height(4), false),
        ]
        .into()
    }

    fn call_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.call, index, ctx.now);
        column![
            lifted(fade_text("Planning an Event?", 36.0, IVORY, step(0)), step(0)),
            lifted(
                fade_text("Share the date and the venue and we'll send availability and a quote.", 17.0, MUTED, step(1)),
                step(1),
            ),
            route_button("Check Availability", Route::Contact, true, step(2)),
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

/// The latest event projects, in catalog order
fn recent_events() -> Vec<&'static PortfolioItem> {
    PORTFOLIO
        .iter()
        .filter(|item| item.category == Category::Event)
        .take(RECENT_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_one_height_per_section() {
        let page = EventsPage::new(LiveTweens::new());
        for width in [375.0, 800.0, 1440.0] {
            assert_eq!(page.heights(Size::new(width, 900.0)).len(), page.stage().sections());
        }
    }

    #[test]
    fn test_recent_events_are_events_only() {
        let recent = recent_events();
        assert_eq!(recent.len(), RECENT_COUNT);
        assert!(recent.iter().all(|item| item.category == Category::Event));
        assert_eq!(recent.iter().map(|item| item.id).collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_cards_wait_for_their_heading() {
        let live = LiveTweens::new();
        let mut page = EventsPage::new(live.clone());
        let viewport = Size::new(1440.0, 900.0);
        let heights = page.heights(viewport);
        let now = Instant::now();

        // Types band starts at 380 px, inside the 80% band; the rest are far below
        page.stage_mut().observe(&heights, 0.0, viewport.height, now);
        assert!(page.stage().has_played(page.types));
        assert!(!page.stage().has_played(page.process));
        assert_eq!(live.count(), 1 + EVENT_TYPES.len());
    }
}
