use iced::widget::{column, row, Column};
use iced::{Element, Length, Size};

use super::HERO_SLOW;
use crate::content::{STATS, STORY, VALUES};
use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, VisualState};
use crate::routes::Route;
use crate::state::catalog::HERO;
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, grid_height, Section, Stage};
use crate::ui::style::{GOLD, IVORY, MUTED};
use crate::ui::widgets::{
    band, grid, heading, page_hero, photo, point_card, route_button, titled_height, GUTTER, PAGE_HERO_HEIGHT,
};
use crate::ui::Context;
use crate::Message;

const STORY_ENTRANCE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(80.0), 1000, Ease::Power3Out, 150);
const VALUE: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden_scaled(60.0, 0.95), 800, Ease::Power3Out, 100);

const STORY_HEIGHT: f32 = 560.0;
const VALUE_HEIGHT: f32 = 230.0;
const JOIN_HEIGHT: f32 = 320.0;

/// Studio story and values
#[derive(Debug)]
pub struct AboutPage {
    stage: Stage,
    hero: Section,
    story: Section,
    values_title: Section,
    values: Section,
    join: Section,
}

impl AboutPage {
    pub fn new(live: LiveTweens) -> Self {
        let mut stage = Stage::new("about", live);
        let hero = stage.section(HERO_SLOW, 3);
        // Eyebrow, title, the paragraphs, then the numbers strip
        let story = stage.section(STORY_ENTRANCE, STORY.len() + 3);
        let values_title = stage.section(STORY_ENTRANCE, 1);
        let values = stage.layer(values_title, VALUE, VALUES.len());
        let join = stage.section(STORY_ENTRANCE, 3);
        Self {
            stage,
            hero,
            story,
            values_title,
            values,
            join,
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
        // Narrow windows stack the photo under the story
        let story = if cols == 1 { STORY_HEIGHT + 340.0 } else { STORY_HEIGHT };
        vec![
            PAGE_HERO_HEIGHT,
            story,
            titled_height(grid_height(VALUES.len(), cols, VALUE_HEIGHT, GUTTER)),
            JOIN_HEIGHT,
        ]
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let heights = self.heights(ctx.viewport);
        let height = |index: usize| heights.get(index).copied().unwrap_or_default();
        column![
            page_hero(
                &self.stage,
                self.hero,
                ctx.now,
                "ABOUT US",
                "The Story Behind the Lens",
                "Passionate storytellers dedicated to preserving your most precious moments",
            ),
            band(self.story_view(ctx), height(1), true),
            band(self.values_view(ctx), height(2), false),
            band(self.join_view(ctx), height(3), true),
        ]
        .into()
    }

    fn story_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.story, index, ctx.now);
        let mut text_block = Column::new()
            .spacing(18)
            .width(Length::Fill)
            .push(lifted(fade_text("OUR STORY", 14.0, GOLD, step(0)), step(0)))
            .push(lifted(fade_text("Crafting Visual Stories Since 2016", 38.0, IVORY, step(1)), step(1)));
        for (index, paragraph) in STORY.iter().enumerate() {
            let visual = step(index + 2);
            text_block = text_block.push(lifted(fade_text(*paragraph, 17.0, MUTED, visual), visual));
        }

        let numbers = step(STORY.len() + 2);
        let strip = STATS.iter().take(3).fold(row![].spacing(32), |strip, stat| {
            strip.push(
                column![
                    fade_text(stat.number, 30.0, GOLD, numbers),
                    fade_text(stat.label, 13.0, MUTED, numbers),
                ]
                .spacing(4),
            )
        });
        text_block = text_block.push(lifted(strip, numbers));

        let picture = photo(ctx, HERO.key, 420.0, step(1).opacity);
        if ctx.columns() == 1 {
            column![text_block, picture].spacing(24).into()
        } else {
            row![text_block, picture].spacing(48).into()
        }
    }

    fn values_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let title = self.stage.visual(self.values_title, 0, ctx.now);
        let cells = VALUES
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let visual = self.stage.visual(self.values, index, ctx.now);
                point_card(value.icon, value.title, value.description, VALUE_HEIGHT, visual)
            })
            .collect();
        column![
            heading("OUR VALUES", "What Drives Us", Some("The principles behind every frame we capture"), title),
            grid(cells, ctx.columns(), GUTTER),
        ]
        .spacing(40)
        .into()
    }

    fn join_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.join, index, ctx.now);
        column![
            lifted(fade_text("Let's Create Something Beautiful", 36.0, IVORY, step(0)), step(0)),
            lifted(
                fade_text("Tell us about your day and we'll tell you how we'd capture it.", 17.0, MUTED, step(1)),
                step(1),
            ),
            route_button("Start a Conversation", Route::Contact, true, step(2)),
        ]
        .spacing(20)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_one_height_per_section() {
        let page = AboutPage::new(LiveTweens::new());
        for width in [375.0, 800.0, 1440.0] {
            assert_eq!(page.heights(Size::new(width, 900.0)).len(), page.stage().sections());
        }
    }

    #[test]
    fn test_hero_enters_on_mount_story_on_scroll() {
        let live = LiveTweens::new();
        let mut page = AboutPage::new(live.clone());
        let now = Instant::now();
        page.stage_mut().mount(now);
        assert_eq!(live.count(), 3);

        // Story band starts at 380 px: inside the 80% band of a 900 px window
        let viewport = Size::new(1440.0, 900.0);
        let heights = page.heights(viewport);
        page.stage_mut().observe(&heights, 0.0, viewport.height, now);
        assert!(page.stage().has_played(page.story));
        assert!(!page.stage().has_played(page.values));
    }
}
