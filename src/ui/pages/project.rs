use iced::widget::{column, container, row, Column};
use iced::{Alignment, Element, Length, Size};

use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, VisualState};
use crate::routes::Route;
use crate::state::catalog;
use crate::state::data::{MediaType, PortfolioItem};
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{Section, Stage};
use crate::ui::style::{GOLD, IVORY, MUTED};
use crate::ui::widgets::{band, photo, project_card, route_button, tags, GUTTER};
use crate::ui::{Context, HEADER_HEIGHT};
use crate::Message;

const INTRO: RevealSpec = RevealSpec::mount(VisualState::hidden(40.0), 800, Ease::Power3Out, 120);
const RELATED: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden(50.0), 700, Ease::Power2Out, 100);

const DETAIL_HEIGHT: f32 = 760.0;
const RELATED_HEIGHT: f32 = 620.0;
const MISSING_HEIGHT: f32 = 520.0;
const RELATED_TILE: f32 = 360.0;
const RELATED_COUNT: usize = 3;

/// One project, or a not-found notice for an unknown id
#[derive(Debug)]
pub struct ProjectPage {
    stage: Stage,
    item: Option<&'static PortfolioItem>,
    intro: Section,
    related: Section,
}

impl ProjectPage {
    pub fn new(id: u32, live: LiveTweens) -> Self {
        let item = catalog::find(id);
        if item.is_none() {
            tracing::warn!(id, "⚠️  No project with this id");
        }
        let mut stage = Stage::new("project", live);
        let intro = stage.section(INTRO, 5);
        let related = stage.section(RELATED, if item.is_some() { RELATED_COUNT } else { 0 });
        Self {
            stage,
            item,
            intro,
            related,
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn heights(&self, _viewport: Size) -> Vec<f32> {
        match self.item {
            Some(_) => vec![DETAIL_HEIGHT, RELATED_HEIGHT],
            None => vec![MISSING_HEIGHT],
        }
    }

    /// Other projects in the same category, in catalog order
    fn related_items(&self) -> Vec<&'static PortfolioItem> {
        let Some(item) = self.item else {
            return Vec::new();
        };
        catalog::PORTFOLIO
            .iter()
            .filter(|other| other.category == item.category && other.id != item.id)
            .take(RELATED_COUNT)
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        match self.item {
            Some(item) => column![
                band(self.detail_view(ctx, item), DETAIL_HEIGHT, false),
                band(self.related_view(ctx), RELATED_HEIGHT, true),
            ]
            .into(),
            None => band(self.missing_view(ctx), MISSING_HEIGHT, false),
        }
    }

    fn detail_view<'a>(&'a self, ctx: &Context<'a>, item: &'static PortfolioItem) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.intro, index, ctx.now);
        let kind = match item.subcategory {
            Some(sub) => sub.label().to_string(),
            None => item.category.to_string(),
        };

        let facts = column![
            lifted(fade_text(kind.to_uppercase(), 14.0, GOLD, step(0)), step(0)),
            lifted(fade_text(item.title, 46.0, IVORY, step(1)), step(1)),
            lifted(
                tags([item.location, item.date, media_label(item)], step(2)),
                step(2),
            ),
        ]
        .spacing(14)
        .width(Length::Fill);

        column![
            container(route_button("← Back to Portfolio", Route::Portfolio, false, step(0))).padding([HEADER_HEIGHT - 48.0, 0.0]),
            facts,
            lifted(photo(ctx, &item.image_key(), 420.0, step(3).opacity), step(3)),
            route_button("Book a Similar Session", Route::Contact, true, step(4)),
        ]
        .spacing(20)
        .into()
    }

    fn related_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let items = self.related_items();
        let title = self.stage.visual(self.related, 0, ctx.now);
        let cards = items
            .into_iter()
            .enumerate()
            .fold(row![].spacing(GUTTER), |cards, (index, other)| {
                let visual = self.stage.visual(self.related, index, ctx.now);
                cards.push(container(project_card(ctx, other, RELATED_TILE, visual)).width(Length::Fill))
            });
        Column::new()
            .spacing(32)
            .push(lifted(fade_text("More Like This", 32.0, IVORY, title), title))
            .push(cards)
            .into()
    }

    fn missing_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.intro, index, ctx.now);
        column![
            lifted(fade_text("404", 72.0, GOLD, step(0)), step(0)),
            lifted(fade_text("Project Not Found", 36.0, IVORY, step(1)), step(1)),
            lifted(
                fade_text("The project you're looking for doesn't exist or has moved.", 17.0, MUTED, step(2)),
                step(2),
            ),
            route_button("Back to Portfolio", Route::Portfolio, true, step(3)),
        ]
        .spacing(18)
        .padding([HEADER_HEIGHT, 0.0])
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

fn media_label(item: &PortfolioItem) -> &'static str {
    match item.media_type {
        MediaType::Photo => "Photography",
        MediaType::Video => "Videography",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;
    use std::time::Instant;

    #[test]
    fn test_known_project_has_detail_and_related() {
        let page = ProjectPage::new(3, LiveTweens::new());
        assert_eq!(page.item.map(|item| item.id), Some(3));
        assert_eq!(page.heights(Size::new(1280.0, 800.0)).len(), page.stage().sections());

        let related = page.related_items();
        assert_eq!(related.len(), RELATED_COUNT);
        assert!(related.iter().all(|other| other.category == Category::Wedding && other.id != 3));
    }

    #[test]
    fn test_unknown_project_shows_notice() {
        let live = LiveTweens::new();
        let mut page = ProjectPage::new(999, live.clone());
        assert!(page.item.is_none());
        assert!(page.related_items().is_empty());
        assert_eq!(page.heights(Size::new(1280.0, 800.0)), vec![MISSING_HEIGHT]);

        let now = Instant::now();
        page.stage_mut().mount(now);
        assert_eq!(live.count(), 5);
        // The related section has no slot, so it never fires
        let heights = page.heights(Size::new(1280.0, 800.0));
        page.stage_mut().observe(&heights, 0.0, 800.0, now);
        assert_eq!(live.count(), 5);
    }
}
