use iced::widget::{column, container, row, Column};
use iced::{Alignment, Element, Length, Size};

use super::HERO_QUICK;
use crate::content::{Service, SERVICES};
use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, VisualState};
use crate::routes::Route;
use crate::state::catalog::PORTFOLIO;
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, Section, Stage};
use crate::ui::style::{self, IVORY, MUTED};
use crate::ui::widgets::{band, page_hero, photo, route_button, tags, BAND_PADDING, GUTTER, PAGE_HERO_HEIGHT};
use crate::ui::Context;
use crate::Message;

const OFFERING: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden(60.0), 600, Ease::Power2Out, 80);
const CLOSING: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(60.0), 800, Ease::Power3Out, 150);

const OFFERING_HEIGHT: f32 = 360.0;
const STACKED_PHOTO: f32 = 240.0;
const CLOSING_HEIGHT: f32 = 340.0;

/// Full service descriptions
#[derive(Debug)]
pub struct ServicesPage {
    stage: Stage,
    hero: Section,
    offerings: Section,
    closing: Section,
}

impl ServicesPage {
    pub fn new(live: LiveTweens) -> Self {
        let mut stage = Stage::new("services", live);
        let hero = stage.section(HERO_QUICK, 3);
        let offerings = stage.section(OFFERING, SERVICES.len());
        let closing = stage.section(CLOSING, 3);
        Self {
            stage,
            hero,
            offerings,
            closing,
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
        let row = offering_height(viewport.width);
        let count = SERVICES.len() as f32;
        vec![
            PAGE_HERO_HEIGHT,
            BAND_PADDING + count * row + (count - 1.0) * GUTTER * 2.0,
            CLOSING_HEIGHT,
        ]
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let heights = self.heights(ctx.viewport);
        let height = |index: usize| heights.get(index).copied().unwrap_or_default();

        let offerings = SERVICES
            .iter()
            .enumerate()
            .fold(Column::new().spacing(GUTTER * 2.0), |list, (index, service)| {
                let visual = self.stage.visual(self.offerings, index, ctx.now);
                list.push(offering(ctx, service, index, visual))
            });

        column![
            page_hero(
                &self.stage,
                self.hero,
                ctx.now,
                "OUR SERVICES",
                "What We Offer",
                "Photography and videography for weddings, events, portraits and brands",
            ),
            band(offerings, height(1), true),
            band(self.closing_view(ctx), height(2), false),
        ]
        .into()
    }

    fn closing_view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let step = |index| self.stage.visual(self.closing, index, ctx.now);
        column![
            lifted(fade_text("Not Sure What You Need?", 36.0, IVORY, step(0)), step(0)),
            lifted(
                fade_text("Every event is different. Tell us about yours and we'll put together a package.", 17.0, MUTED, step(1)),
                step(1),
            ),
            route_button("Request a Custom Quote", Route::Contact, true, step(2)),
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

/// One service: text beside a sample photo, sides alternating
fn offering<'a>(ctx: &Context<'_>, service: &'a Service, index: usize, visual: VisualState) -> Element<'a, Message> {
    let details = column![
        fade_text(service.icon, 36.0, IVORY, visual),
        fade_text(service.title, 28.0, IVORY, visual),
        fade_text(service.description, 16.0, MUTED, visual),
        tags(service.features.iter().copied(), visual),
    ]
    .spacing(14)
    .width(Length::Fill);

    // Any project makes a fine sample; cycle through them
    let sample = &PORTFOLIO[index % PORTFOLIO.len()];
    let picture = container(photo(ctx, &sample.image_key(), STACKED_PHOTO, visual.opacity)).width(Length::Fill);

    let body: Element<'a, Message> = if columns(ctx.viewport.width) == 1 {
        column![details, picture].spacing(20).into()
    } else if index % 2 == 0 {
        row![details, picture].spacing(40).align_y(Alignment::Center).into()
    } else {
        row![picture, details].spacing(40).align_y(Alignment::Center).into()
    };

    lifted(
        container(body)
            .padding(28)
            .width(Length::Fill)
            .height(Length::Fixed(offering_height(ctx.viewport.width)))
            .clip(true)
            .style(move |_theme| style::card(visual.opacity)),
        visual,
    )
    .into()
}

fn offering_height(width: f32) -> f32 {
    if columns(width) == 1 {
        OFFERING_HEIGHT + STACKED_PHOTO
    } else {
        OFFERING_HEIGHT
    }
}
