/// Building blocks shared by the pages
use std::time::Instant;

use iced::widget::{button, column, container, image, text, Column, Row, Space};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::reveal::{fade_text, lifted};
use super::stage::{Section, Stage};
use super::style::{self, GOLD, IVORY, MUTED};
use super::{Context, HEADER_HEIGHT};
use crate::content::Testimonial;
use crate::motion::VisualState;
use crate::routes::Route;
use crate::state::data::PortfolioItem;
use crate::Message;

/// Height of every inner page's hero band
pub const PAGE_HERO_HEIGHT: f32 = 380.0;
/// Vertical padding of a band, top plus bottom
pub const BAND_PADDING: f32 = 96.0;
/// Space reserved for a section heading
pub const HEADING_HEIGHT: f32 = 150.0;
/// Gap between blocks inside a band
pub const BLOCK_SPACING: f32 = 40.0;
/// Gutter between grid cells
pub const GUTTER: f32 = 24.0;

/// Band height for a heading followed by `body` px of content
pub fn titled_height(body: f32) -> f32 {
    BAND_PADDING + HEADING_HEIGHT + BLOCK_SPACING + body
}

/// A full-width band of fixed height. Content that doesn't fit is clipped
/// so section offsets stay exact.
pub fn band<'a>(content: impl Into<Element<'a, Message>>, height: f32, dark: bool) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([48.0, 40.0])
        .clip(true)
        .style(move |_theme| style::band(dark))
        .into()
}

/// Remote photo, or a tinted placeholder until it has been downloaded
pub fn photo<'a>(ctx: &Context<'_>, key: &str, height: f32, opacity: f32) -> Element<'a, Message> {
    match ctx.image(key) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        None => container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .style(move |_theme| style::placeholder(opacity))
            .into(),
    }
}

/// Lay `cells` out in rows of `columns`, padding the last row
pub fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize, spacing: f32) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut lines = Column::new().spacing(spacing);
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        let mut line = Row::new().spacing(spacing);
        for _ in 0..columns {
            line = match cells.next() {
                Some(cell) => line.push(container(cell).width(Length::Fill)),
                None => line.push(Space::with_width(Length::Fill)),
            };
        }
        lines = lines.push(line);
    }
    lines.into()
}

/// Centered section heading: gold eyebrow, title and an optional lead
pub fn heading<'a>(eyebrow: &'a str, title: &'a str, lead: Option<&'a str>, visual: VisualState) -> Element<'a, Message> {
    let mut content = column![
        fade_text(eyebrow, 14.0, GOLD, visual),
        fade_text(title, 40.0, IVORY, visual),
    ]
    .spacing(10)
    .align_x(Alignment::Center);
    if let Some(lead) = lead {
        content = content.push(fade_text(lead, 17.0, MUTED, visual));
    }
    lifted(content, visual)
        .width(Length::Fill)
        .height(Length::Fixed(HEADING_HEIGHT))
        .center_x(Length::Fill)
        .into()
}

/// Icon, title and text on a card surface
pub fn point_card<'a>(icon: &'a str, title: &'a str, description: &'a str, height: f32, visual: VisualState) -> Element<'a, Message> {
    let body = column![
        fade_text(icon, 40.0, IVORY, visual),
        fade_text(title, 22.0, IVORY, visual),
        fade_text(description, 15.0, MUTED, visual),
    ]
    .spacing(12);

    lifted(
        container(body)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .style(move |_theme| style::card(visual.opacity)),
        visual,
    )
    .into()
}

/// Clickable portfolio tile leading to the project page
pub fn project_card<'a>(ctx: &Context<'_>, item: &'a PortfolioItem, height: f32, visual: VisualState) -> Element<'a, Message> {
    let kind = match item.subcategory {
        Some(sub) => sub.label().to_string(),
        None => item.category.to_string(),
    };
    let caption = column![
        fade_text(item.title, 20.0, IVORY, visual),
        fade_text(format!("{} · {}", item.location, item.date), 14.0, MUTED, visual),
        fade_text(format!("{kind} · {}", item.media_type), 12.0, GOLD, visual),
    ]
    .spacing(4)
    .padding([12, 16]);

    let tile = column![photo(ctx, &item.image_key(), height - 100.0, visual.opacity), caption];
    let tile = container(tile)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(move |_theme| style::card(visual.opacity));

    lifted(
        button(tile)
            .padding(0)
            .style(|_theme, _status| button::Style::default())
            .on_press(Message::Navigate(Route::Project(item.id))),
        visual,
    )
    .into()
}

/// Row of small labels that wraps onto new lines when out of room
pub fn tags<'a>(labels: impl IntoIterator<Item = &'a str>, visual: VisualState) -> Element<'a, Message> {
    let chips = labels
        .into_iter()
        .map(|label| {
            container(fade_text(label, 13.0, IVORY, visual))
                .padding([6, 14])
                .style(move |_theme| style::tag(visual.opacity))
                .into()
        })
        .collect();
    Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0).into()
}

/// Quote card
pub fn testimonial_card<'a>(testimonial: &'a Testimonial, height: f32, visual: VisualState) -> Element<'a, Message> {
    let body = column![
        fade_text("★★★★★", 16.0, GOLD, visual),
        fade_text(testimonial.text, 15.0, IVORY, visual),
        fade_text(testimonial.name, 17.0, IVORY, visual),
        fade_text(testimonial.role, 13.0, MUTED, visual),
    ]
    .spacing(12);

    lifted(
        container(body)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .style(move |_theme| style::card(visual.opacity)),
        visual,
    )
    .into()
}

/// Button that navigates to `route`
pub fn route_button<'a>(label: &'a str, route: Route, primary: bool, visual: VisualState) -> Element<'a, Message> {
    let label = text(label).size(16.0 * visual.scale);
    let control = button(label).padding([14.0, 32.0]).on_press(Message::Navigate(route));
    let control = if primary {
        control.style(style::primary(visual.opacity))
    } else {
        control.style(style::outline(visual.opacity))
    };
    lifted(control, visual).into()
}

/// Hero band of an inner page: eyebrow, title and lead, entering on mount
pub fn page_hero<'a>(
    stage: &Stage,
    section: Section,
    now: Instant,
    eyebrow: &'a str,
    title: &'a str,
    lead: &'a str,
) -> Element<'a, Message> {
    let line = |index: usize, content: &'a str, size: f32, color: Color| {
        let visual = stage.visual(section, index, now);
        lifted(fade_text(content, size, color, visual), visual)
    };
    let content = column![
        line(0, eyebrow, 14.0, GOLD),
        line(1, title, 52.0, IVORY),
        line(2, lead, 19.0, MUTED),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(PAGE_HERO_HEIGHT))
        .padding([HEADER_HEIGHT + 40.0, 40.0])
        .center_x(Length::Fill)
        .clip(true)
        .style(|_theme| style::band(false))
        .into()
}
