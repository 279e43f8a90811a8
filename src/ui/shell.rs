/// Persistent chrome around every page: header, overlay menu, footer
use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::style::{self, GOLD, IVORY, MUTED};
use super::HEADER_HEIGHT;
use crate::config::SiteConfig;
use crate::content::TAGLINE;
use crate::routes::{Route, NAV_LINKS};
use crate::state::navigation::NavState;
use crate::Message;

/// Height of the footer below every page
pub const FOOTER_HEIGHT: f32 = 260.0;

/// Top bar. Wide windows list every link; narrow ones show a menu toggle.
pub fn header<'a>(route: Route, nav: &NavState, config: &'a SiteConfig) -> Element<'a, Message> {
    let brand = button(text(config.studio_name.to_uppercase()).size(22).color(GOLD))
        .padding(0)
        .style(style::link(false))
        .on_press(Message::Navigate(Route::Home));

    let mut bar = Row::new()
        .push(brand)
        .push(horizontal_space())
        .spacing(28)
        .align_y(Alignment::Center);

    if nav.is_narrow() {
        let glyph = if nav.menu_open() { "✕" } else { "☰" };
        bar = bar.push(
            button(text(glyph).size(24))
                .padding([4, 10])
                .style(style::link(false))
                .on_press(Message::ToggleMenu),
        );
    } else {
        for (link, label) in NAV_LINKS {
            bar = bar.push(
                button(text(label).size(16))
                    .padding(0)
                    .style(style::link(route.highlights(link)))
                    .on_press(Message::Navigate(link)),
            );
        }
        bar = bar.push(
            button(text("Get Quote").size(16))
                .padding([10, 22])
                .style(style::primary(1.0))
                .on_press(Message::Navigate(Route::Contact)),
        );
    }

    let treatment = nav.treatment(route);
    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0, 40])
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(move |_theme| style::header(treatment))
        .into()
}

/// Full-window menu for narrow windows. Clicking outside the links
/// closes it, as does the close control.
pub fn overlay<'a>(route: Route) -> Element<'a, Message> {
    let close = button(text("✕").size(28))
        .padding([4, 10])
        .style(style::link(false))
        .on_press(Message::CloseMenu);

    let mut links = Column::new().spacing(22).align_x(Alignment::Center);
    for (link, label) in NAV_LINKS {
        links = links.push(
            button(text(label).size(30))
                .style(style::link(route.highlights(link)))
                .on_press(Message::Navigate(link)),
        );
    }
    links = links.push(
        button(text("Get Quote").size(20))
            .padding([14, 36])
            .style(style::primary(1.0))
            .on_press(Message::Navigate(Route::Contact)),
    );

    let panel = column![
        row![horizontal_space(), close].padding([16, 30]),
        container(links).center(Length::Fill),
    ];

    opaque(
        mouse_area(container(panel).width(Length::Fill).height(Length::Fill).style(style::overlay))
            .on_press(Message::CloseMenu),
    )
}

/// Studio details and quick links
pub fn footer<'a>(config: &'a SiteConfig) -> Element<'a, Message> {
    let about = column![
        text(config.studio_name.as_str()).size(24).color(GOLD),
        text(TAGLINE).size(15).color(MUTED),
    ]
    .spacing(12)
    .width(Length::FillPortion(2));

    let mut links = Column::new().spacing(8).width(Length::FillPortion(1));
    links = links.push(text("Quick Links").size(17).color(IVORY));
    for (link, label) in NAV_LINKS {
        links = links.push(
            button(text(label).size(15))
                .padding(0)
                .style(style::link(false))
                .on_press(Message::Navigate(link)),
        );
    }

    let contact = column![
        text("Contact").size(17).color(IVORY),
        text(config.contact_email.as_str()).size(15).color(MUTED),
        text(config.contact_phone.as_str()).size(15).color(MUTED),
        text(config.studio_location.as_str()).size(15).color(MUTED),
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let year = chrono::Utc::now().format("%Y");
    let body = column![
        row![about, links, contact].spacing(40),
        text(format!("© {year} {}. All rights reserved.", config.studio_name))
            .size(13)
            .color(MUTED),
    ]
    .spacing(32);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .padding([40, 40])
        .clip(true)
        .style(|_theme| style::band(true))
        .into()
}
