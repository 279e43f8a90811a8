use iced::widget::{button, column, container, pick_list, row, text, text_input, Column};
use iced::{Element, Length, Size};

use super::HERO_SLOW;
use crate::config::SiteConfig;
use crate::motion::{Ease, LiveTweens, RevealSpec, TriggerBand, VisualState};
use crate::state::contact::{ContactForm, EventType, Field, SubmissionPhase};
use crate::ui::reveal::{fade_text, lifted};
use crate::ui::stage::{columns, Section, Stage};
use crate::ui::style::{self, GOLD, IVORY, MUTED};
use crate::ui::widgets::{band, page_hero, PAGE_HERO_HEIGHT};
use crate::ui::Context;
use crate::Message;

const PANELS: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_80, VisualState::hidden(80.0), 1000, Ease::Power3Out, 100);

const FORM_HEIGHT: f32 = 900.0;
const INFO_HEIGHT: f32 = 640.0;

const HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: By Appointment",
];

/// Inquiry form beside the studio's contact details
#[derive(Debug)]
pub struct ContactPage {
    stage: Stage,
    hero: Section,
    panels: Section,
    form: ContactForm,
}

impl ContactPage {
    pub fn new(live: LiveTweens) -> Self {
        let mut stage = Stage::new("contact", live);
        let hero = stage.section(HERO_SLOW, 3);
        let panels = stage.section(PANELS, 2);
        Self {
            stage,
            hero,
            panels,
            form: ContactForm::new(),
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    #[cfg(test)]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn heights(&self, viewport: Size) -> Vec<f32> {
        // Below the desktop breakpoint the details go under the form
        let body = if columns(viewport.width) < 3 {
            FORM_HEIGHT + INFO_HEIGHT
        } else {
            FORM_HEIGHT
        };
        vec![PAGE_HERO_HEIGHT, body]
    }

    pub fn view<'a>(&'a self, ctx: &Context<'a>) -> Element<'a, Message> {
        let heights = self.heights(ctx.viewport);
        let height = heights.get(1).copied().unwrap_or_default();

        let form = self.stage.visual(self.panels, 0, ctx.now);
        let info = self.stage.visual(self.panels, 1, ctx.now);
        let form = lifted(self.form_view(form), form).width(Length::Fill);
        let info = lifted(details(ctx.config, info), info).width(Length::Fill);

        let body: Element<'a, Message> = if columns(ctx.viewport.width) < 3 {
            column![form, info].spacing(48).into()
        } else {
            row![form, info].spacing(64).into()
        };

        column![
            page_hero(
                &self.stage,
                self.hero,
                ctx.now,
                "GET IN TOUCH",
                "Get in Touch",
                "Let's discuss how we can capture your special moments",
            ),
            band(body, height, false),
        ]
        .into()
    }

    fn form_view(&self, visual: VisualState) -> Element<'_, Message> {
        let draft = self.form.draft();
        let input = move |label: &'static str, field: Field, placeholder: &'static str| {
            column![
                fade_text(label, 14.0, MUTED, visual),
                text_input(placeholder, draft.field(field))
                    .on_input(move |value| Message::FieldChanged(field, value))
                    .padding(12)
                    .size(16),
            ]
            .spacing(8)
        };

        let event_type = column![
            fade_text("Event Type *", 14.0, MUTED, visual),
            pick_list(EventType::ALL, draft.event_type, Message::EventTypePicked)
                .placeholder("Select an option")
                .padding(12)
                .width(Length::Fill),
        ]
        .spacing(8);

        let submitting = self.form.phase() == SubmissionPhase::Submitting;
        let submit = button(
            container(text(if submitting { "Sending..." } else { "Send Message" }).size(18))
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(16)
        .style(style::primary(visual.opacity))
        .on_press_maybe((!self.form.submit_disabled()).then_some(Message::Submit));

        let mut form = Column::new()
            .spacing(20)
            .push(fade_text("Send Us a Message", 32.0, IVORY, visual))
            .push(input("Full Name *", Field::Name, "John Doe"))
            .push(input("Email Address *", Field::Email, "john@example.com"))
            .push(input("Phone Number", Field::Phone, "+1 (234) 567-890"))
            .push(event_type)
            .push(input("Event Date", Field::EventDate, "YYYY-MM-DD"))
            .push(input("Message *", Field::Message, "Tell us about your event and how we can help..."));

        if let Some(notice) = self.form.notice() {
            let color = match self.form.phase() {
                SubmissionPhase::Succeeded => style::SUCCESS,
                _ => style::DANGER,
            };
            form = form.push(
                container(text(notice).size(15).color(color))
                    .padding(14)
                    .width(Length::Fill)
                    .style(move |_theme| style::notice(color)),
            );
        }
        form.push(submit).into()
    }
}

/// Contact details and opening hours
fn details<'a>(config: &'a SiteConfig, visual: VisualState) -> Element<'a, Message> {
    let entry = |label: &'a str, value: &'a str| {
        column![
            fade_text(label, 15.0, GOLD, visual),
            fade_text(value, 16.0, IVORY, visual),
        ]
        .spacing(4)
    };

    let hours = HOURS
        .iter()
        .fold(Column::new().spacing(6), |hours, line| hours.push(fade_text(*line, 15.0, MUTED, visual)));

    column![
        fade_text("Contact Information", 32.0, IVORY, visual),
        fade_text(
            "Whether you're planning a wedding, organizing a corporate event or need professional photography, \
             we'd love to hear from you. Fill out the form or reach us directly.",
            16.0,
            MUTED,
            visual,
        ),
        entry("Email", &config.contact_email),
        entry("Phone", &config.contact_phone),
        entry("Location", &config.studio_location),
        fade_text("Business Hours", 22.0, IVORY, visual),
        hours,
    ]
    .spacing(22)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Instant;

    #[test]
    fn test_one_height_per_section() {
        let page = ContactPage::new(LiveTweens::new());
        assert_eq!(page.heights(Size::new(1280.0, 800.0)).len(), page.stage().sections());
        assert!(page.heights(Size::new(700.0, 800.0))[1] > page.heights(Size::new(1280.0, 800.0))[1]);
    }

    #[test]
    fn test_form_state_lives_with_the_page() {
        let mut page = ContactPage::new(LiveTweens::new());
        page.form_mut().edit(Field::Name, "Priya".to_string());
        page.form_mut().edit(Field::Email, "priya@example.com".to_string());
        page.form_mut().pick_event_type(EventType::Wedding);
        page.form_mut().edit(Field::Message, "March wedding".to_string());

        assert!(page.form_mut().begin_submit(Utc::now()).is_ok());
        assert!(page.form().submit_disabled());
    }

    #[test]
    fn test_panels_reveal_on_scroll() {
        let live = LiveTweens::new();
        let mut page = ContactPage::new(live.clone());
        let viewport = Size::new(1280.0, 800.0);
        let heights = page.heights(viewport);
        page.stage_mut().observe(&heights, 0.0, viewport.height, Instant::now());
        assert!(page.stage().has_played(page.panels));
        assert_eq!(live.count(), 2);
    }
}
