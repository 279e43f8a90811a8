/// Studio palette and widget styles
use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::state::navigation::Treatment;

pub const INK: Color = Color::from_rgb(0.051, 0.051, 0.059);
pub const CHARCOAL: Color = Color::from_rgb(0.094, 0.094, 0.106);
pub const SLATE: Color = Color::from_rgb(0.149, 0.149, 0.165);
pub const GOLD: Color = Color::from_rgb(0.831, 0.686, 0.216);
pub const IVORY: Color = Color::from_rgb(0.965, 0.957, 0.941);
pub const MUTED: Color = Color::from_rgb(0.62, 0.62, 0.66);
pub const SUCCESS: Color = Color::from_rgb(0.30, 0.69, 0.31);
pub const DANGER: Color = Color::from_rgb(0.90, 0.32, 0.30);

/// Dark theme with the gold accent
pub fn theme() -> Theme {
    Theme::custom(
        "Maelstrom".to_string(),
        Palette {
            background: INK,
            text: IVORY,
            primary: GOLD,
            success: SUCCESS,
            danger: DANGER,
        },
    )
}

/// `color` with its alpha multiplied by `opacity`
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Header bar: clear over the hero, solid once scrolled
pub fn header(treatment: Treatment) -> container::Style {
    match treatment {
        Treatment::Transparent => container::Style {
            text_color: Some(IVORY),
            ..container::Style::default()
        },
        Treatment::Solid => container::Style {
            text_color: Some(IVORY),
            background: Some(Background::Color(faded(INK, 0.95))),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 12.0,
            },
            ..container::Style::default()
        },
    }
}

/// Full-window overlay menu
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(IVORY),
        background: Some(Background::Color(faded(INK, 0.98))),
        ..container::Style::default()
    }
}

/// Alternating section backgrounds
pub fn band(dark: bool) -> container::Style {
    container::Style {
        text_color: Some(IVORY),
        background: Some(Background::Color(if dark { INK } else { CHARCOAL })),
        ..container::Style::default()
    }
}

/// Card surface, fading with its reveal
pub fn card(opacity: f32) -> container::Style {
    container::Style {
        text_color: Some(faded(IVORY, opacity)),
        background: Some(Background::Color(faded(SLATE, opacity))),
        border: Border {
            color: faded(Color::from_rgba(1.0, 1.0, 1.0, 0.08), opacity),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Small pill label
pub fn tag(opacity: f32) -> container::Style {
    container::Style {
        text_color: Some(faded(IVORY, opacity)),
        background: Some(Background::Color(faded(GOLD, 0.15 * opacity))),
        border: Border {
            color: faded(GOLD, 0.5 * opacity),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Form outcome banner tinted with `color`
pub fn notice(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(color, 0.12))),
        border: Border {
            color: faded(color, 0.6),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Image placeholder while a remote image is loading or missing
pub fn placeholder(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(Color::from_rgb(0.2, 0.18, 0.14), opacity))),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Solid gold call to action
pub fn primary(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.89, 0.76, 0.32),
            button::Status::Disabled => faded(GOLD, 0.45),
            button::Status::Active => GOLD,
        };
        button::Style {
            background: Some(Background::Color(faded(background, opacity))),
            text_color: faded(INK, opacity),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Outlined secondary action
pub fn outline(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: hovered.then_some(Background::Color(faded(IVORY, 0.1 * opacity))),
            text_color: faded(IVORY, opacity),
            border: Border {
                color: faded(IVORY, opacity),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Navigation link; `active` marks the current route
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = match status {
            _ if active => GOLD,
            button::Status::Hovered | button::Status::Pressed => GOLD,
            _ => IVORY,
        };
        button::Style {
            background: None,
            text_color: color,
            ..button::Style::default()
        }
    }
}

/// Filter chip
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (background, text) = if active {
            (Some(Background::Color(GOLD)), INK)
        } else if hovered {
            (Some(Background::Color(SLATE)), GOLD)
        } else {
            (None, IVORY)
        };
        button::Style {
            background,
            text_color: text,
            border: Border {
                color: if active { GOLD } else { faded(IVORY, 0.3) },
                width: 1.0,
                radius: 20.0.into(),
            },
            ..button::Style::default()
        }
    }
}
