use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, Vector};

use crate::Message;

/// Number of horizontal shading bands in the hero overlay
const BANDS: usize = 24;

/// Hero background layer: a darkening overlay with a warm glow, scaled by
/// the scroll parallax and nudged toward the pointer
pub struct HeroBackdrop {
    /// Parallax scale, 1.0 to 1.1
    pub scale: f32,
    /// Pointer-follow offset in pixels
    pub offset: (f32, f32),
    /// Whether a photo sits underneath (the overlay is then translucent)
    pub over_image: bool,
}

impl HeroBackdrop {
    /// Darkness of band `index`: heavier at the top and bottom edges, like
    /// a black/70 → black/50 → black/70 gradient
    fn band_alpha(index: usize, over_image: bool) -> f32 {
        let t = (index as f32 + 0.5) / BANDS as f32;
        let edge = (t - 0.5).abs() * 2.0;
        let alpha = 0.5 + 0.2 * edge;
        if over_image {
            alpha
        } else {
            // No photo: fade toward a lighter charcoal in the middle
            0.85 + 0.15 * edge
        }
    }
}

impl Program<Message> for HeroBackdrop {
    type State = PointerState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let shift = Vector::new(self.offset.0, self.offset.1);

        // Warm glow behind the overlay, grows with the parallax
        let radius = bounds.width.max(bounds.height) * 0.35 * self.scale;
        let glow = Path::circle(center + shift, radius);
        frame.fill(&glow, Color::from_rgba(0.83, 0.69, 0.22, 0.10));
        let core = Path::circle(center + shift, radius * 0.45);
        frame.fill(&core, Color::from_rgba(0.83, 0.69, 0.22, 0.08));

        // Bands are laid out around the center so scaling zooms in place
        let band_height = bounds.height / BANDS as f32 * self.scale;
        for index in 0..BANDS {
            let y = center.y + (index as f32 - BANDS as f32 / 2.0) * band_height + shift.y;
            frame.fill_rectangle(
                Point::new(0.0, y),
                Size::new(bounds.width, band_height + 1.0),
                Color::from_rgba(0.0, 0.0, 0.0, Self::band_alpha(index, self.over_image)),
            );
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) = event {
            if let Some(position) = cursor.position_in(bounds) {
                let normalized = Point::new(position.x / bounds.width, position.y / bounds.height);
                // Sub-pixel moves don't change the drawing
                let moved = state
                    .last
                    .map_or(true, |last| last.distance(normalized) > 0.002);
                if moved {
                    state.last = Some(normalized);
                    return (canvas::event::Status::Ignored, Some(Message::Pointer(normalized)));
                }
            }
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// Last pointer position reported, normalized to the canvas
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub last: Option<Point>,
}
