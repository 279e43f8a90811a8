/// Rendering an element in its current reveal state
///
/// iced has no transform or opacity wrapper for arbitrary widgets, so a
/// `VisualState` is applied piecewise: opacity goes into text and surface
/// colors, scale into text size, and the vertical offset into top padding.
use iced::widget::{container, text, Container, Text};
use iced::{Color, Element, Padding};

use super::style::faded;
use crate::motion::VisualState;

/// Text drawn at `size` in `color`, faded and scaled by `visual`
pub fn fade_text<'a>(content: impl text::IntoFragment<'a>, size: f32, color: Color, visual: VisualState) -> Text<'a> {
    text(content)
        .size(size * visual.scale)
        .color(faded(color, visual.opacity))
}

/// Shift `content` down by the state's vertical offset
pub fn lifted<'a, Message: 'a>(content: impl Into<Element<'a, Message>>, visual: VisualState) -> Container<'a, Message> {
    container(content).padding(Padding {
        top: visual.offset_y.max(0.0),
        ..Padding::ZERO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_text_is_transparent() {
        // Opacity is the only channel a hidden element differs in at rest
        let hidden = VisualState::hidden(30.0);
        assert_eq!(faded(Color::WHITE, hidden.opacity).a, 0.0);
        assert_eq!(faded(Color::WHITE, VisualState::IDENTITY.opacity).a, 1.0);
    }
}
