/// Similarity bar drawn under each result tile
use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::{Point, Rectangle, Renderer, Size, Theme};

/// Horizontal bar filled proportionally to a score in [0, 1]
#[derive(Debug, Clone, Copy)]
pub struct ScoreBar {
    pub score: f32,
}

impl ScoreBar {
    /// Width of the filled part for a bar `width` pixels wide
    pub fn filled_width(&self, width: f32) -> f32 {
        if self.score.is_finite() {
            width * self.score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl<Message> canvas::Program<Message> for ScoreBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        // Track
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette.background.strong.color);

        // Fill
        let filled = self.filled_width(bounds.width);
        if filled > 0.0 {
            frame.fill_rectangle(
                Point::ORIGIN,
                Size::new(filled, bounds.height),
                palette.primary.base.color,
            );
        }

        vec![frame.into_geometry()]
    }
}
