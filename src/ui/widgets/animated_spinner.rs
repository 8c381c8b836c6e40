// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Dots drawn around the ring; the tail fades out behind the head.
const DOT_COUNT: usize = 10;

/// Circular dotted spinner whose head position is driven by `rotation`.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let ring_radius = frame.width().min(frame.height()) / 2.0 - 5.0;
                let dot_radius = ring_radius / 6.0;

                for i in 0..DOT_COUNT {
                    // Walk backwards from the head so the tail trails it.
                    #[allow(clippy::cast_precision_loss)]
                    let step = i as f32 / DOT_COUNT as f32;
                    let angle = self.rotation - step * TAU;
                    let position = Point::new(
                        center.x + ring_radius * angle.cos(),
                        center.y + ring_radius * angle.sin(),
                    );

                    let alpha = 1.0 - step * 0.85;
                    let dot = Path::circle(position, dot_radius);
                    frame.fill(
                        &dot,
                        Color {
                            a: alpha,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}
