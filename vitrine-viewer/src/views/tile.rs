//! A single carousel tile: fixed cell, cropped image, pulse transform.

use std::time::Duration;

use iced::widget::{Space, container, image};
use iced::{ContentFit, Element, Length, alignment};

use crate::constants::{PULSE_AMPLITUDE, PULSE_DIVISOR_MS, TILE_SIDE};
use crate::image_pipeline::ImageState;
use crate::message::Message;
use crate::theme;

/// Uniform pulse scale at `elapsed` since the screen's epoch.
///
/// Stateless: re-evaluated from the current clock on every redraw, so
/// smoothness is only as good as the redraw cadence.
pub fn pulse_scale(elapsed: Duration) -> f32 {
    1.0 + PULSE_AMPLITUDE * (elapsed.as_millis() as f32 / PULSE_DIVISOR_MS).sin()
}

/// Render one tile. The pulse scales the content inside a fixed,
/// clipped cell so the strip's layout stride never moves.
pub fn tile<'a>(entry: Option<ImageState>, scale: f32) -> Element<'a, Message> {
    let side = TILE_SIDE * scale;

    let content: Element<'a, Message> = match entry {
        Some(ImageState::Loaded(handle)) => image(handle)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(ContentFit::Cover)
            .into(),
        // Loading and failed entries both render as a blank card; load
        // failures are the pipeline's concern.
        _ => container(Space::new(Length::Fixed(side), Length::Fixed(side)))
            .style(theme::Container::Placeholder.style())
            .into(),
    };

    container(content)
        .width(Length::Fixed(TILE_SIDE))
        .height(Length::Fixed(TILE_SIDE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(theme::Container::Tile.style())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_starts_at_unity() {
        assert!((pulse_scale(Duration::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pulse_stays_within_amplitude_bounds() {
        for ms in (0..10_000).step_by(37) {
            let scale = pulse_scale(Duration::from_millis(ms));
            assert!((0.95..=1.05).contains(&scale), "scale {scale} at {ms}ms");
        }
    }

    #[test]
    fn pulse_varies_over_time() {
        let a = pulse_scale(Duration::from_millis(400));
        let b = pulse_scale(Duration::from_millis(900));
        assert!((a - b).abs() > 1e-3);
    }
}
