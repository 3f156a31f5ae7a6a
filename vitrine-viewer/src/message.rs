//! Application messages.

use iced::widget::image::Handle;
use iced::widget::scrollable;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic auto-advance tick: scroll to the next tile.
    AutoAdvance,
    /// Manual single step toward the previous tile.
    StepLeft,
    /// Manual single step toward the next tile.
    StepRight,
    /// Frame pulse driving the snap animator and the tile scale effect.
    FrameTick(Instant),
    /// Viewport report from the strip's scrollable widget.
    Scrolled(scrollable::Viewport),
    /// An image fetch finished, one way or the other.
    ImageLoaded {
        url: String,
        result: Result<Handle, String>,
    },
}
