//! Update loop: the auto-advance path, the observation path, and the
//! image pipeline completions all meet here.

use std::time::Instant;

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use crate::carousel::Easing;
use crate::constants::SNAP_DURATION;
use crate::message::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::AutoAdvance | Message::StepRight => {
            let next = state.gallery.advance_from(state.carousel.visible_index);
            start_transition(state, next, Instant::now());
            Task::none()
        }
        Message::StepLeft => {
            let len = state.gallery.len();
            let previous = (state.carousel.visible_index + len - 1) % len;
            start_transition(state, previous, Instant::now());
            Task::none()
        }
        Message::FrameTick(now) => {
            state.now = now;
            let Some(offset) = state.animator.tick(now) else {
                return Task::none();
            };
            state.carousel.set_scroll_x(offset);
            state.sync_background();
            scrollable::scroll_to(
                state.carousel.scrollable_id.clone(),
                AbsoluteOffset {
                    x: state.carousel.scroll_x,
                    y: 0.0,
                },
            )
        }
        Message::Scrolled(viewport) => {
            // Layout metrics only; drags never feed the backdrop.
            state.carousel.update_viewport(viewport);
            Task::none()
        }
        Message::ImageLoaded { url, result } => {
            match result {
                Ok(handle) => state.images.set_loaded(url, handle),
                Err(_) => state.images.set_failed(url),
            }
            Task::none()
        }
    }
}

/// Begin an animated scroll toward `target`'s aligned offset.
///
/// A transition already in flight is rebased from the current offset,
/// never awaited: ticks are independent and the most recent request
/// wins.
pub fn start_transition(state: &mut State, target: usize, now: Instant) {
    let target_x = state.carousel.index_to_scroll(target);
    state.animator.start(
        state.carousel.scroll_x,
        target_x,
        now,
        SNAP_DURATION,
        Easing::EaseOut,
    );
}
