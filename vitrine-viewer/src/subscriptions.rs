//! Subscription composition: the auto-advance timer and the frame tick.

use iced::Subscription;

use crate::constants::FRAME_INTERVAL;
use crate::message::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        // The auto-advance loop: fires for the lifetime of the screen,
        // each tick independent of whatever the animator is doing.
        iced::time::every(state.period).map(|_| Message::AutoAdvance),
    ];

    // Frame ticks feed the snap animator and the pulse. With the pulse
    // off, the strip only needs frames while a transition is in flight.
    if state.pulse_enabled || state.animator.is_active() {
        subscriptions
            .push(iced::time::every(FRAME_INTERVAL).map(Message::FrameTick));
    }

    Subscription::batch(subscriptions)
}
