//! Screen composition: backdrop fill, backdrop image, tile strip.

use iced::widget::{
    Space, button, column, container, image, row, scrollable, stack, text,
};
use iced::{ContentFit, Element, Length, alignment};

use crate::constants::{STRIP_PADDING, STRIP_TOP_OFFSET, TILE_SIDE, TILE_SPACING};
use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views::{pulse_scale, tile};

pub fn view(state: &State) -> Element<'_, Message> {
    let backdrop: Element<'_, Message> =
        match state.images.handle(state.background.as_str()) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            None => Space::new(Length::Fill, Length::Fill).into(),
        };

    let overlay = column![
        Space::new(Length::Fill, Length::Fixed(STRIP_TOP_OFFSET)),
        strip(state),
    ]
    .width(Length::Fill);

    stack![
        container(backdrop)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::Backdrop.style()),
        overlay,
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The horizontal tile strip with its chevron controls.
fn strip(state: &State) -> Element<'_, Message> {
    let scale = if state.pulse_enabled {
        pulse_scale(state.pulse_elapsed())
    } else {
        1.0
    };

    let mut tiles = row![].spacing(TILE_SPACING);
    for image_ref in &state.gallery {
        tiles = tiles.push(tile(state.images.get(image_ref.as_str()), scale));
    }

    let strip = scrollable(tiles)
        .id(state.carousel.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fixed(TILE_SIDE));

    let left_button = button(text("‹").size(28))
        .on_press(Message::StepLeft)
        .padding([4.0, 12.0])
        .style(theme::Button::Chevron.style());
    let right_button = button(text("›").size(28))
        .on_press(Message::StepRight)
        .padding([4.0, 12.0])
        .style(theme::Button::Chevron.style());

    container(
        row![left_button, strip, right_button]
            .spacing(STRIP_PADDING)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill),
    )
    .padding([0.0, STRIP_PADDING])
    .into()
}
