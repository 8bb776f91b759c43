// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the image inside a scrollable canvas.
//!
//! The image is laid out at its pixel size times the current scale; the
//! scrollable shows scrollbars on both axes once it overflows the window.

use crate::media::ImageData;
use crate::ui::state::ZoomState;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Image, Scrollable};
use iced::{Element, Length, Size};

/// Canvas size for `image` at the current zoom, at least one pixel per axis.
#[must_use]
pub fn canvas_size(image: &ImageData, zoom: &ZoomState) -> Size {
    Size::new(
        zoom.scaled(image.width).max(1.0),
        zoom.scaled(image.height).max(1.0),
    )
}

/// Renders the displayed image, or an empty canvas when there is none.
pub fn view<'a, Message: 'a>(image: Option<&'a ImageData>, zoom: &ZoomState) -> Element<'a, Message> {
    let Some(image) = image else {
        return Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let size = canvas_size(image, zoom);
    let canvas = Image::new(image.handle.clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    Scrollable::new(canvas)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
