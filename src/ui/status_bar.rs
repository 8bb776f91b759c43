// SPDX-License-Identifier: MPL-2.0
//! Status bar: the permanent image label and the zoom indicator.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{container, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Status line of the displayed image; placeholder text when `None`.
    pub status: Option<&'a str>,
    /// Zoom in percent, shown only while an image is displayed.
    pub zoom_percent: Option<u32>,
}

/// Text of the permanent label.
pub fn label_text(i18n: &I18n, status: Option<&str>) -> String {
    status.map_or_else(|| i18n.tr("status-placeholder"), str::to_owned)
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(label_text(ctx.i18n, ctx.status)).size(typography::CAPTION))
                .width(Length::Fill),
        );

    if let Some(percent) = ctx.zoom_percent {
        let zoom = ctx
            .i18n
            .tr_with_args("status-zoom", &[("percent", &percent.to_string())]);
        row = row.push(Text::new(zoom).size(typography::CAPTION));
    }

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(container::bordered_box)
        .into()
}
