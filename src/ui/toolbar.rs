// SPDX-License-Identifier: MPL-2.0
//! File and View toolbars mirroring the menu actions.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::menu::Action;
use iced::{
    alignment::Vertical,
    widget::{button, container, rule, Container, Row, Text},
    Element, Length,
};

/// File toolbar: Open.
pub const FILE_ACTIONS: &[Action] = &[Action::Open];

/// View toolbar: zoom and navigation.
pub const VIEW_ACTIONS: &[Action] = &[
    Action::ZoomIn,
    Action::ZoomOut,
    Action::Previous,
    Action::Next,
];

/// Render both toolbars side by side, separated by a vertical rule.
pub fn view(i18n: &I18n) -> Element<'_, Action> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(group(i18n, FILE_ACTIONS))
        .push(rule::vertical(1))
        .push(group(i18n, VIEW_ACTIONS))
        .height(Length::Shrink);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(container::bordered_box)
        .into()
}

fn group<'a>(i18n: &I18n, actions: &[Action]) -> Element<'a, Action> {
    actions
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &action| {
            row.push(
                button(Text::new(i18n.tr(action.label_key())).size(typography::CAPTION))
                    .on_press(action)
                    .padding([spacing::XXS, spacing::XS])
                    .style(button::secondary),
            )
        })
        .into()
}
