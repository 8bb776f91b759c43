// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: menu bar, toolbars, image canvas, status bar.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::menu::{self, MenuKind, ViewContext as MenuViewContext};
use crate::ui::status_bar::{self, ViewContext as StatusBarViewContext};
use crate::ui::toolbar;
use crate::ui::viewer::{pane, ViewerState};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a ViewerState,
    pub open_menu: Option<MenuKind>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_bar = menu::view(MenuViewContext {
        i18n: ctx.i18n,
        open_menu: ctx.open_menu,
    })
    .map(Message::Menu);

    let toolbars = toolbar::view(ctx.i18n).map(Message::Action);

    let canvas = Container::new(pane::view::<Message>(ctx.viewer.image(), ctx.viewer.zoom()))
        .width(Length::Fill)
        .height(Length::Fill);

    let status = status_bar::view::<Message>(StatusBarViewContext {
        i18n: ctx.i18n,
        status: ctx.viewer.status_text(),
        zoom_percent: ctx
            .viewer
            .current()
            .map(|_| ctx.viewer.zoom().percent()),
    });

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(menu_bar)
        .push(toolbars)
        .push(canvas)
        .push(status)
        .into()
}
