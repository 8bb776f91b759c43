// SPDX-License-Identifier: MPL-2.0
//! Menu bar with the File and View dropdowns.
//!
//! File holds Open, Save As and Exit; View holds the zoom and navigation
//! actions. Picking an item closes the menu and emits the [`Action`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Padding, Theme,
};

/// Every user command of the viewer, shared by menus, toolbars and shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    SaveAs,
    Exit,
    ZoomIn,
    ZoomOut,
    Previous,
    Next,
}

impl Action {
    /// Returns the i18n key of the action's label.
    pub fn label_key(self) -> &'static str {
        match self {
            Action::Open => "action-open",
            Action::SaveAs => "action-save-as",
            Action::Exit => "action-exit",
            Action::ZoomIn => "action-zoom-in",
            Action::ZoomOut => "action-zoom-out",
            Action::Previous => "action-previous",
            Action::Next => "action-next",
        }
    }
}

/// Top-level menus of the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    File,
    View,
}

impl MenuKind {
    pub const ALL: [MenuKind; 2] = [MenuKind::File, MenuKind::View];

    pub fn title_key(self) -> &'static str {
        match self {
            MenuKind::File => "menu-file",
            MenuKind::View => "menu-view",
        }
    }

    /// Items of the dropdown, in display order.
    pub fn actions(self) -> &'static [Action] {
        match self {
            MenuKind::File => &[Action::Open, Action::SaveAs, Action::Exit],
            MenuKind::View => &[
                Action::ZoomIn,
                Action::ZoomOut,
                Action::Previous,
                Action::Next,
            ],
        }
    }
}

/// Contextual data needed to render the menu bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open_menu: Option<MenuKind>,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(MenuKind),
    Pick(Action),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Action(Action),
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, open_menu: &mut Option<MenuKind>) -> Event {
    match message {
        Message::ToggleMenu(kind) => {
            *open_menu = if *open_menu == Some(kind) {
                None
            } else {
                Some(kind)
            };
            Event::None
        }
        Message::Pick(action) => {
            *open_menu = None;
            Event::Action(action)
        }
    }
}

/// Render the menu bar and, below it, the open dropdown if any.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_bar(&ctx));

    if let Some(kind) = ctx.open_menu {
        content = content.push(build_dropdown(ctx.i18n, kind));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = MenuKind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &kind| {
            let header = button(Text::new(ctx.i18n.tr(kind.title_key())).size(typography::BODY))
                .on_press(Message::ToggleMenu(kind))
                .padding([spacing::XXS, spacing::XS]);
            let header = if ctx.open_menu == Some(kind) {
                header.style(button::primary)
            } else {
                header.style(menu_item_style)
            };
            row.push(header)
        })
        .align_y(Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(container::bordered_box)
        .into()
}

/// Build the dropdown of `kind`, shifted under its header.
fn build_dropdown<'a>(i18n: &'a I18n, kind: MenuKind) -> Element<'a, Message> {
    let items = kind
        .actions()
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, &action| {
            column.push(build_menu_item(i18n.tr(action.label_key()), action))
        });

    let offset = match kind {
        MenuKind::File => 0.0,
        MenuKind::View => sizing::MENU_WIDTH / 3.0,
    };

    let dropdown = Container::new(items)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    Container::new(dropdown)
        .padding(Padding {
            left: spacing::XXS + offset,
            ..Padding::ZERO
        })
        .into()
}

fn build_menu_item<'a>(label: String, action: Action) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Pick(action))
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu headers and items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_view_renders_closed_and_open() {
        let i18n = I18n::default();
        let _closed = view(ViewContext {
            i18n: &i18n,
            open_menu: None,
        });
        for kind in MenuKind::ALL {
            let _open = view(ViewContext {
                i18n: &i18n,
                open_menu: Some(kind),
            });
        }
    }

    #[test]
    fn toggle_menu_opens_switches_and_closes() {
        let mut open_menu = None;

        assert_eq!(update(Message::ToggleMenu(MenuKind::File), &mut open_menu), Event::None);
        assert_eq!(open_menu, Some(MenuKind::File));

        update(Message::ToggleMenu(MenuKind::View), &mut open_menu);
        assert_eq!(open_menu, Some(MenuKind::View));

        update(Message::ToggleMenu(MenuKind::View), &mut open_menu);
        assert_eq!(open_menu, None);
    }

    #[test]
    fn picking_an_item_closes_menu_and_emits_action() {
        let mut open_menu = Some(MenuKind::File);
        let event = update(Message::Pick(Action::SaveAs), &mut open_menu);
        assert_eq!(open_menu, None);
        assert_eq!(event, Event::Action(Action::SaveAs));
    }

    #[test]
    fn menus_hold_the_expected_actions() {
        assert_eq!(
            MenuKind::File.actions(),
            &[Action::Open, Action::SaveAs, Action::Exit]
        );
        assert_eq!(
            MenuKind::View.actions(),
            &[Action::ZoomIn, Action::ZoomOut, Action::Previous, Action::Next]
        );
    }

    #[test]
    fn every_label_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        for kind in MenuKind::ALL {
            assert!(!i18n.tr(kind.title_key()).starts_with("MISSING"));
            for action in kind.actions() {
                assert!(!i18n.tr(action.label_key()).starts_with("MISSING"));
            }
        }
        assert_eq!(i18n.tr(Action::Previous.label_key()), "Previous Image");
        assert_eq!(i18n.tr(Action::Next.label_key()), "Next Image");
    }
}
