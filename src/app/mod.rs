// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the viewer, the menu bar and localization,
//! and translates messages into side effects like native dialogs or image
//! loading.

mod dialogs;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::menu::MenuKind;
use crate::ui::state::ZoomFactor;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::ViewerState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Native dialog currently awaiting an answer. Actions are ignored until
/// its result message arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    OpenDialog,
    SaveDialog,
    Info(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: ViewerState,
    open_menu: Option<MenuKind>,
    modal: Option<Modal>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.viewer.current_path())
            .field("open_menu", &self.open_menu)
            .field("modal", &self.modal)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            viewer: ViewerState::default(),
            open_menu: None,
            modal: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config file and displays the
    /// image given on the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("using default settings: {warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        log::debug!("locale: {}", i18n.current_locale());

        let mut app = App {
            i18n,
            viewer: ViewerState::new(ZoomFactor::new(config.zoom_factor())),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let task = match flags.file_path {
            Some(path) => app.display(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn display(&mut self, path: PathBuf) -> Task<Message> {
        update::display_path(&mut self.update_context(), &path)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            viewer: &mut self.viewer,
            open_menu: &mut self.open_menu,
            modal: &mut self.modal,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.current() {
            Some(loaded) => format!("{} - {app_name}", loaded.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(&mut self.update_context(), message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            open_menu: self.open_menu,
        })
    }
}
