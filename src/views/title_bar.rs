//! Title Bar Component
//!
//! Custom title bar with the app name and a language menu.

use crate::states::{AdminGlobalStore, LocaleAction, i18n_common};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct AdminTitleBar;

impl AdminTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the language dropdown menu
    fn render_locale_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let locale = cx.global::<AdminGlobalStore>().read(cx).locale();

        menu.label(i18n_common(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
    }
}

impl Render for AdminTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_common(cx, "app_title")).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().gap_2().mr_2().child(
                    Button::new("locale")
                        .tooltip(i18n_common(cx, "language"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| Self::render_locale_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
