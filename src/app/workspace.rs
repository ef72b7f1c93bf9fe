//! Workspace - Main Shell
//!
//! Holds the title bar and the members page, and persists the window
//! bounds when the window closes.

use gpui::{Context, Entity, Focusable, Window, div, prelude::*};
use gpui_component::{ActiveTheme, v_flex};
use tracing::error;

use crate::features::members::MembersPage;
use crate::states::{AdminGlobalStore, save_app_state};
use crate::views::AdminTitleBar;

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<AdminTitleBar>,
    members_page: Entity<MembersPage>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| AdminTitleBar::new(window, cx));
        let members_page = cx.new(|cx| MembersPage::new(window, cx));

        // Page-level shortcuts need focus inside the page
        window.focus(&members_page.focus_handle(cx));

        window.on_window_should_close(cx, |window, cx| {
            let bounds = window.bounds();
            let store = cx.global::<AdminGlobalStore>().clone();
            let state = store.update(cx, |state, _cx| {
                state.set_bounds(bounds);
                state.clone()
            });

            // Saved synchronously; the app quits right after the last window closes
            if let Err(e) = save_app_state(&state) {
                error!(error = %e, "Failed to save window bounds");
            }
            true
        });

        Self {
            title_bar,
            members_page,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(div().flex_1().overflow_hidden().child(self.members_page.clone()))
    }
}
