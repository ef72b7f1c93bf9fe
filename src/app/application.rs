//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::app::workspace::Workspace;
use crate::constants::{
    DEFAULT_MEMBERS_URL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::{MenuAction, new_key_bindings};
use crate::services::{HttpMemberSource, MemberSource};
use crate::states::{
    AdminAppState, AdminGlobalStore, LocaleAction, MembersState, i18n_common,
    update_app_state_and_save,
};

/// Build the member source from the configured URL, falling back to the
/// public collection when the configured one is unusable.
fn build_source(url: &str) -> Result<Arc<dyn MemberSource>> {
    let source = match HttpMemberSource::new(url) {
        Ok(source) => source,
        Err(e) => {
            warn!(error = %e, url, "Invalid member source, using default");
            HttpMemberSource::new(DEFAULT_MEMBERS_URL)?
        }
    };
    Ok(Arc::new(source))
}

/// Run the members admin application
pub fn run_app() {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });
        cx.on_action(|action: &LocaleAction, cx: &mut App| {
            let code = action.code();
            update_app_state_and_save(cx, "locale", move |state, cx| {
                state.set_locale(code, cx);
            });
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = AdminAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load app state, using defaults");
            AdminAppState::new()
        });

        let source = match build_source(app_state.source_url()) {
            Ok(source) => source,
            Err(e) => {
                error!(error = %e, "Failed to create member source");
                cx.quit();
                return;
            }
        };
        info!(source = %source.describe(), page_size = app_state.page_size(), "Member source ready");

        let bounds = app_state.bounds().copied().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        // Initialize global entities
        let members_state = cx.new(|_| MembersState::new(app_state.page_size()));
        let app_state = cx.new(|_| app_state);
        cx.set_global(AdminGlobalStore::new(app_state, members_state, source));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(i18n_common(cx, "app_title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
