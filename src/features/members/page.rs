//! Members Page
//!
//! Toolbar (title, search, bulk delete), members table, pager and the edit
//! dialog. Loads the member collection once when created.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, Subscription, Window, div, prelude::*,
};
use gpui_component::{
    ActiveTheme, Disableable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

use crate::components::Pagination;
use crate::domain::Member;
use crate::features::members::controller::MembersController;
use crate::features::members::edit_dialog::EditForm;
use crate::features::members::table::TableSnapshot;
use crate::helpers::{EditAction, MEMBERS_CONTEXT, PageAction};
use crate::states::{AdminGlobalStore, MembersState, i18n_format, i18n_members};

/// Search box width
const SEARCH_WIDTH: f32 = 260.0;

/// Members page component
pub struct MembersPage {
    members: Entity<MembersState>,
    pub(super) controller: MembersController,
    search_state: Entity<InputState>,
    edit_form: Option<EditForm>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl MembersPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AdminGlobalStore>().clone();
        let members = store.members_state();
        let controller = MembersController::new(members.clone(), store.source());

        let mut subscriptions = Vec::new();

        // Re-render on state changes
        subscriptions.push(cx.observe(&members, |_this, _model, cx| cx.notify()));

        // Create search input
        let search_state = cx.new(|cx| {
            let placeholder = i18n_members(cx, "search_placeholder");
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        // Re-translate the placeholder and re-render on locale changes
        subscriptions.push(cx.observe_in(
            &store.app_state(),
            window,
            |this, _model, window, cx| {
                let placeholder = i18n_members(cx, "search_placeholder");
                this.search_state.update(cx, |state, cx| {
                    state.set_placeholder(placeholder, window, cx);
                });
                cx.notify();
            },
        ));

        subscriptions.push(cx.subscribe(&search_state, |this, state, event, cx| {
            if matches!(event, InputEvent::Change { .. }) {
                let text = state.read(cx).value().to_string();
                this.controller.set_search(text, cx);
            }
        }));

        // Fetch-on-mount
        controller.load(cx);

        Self {
            members,
            controller,
            search_state,
            edit_form: None,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    // ==================== Edit ====================

    pub(super) fn open_edit(&mut self, member: &Member, window: &mut Window, cx: &mut Context<Self>) {
        self.controller.open_edit(member, cx);
        self.edit_form = Some(EditForm::new(member, &self.controller, window, cx));
        cx.notify();
    }

    pub(super) fn save_edit(&mut self, cx: &mut Context<Self>) {
        self.controller.save(cx);
        self.edit_form = None;
        cx.notify();
    }

    pub(super) fn cancel_edit(&mut self, cx: &mut Context<Self>) {
        self.controller.cancel(cx);
        self.edit_form = None;
        cx.notify();
    }

    fn on_edit_action(&mut self, action: &EditAction, _window: &mut Window, cx: &mut Context<Self>) {
        if self.edit_form.is_none() {
            cx.propagate();
            return;
        }
        match action {
            EditAction::Save => self.save_edit(cx),
            EditAction::Cancel => self.cancel_edit(cx),
        }
    }

    fn on_page_action(&mut self, action: &PageAction, _window: &mut Window, cx: &mut Context<Self>) {
        if self.edit_form.is_some() {
            return;
        }
        match action {
            PageAction::Previous => self.controller.previous_page(cx),
            PageAction::Next => self.controller.next_page(cx),
        }
    }

    // ==================== Render ====================

    fn render_toolbar(&self, snapshot: &TableSnapshot, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let controller = self.controller.clone();
        let selected_label = (snapshot.selected_count > 0).then(|| {
            i18n_format(
                cx,
                "members.selected",
                &[("count", &snapshot.selected_count.to_string())],
            )
        });

        h_flex()
            .w_full()
            .px_4()
            .py_3()
            .gap_3()
            .items_center()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(Label::new(i18n_members(cx, "title")).text_lg())
            .child(div().flex_1())
            .children(selected_label.map(|label| {
                Label::new(label)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
            }))
            .child(
                div()
                    .w(gpui::px(SEARCH_WIDTH))
                    .child(Input::new(&self.search_state)),
            )
            .child(
                Button::new("delete-selected")
                    .danger()
                    .label(i18n_members(cx, "delete_selected"))
                    .disabled(snapshot.selected_count == 0)
                    .on_click(move |_, _, cx| controller.delete_selected(cx)),
            )
    }

    fn render_pager(&self, snapshot: &TableSnapshot, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let controller = self.controller.clone();

        Pagination::new(snapshot.page, snapshot.page_count)
            .summary(i18n_format(
                cx,
                "members.total",
                &[("count", &snapshot.total.to_string())],
            ))
            .step_labels(i18n_members(cx, "previous"), i18n_members(cx, "next"))
            .on_page_change(move |page, _window, cx| controller.set_page(page, cx))
    }
}

impl Focusable for MembersPage {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MembersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let snapshot = TableSnapshot::capture(self.members.read(cx));

        // The buffer can be dropped behind our back (e.g. the record was deleted
        // and the state reset); keep the form in step with it.
        if !snapshot.editing && self.edit_form.is_some() {
            self.edit_form = None;
        }

        let toolbar = self.render_toolbar(&snapshot, cx);
        let table = self.render_table(&snapshot, cx);
        let pager = self.render_pager(&snapshot, cx);
        let dialog = self.edit_form.as_ref().map(|form| form.render(cx));

        v_flex()
            .id("members-page")
            .key_context(MEMBERS_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_edit_action))
            .on_action(cx.listener(Self::on_page_action))
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .child(toolbar)
            .child(table)
            .child(pager)
            .children(dialog)
    }
}
