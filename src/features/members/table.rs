//! Members Table
//!
//! Header row with the select-all checkbox, one row per visible member and
//! an empty-state message when there is nothing to show.

use gpui::{Context, SharedString, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use crate::components::{CheckState, Checkbox};
use crate::constants::{
    ACTIONS_COLUMN_WIDTH, CHECKBOX_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
};
use crate::domain::{Member, MemberField};
use crate::features::members::page::MembersPage;
use crate::states::{HeaderCheck, LoadState, MembersState, i18n_common, i18n_members};

impl From<HeaderCheck> for CheckState {
    fn from(check: HeaderCheck) -> Self {
        match check {
            HeaderCheck::Unchecked => CheckState::Unchecked,
            HeaderCheck::Indeterminate => CheckState::Indeterminate,
            HeaderCheck::Checked => CheckState::Checked,
        }
    }
}

/// Owned copy of what one frame renders, so the state borrow ends before
/// handlers are built.
pub struct TableSnapshot {
    pub rows: Vec<(Member, bool)>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub header: HeaderCheck,
    pub selected_count: usize,
    pub loading: bool,
    pub searching: bool,
    pub editing: bool,
}

impl TableSnapshot {
    pub fn capture(state: &MembersState) -> Self {
        let visible = state.visible();
        let rows = visible
            .rows
            .iter()
            .map(|member| ((*member).clone(), state.is_selected(&member.id)))
            .collect();

        Self {
            rows,
            total: visible.total,
            page: state.page(),
            page_count: state.page_count(),
            header: state.header_check(),
            selected_count: state.selected().len(),
            loading: matches!(state.load_state(), LoadState::Idle | LoadState::Loading),
            searching: !state.search().is_empty(),
            editing: state.is_editing(),
        }
    }

    /// Message shown in place of rows, if any
    fn empty_message_key(&self) -> Option<(&'static str, &'static str)> {
        if !self.rows.is_empty() {
            None
        } else if self.loading {
            Some(("common", "loading"))
        } else if self.total > 0 {
            Some(("members", "page_empty"))
        } else if self.searching {
            Some(("members", "no_match"))
        } else {
            Some(("members", "empty"))
        }
    }
}

fn text_cell(text: impl Into<SharedString>) -> impl IntoElement {
    div()
        .flex_1()
        .px_3()
        .overflow_hidden()
        .text_ellipsis()
        .whitespace_nowrap()
        .text_sm()
        .child(text.into())
}

impl MembersPage {
    fn render_header(&self, snapshot: &TableSnapshot, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let controller = self.controller.clone();
        let theme = cx.theme();

        let mut header = h_flex()
            .w_full()
            .h(px(TABLE_HEADER_HEIGHT))
            .items_center()
            .bg(theme.table_head)
            .text_color(theme.table_head_foreground)
            .border_b_1()
            .border_color(theme.table_row_border)
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex()
                    .justify_center()
                    .child(
                        Checkbox::new("members-select-all")
                            .state(snapshot.header)
                            .disabled(snapshot.rows.is_empty())
                            .on_toggle(move |_window, cx| controller.toggle_all(cx)),
                    ),
            );

        for field in MemberField::ALL {
            header = header.child(text_cell(i18n_members(cx, field.label_key())));
        }

        header.child(
            div()
                .w(px(ACTIONS_COLUMN_WIDTH))
                .px_3()
                .text_sm()
                .child(i18n_members(cx, "actions")),
        )
    }

    fn render_row(
        &self,
        ix: usize,
        member: Member,
        selected: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let (row_border, even_bg, hover_bg, active_bg) = (
            theme.table_row_border,
            theme.table_even,
            theme.table_hover,
            theme.table_active,
        );

        let toggle_controller = self.controller.clone();
        let toggle_id = member.id.clone();
        let delete_controller = self.controller.clone();
        let delete_id = member.id.clone();
        let edit_member = member.clone();

        h_flex()
            .id(("member-row", ix))
            .w_full()
            .h(px(TABLE_ROW_HEIGHT))
            .items_center()
            .border_b_1()
            .border_color(row_border)
            .when(ix % 2 == 1, |el| el.bg(even_bg))
            .when(selected, |el| el.bg(active_bg))
            .hover(move |style| style.bg(hover_bg))
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex()
                    .justify_center()
                    .child(
                        Checkbox::new(("member-check", ix))
                            .state(selected)
                            .on_toggle(move |_window, cx| toggle_controller.toggle(&toggle_id, cx)),
                    ),
            )
            .child(text_cell(member.name))
            .child(text_cell(member.email))
            .child(text_cell(member.role))
            .child(
                h_flex()
                    .w(px(ACTIONS_COLUMN_WIDTH))
                    .px_2()
                    .gap_1()
                    .child(
                        Button::new(("member-edit", ix))
                            .ghost()
                            .xsmall()
                            .label(i18n_common(cx, "edit"))
                            .on_click(cx.listener(move |this, _, window, cx| {
                                this.open_edit(&edit_member, window, cx);
                            })),
                    )
                    .child(
                        Button::new(("member-delete", ix))
                            .danger()
                            .xsmall()
                            .label(i18n_common(cx, "delete"))
                            .on_click(move |_, _, cx| delete_controller.delete_one(&delete_id, cx)),
                    ),
            )
    }

    pub(super) fn render_table(
        &self,
        snapshot: &TableSnapshot,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let header = self.render_header(snapshot, cx);

        let body = match snapshot.empty_message_key() {
            Some((namespace, key)) => {
                let message = match namespace {
                    "common" => i18n_common(cx, key),
                    _ => i18n_members(cx, key),
                };
                div()
                    .w_full()
                    .py_8()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(message)
                    .into_any_element()
            }
            None => {
                let rows: Vec<_> = snapshot
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(ix, (member, selected))| {
                        self.render_row(ix, member.clone(), *selected, cx)
                            .into_any_element()
                    })
                    .collect();
                v_flex().w_full().children(rows).into_any_element()
            }
        };

        v_flex()
            .id("members-table")
            .flex_1()
            .w_full()
            .overflow_y_scroll()
            .child(header)
            .child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Member {
        Member::new(id, format!("Name {id}"), format!("{id}@mail.com"), "member")
    }

    fn loaded(count: usize) -> MembersState {
        let mut state = MembersState::new(10);
        state.begin_load();
        state.finish_load(Ok((1..=count).map(|i| member(&i.to_string())).collect()));
        state
    }

    #[test]
    fn snapshot_shows_loading_before_fetch_resolves() {
        let mut state = MembersState::new(10);
        assert_eq!(
            TableSnapshot::capture(&state).empty_message_key(),
            Some(("common", "loading"))
        );

        state.begin_load();
        assert!(TableSnapshot::capture(&state).loading);
    }

    #[test]
    fn snapshot_distinguishes_empty_and_no_match() {
        let state = loaded(0);
        assert_eq!(
            TableSnapshot::capture(&state).empty_message_key(),
            Some(("members", "empty"))
        );

        let mut state = loaded(3);
        state.set_search("zzz");
        assert_eq!(
            TableSnapshot::capture(&state).empty_message_key(),
            Some(("members", "no_match"))
        );
    }

    #[test]
    fn snapshot_past_last_page_is_not_reported_as_empty() {
        let mut state = loaded(11);
        state.set_page(2);
        state.delete_one(&"11".into());

        let snapshot = TableSnapshot::capture(&state);
        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.total, 10);
        assert_eq!(snapshot.page, 2);
        assert_eq!(snapshot.empty_message_key(), Some(("members", "page_empty")));
    }

    #[test]
    fn snapshot_after_bulk_delete_of_last_page() {
        let mut state = loaded(12);
        state.set_page(2);
        state.toggle_all();
        assert_eq!(state.delete_selected(), 2);

        let snapshot = TableSnapshot::capture(&state);
        assert_eq!(snapshot.total, 10);
        assert_eq!(snapshot.empty_message_key(), Some(("members", "page_empty")));
    }

    #[test]
    fn snapshot_copies_rows_with_selection() {
        let mut state = loaded(12);
        state.toggle(&"2".into());

        let snapshot = TableSnapshot::capture(&state);
        assert_eq!(snapshot.rows.len(), 10);
        assert_eq!(snapshot.total, 12);
        assert_eq!(snapshot.page_count, 2);
        assert_eq!(snapshot.selected_count, 1);
        assert_eq!(snapshot.header, HeaderCheck::Indeterminate);
        assert!(snapshot.rows[1].1);
        assert!(!snapshot.rows[0].1);
        assert_eq!(snapshot.empty_message_key(), None);
    }

    #[test]
    fn header_check_maps_to_checkbox_state() {
        assert_eq!(CheckState::from(HeaderCheck::Checked), CheckState::Checked);
        assert_eq!(
            CheckState::from(HeaderCheck::Indeterminate),
            CheckState::Indeterminate
        );
        assert_eq!(CheckState::from(HeaderCheck::Unchecked), CheckState::Unchecked);
    }
}
