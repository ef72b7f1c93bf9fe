//! Members Controller
//!
//! Translates user gestures into `MembersState` updates and runs the
//! one-time member fetch.

use std::sync::Arc;

use gpui::{App, Entity};

use crate::domain::{Member, MemberField, MemberId};
use crate::services::{MemberSource, run_in_tokio};
use crate::states::MembersState;

/// Members page controller
#[derive(Clone)]
pub struct MembersController {
    members: Entity<MembersState>,
    source: Arc<dyn MemberSource>,
}

impl MembersController {
    /// Create a new controller
    pub fn new(members: Entity<MembersState>, source: Arc<dyn MemberSource>) -> Self {
        Self { members, source }
    }

    /// Apply a state mutation and notify observers
    fn apply<R>(&self, cx: &mut App, mutation: impl FnOnce(&mut MembersState) -> R) -> R {
        self.members.update(cx, |state, cx| {
            let result = mutation(state);
            cx.notify();
            result
        })
    }

    /// Fetch the member collection once and fill the state.
    ///
    /// Failures are logged by the state and never surface to the caller. If
    /// the state entity is gone by the time the fetch resolves, the update is
    /// dropped.
    pub fn load(&self, cx: &mut App) {
        tracing::info!(source = %self.source.describe(), "Loading members");
        self.apply(cx, MembersState::begin_load);

        let members = self.members.clone();
        let fetch = self.source.fetch();

        cx.spawn(async move |cx| {
            let result = run_in_tokio(fetch).await;
            let _ = members.update(cx, |state, cx| {
                state.finish_load(result);
                cx.notify();
            });
        })
        .detach();
    }

    // ==================== Search & Pagination ====================

    pub fn set_search(&self, text: String, cx: &mut App) {
        self.apply(cx, |state| state.set_search(text));
    }

    pub fn set_page(&self, page: usize, cx: &mut App) {
        self.apply(cx, |state| state.set_page(page));
    }

    pub fn previous_page(&self, cx: &mut App) {
        self.apply(cx, MembersState::previous_page);
    }

    pub fn next_page(&self, cx: &mut App) {
        self.apply(cx, MembersState::next_page);
    }

    // ==================== Selection ====================

    pub fn toggle(&self, id: &MemberId, cx: &mut App) {
        self.apply(cx, |state| state.toggle(id));
    }

    pub fn toggle_all(&self, cx: &mut App) {
        self.apply(cx, MembersState::toggle_all);
    }

    // ==================== Edit ====================

    pub fn open_edit(&self, member: &Member, cx: &mut App) {
        self.apply(cx, |state| state.open_edit(member));
    }

    pub fn change_field(&self, field: MemberField, value: String, cx: &mut App) {
        // Keystrokes don't change anything rendered outside the inputs
        self.members.update(cx, |state, _cx| state.change_field(field, value));
    }

    pub fn save(&self, cx: &mut App) -> Option<MemberId> {
        self.apply(cx, MembersState::save)
    }

    pub fn cancel(&self, cx: &mut App) {
        self.apply(cx, MembersState::cancel);
    }

    // ==================== Delete ====================

    pub fn delete_one(&self, id: &MemberId, cx: &mut App) {
        self.apply(cx, |state| state.delete_one(id));
    }

    pub fn delete_selected(&self, cx: &mut App) {
        let removed = self.apply(cx, MembersState::delete_selected);
        tracing::info!(removed, "Deleted selected members");
    }
}
