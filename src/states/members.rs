//! Members State
//!
//! View state for the members table: the record set, search text, page
//! cursor, selection and edit buffer. All mutations are synchronous and run
//! on the UI thread; callers notify observers after each update.
//!
//! Selection is page-scoped: any mutation that can change the visible page
//! prunes the selection to ids still on it.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::{Member, MemberField, MemberId, MemberPage, page_count, view};
use crate::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Member loading state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not loaded yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Records loaded
    Loaded,
    /// Fetch failed; records were left untouched
    Failed(Arc<str>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Select-all checkbox state for the visible page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Indeterminate,
    Checked,
}

/// View state for the members table
#[derive(Debug, Clone)]
pub struct MembersState {
    records: Vec<Member>,
    search: String,
    page: usize,
    page_size: usize,
    selected: BTreeSet<MemberId>,
    edit: Option<Member>,
    load_state: LoadState,
}

impl MembersState {
    /// Create an empty state; a zero page size falls back to the default
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            selected: BTreeSet::new(),
            edit: None,
            load_state: LoadState::Idle,
        }
    }

    // ==================== Getters ====================

    pub fn records(&self) -> &[Member] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> &BTreeSet<MemberId> {
        &self.selected
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.contains(id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The edit buffer, if an edit is open
    pub fn edit(&self) -> Option<&Member> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The visible page of the filtered set
    pub fn visible(&self) -> MemberPage<'_> {
        view(&self.records, &self.search, self.page, self.page_size)
    }

    /// Number of pages for the current filter
    pub fn page_count(&self) -> usize {
        page_count(self.visible().total, self.page_size)
    }

    fn visible_ids(&self) -> Vec<MemberId> {
        self.visible().rows.into_iter().map(|m| m.id.clone()).collect()
    }

    /// Select-all checkbox state
    pub fn header_check(&self) -> HeaderCheck {
        let visible = self.visible_ids();
        let checked = visible.iter().filter(|id| self.selected.contains(*id)).count();

        if checked == 0 {
            HeaderCheck::Unchecked
        } else if checked == visible.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }

    // ==================== Loading ====================

    /// Mark the fetch as started
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Apply the fetch outcome. On failure the records are kept as they are.
    pub fn finish_load(&mut self, result: Result<Vec<Member>>) {
        match result {
            Ok(members) => {
                info!(count = members.len(), "Members loaded");
                self.records = members;
                self.load_state = LoadState::Loaded;
                self.retain_visible_selection();
            }
            Err(e) => {
                error!(error = %e, "Failed to load members");
                self.load_state = LoadState::Failed(e.to_string().into());
            }
        }
    }

    // ==================== Search & Pagination ====================

    /// Set the search text and go back to the first page
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
        self.retain_visible_selection();
        debug!(search = %self.search, "Search changed");
    }

    /// Jump to a page as emitted by the pager, without range validation
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.retain_visible_selection();
        debug!(page, "Page changed");
    }

    /// Step back one page, stopping at the first
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.set_page(self.page - 1);
        }
    }

    /// Step forward one page, stopping at the last
    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.set_page(self.page + 1);
        }
    }

    // ==================== Selection ====================

    /// Flip membership of one id
    pub fn toggle(&mut self, id: &MemberId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Clear the selection if the whole page is selected, else select exactly the page
    pub fn toggle_all(&mut self) {
        let visible = self.visible_ids();
        if visible.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected = visible.into_iter().collect();
        }
    }

    fn retain_visible_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let visible: BTreeSet<MemberId> = self.visible_ids().into_iter().collect();
        self.selected.retain(|id| visible.contains(id));
    }

    // ==================== Edit ====================

    /// Open the edit buffer on a copy of `member`, replacing any open edit
    pub fn open_edit(&mut self, member: &Member) {
        debug!(id = %member.id, "Edit opened");
        self.edit = Some(member.clone());
    }

    /// Change one field of the edit buffer; no-op when no edit is open
    pub fn change_field(&mut self, field: MemberField, value: impl Into<String>) {
        if let Some(buffer) = self.edit.as_mut() {
            buffer.set_field(field, value);
        }
    }

    /// Commit the edit buffer by id, keeping the record's position.
    ///
    /// Returns the saved id, or `None` when no edit was open.
    pub fn save(&mut self) -> Option<MemberId> {
        let buffer = self.edit.take()?;
        let id = buffer.id.clone();

        self.records = std::mem::take(&mut self.records)
            .into_iter()
            .map(|m| if m.id == buffer.id { buffer.clone() } else { m })
            .collect();
        self.retain_visible_selection();

        debug!(id = %id, "Edit saved");
        Some(id)
    }

    /// Discard the edit buffer
    pub fn cancel(&mut self) {
        if let Some(buffer) = self.edit.take() {
            debug!(id = %buffer.id, "Edit cancelled");
        }
    }

    // ==================== Delete ====================

    /// Remove one record; returns whether anything was removed
    pub fn delete_one(&mut self, id: &MemberId) -> bool {
        let before = self.records.len();
        self.records.retain(|m| &m.id != id);
        let removed = self.records.len() != before;

        if removed {
            self.selected.remove(id);
            self.retain_visible_selection();
            debug!(id = %id, "Member deleted");
        }
        removed
    }

    /// Remove every selected record and clear the selection; returns the count removed
    pub fn delete_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }

        let before = self.records.len();
        let selected = std::mem::take(&mut self.selected);
        self.records.retain(|m| !selected.contains(&m.id));

        let removed = before - self.records.len();
        debug!(removed, "Selected members deleted");
        removed
    }
}

impl Default for MembersState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::MemberSource;
    use futures::FutureExt;
    use futures::executor::block_on;
    use futures::future::BoxFuture;

    struct FakeSource {
        members: Option<Vec<Member>>,
    }

    impl MemberSource for FakeSource {
        fn fetch(&self) -> BoxFuture<'static, Result<Vec<Member>>> {
            let result = match &self.members {
                Some(members) => Ok(members.clone()),
                None => Err(Error::HttpStatus {
                    status: 500,
                    url: "fake://members".to_string(),
                }),
            };
            async move { result }.boxed()
        }

        fn describe(&self) -> String {
            "fake://members".to_string()
        }
    }

    fn member(id: u32, name: &str) -> Member {
        Member::new(
            id.to_string(),
            name,
            format!("{}@example.com", name.to_lowercase()),
            "member",
        )
    }

    fn numbered(n: u32) -> Vec<Member> {
        (1..=n).map(|i| member(i, &format!("Member {i}"))).collect()
    }

    fn loaded(members: Vec<Member>) -> MembersState {
        let mut state = MembersState::new(10);
        state.finish_load(Ok(members));
        state
    }

    fn record_ids(state: &MembersState) -> Vec<String> {
        state.records().iter().map(|m| m.id.to_string()).collect()
    }

    fn id(s: &str) -> MemberId {
        MemberId::from(s)
    }

    #[test]
    fn load_success_keeps_order() {
        let members = vec![member(3, "Carol"), member(1, "Alice"), member(2, "Bob")];
        let source = FakeSource { members: Some(members.clone()) };

        let mut state = MembersState::default();
        state.begin_load();
        assert!(state.load_state().is_loading());
        state.finish_load(block_on(source.fetch()));

        assert_eq!(state.records(), members.as_slice());
        assert_eq!(state.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn load_failure_leaves_records_empty() {
        let source = FakeSource { members: None };

        let mut state = MembersState::default();
        state.begin_load();
        state.finish_load(block_on(source.fetch()));

        assert!(state.records().is_empty());
        assert!(matches!(state.load_state(), LoadState::Failed(_)));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn search_filters_and_resets_page() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "bob")]);

        state.set_search("Al");
        let names: Vec<_> = state.visible().rows.iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Alice"]);

        state.set_search("");
        assert_eq!(state.visible().total, 2);

        state.set_search("BO");
        assert_eq!(state.visible().rows[0].name, "bob");
    }

    #[test]
    fn any_search_resets_to_first_page() {
        let mut state = loaded(numbered(30));
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.set_search("Member");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn pagination_slices_pages() {
        let mut state = loaded(numbered(25));
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.visible().rows.len(), 10);

        state.set_page(3);
        let ids: Vec<_> = state.visible().rows.iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, vec!["21", "22", "23", "24", "25"]);
    }

    #[test]
    fn set_page_does_not_validate_range() {
        let mut state = loaded(numbered(5));
        state.set_page(9);
        assert_eq!(state.page(), 9);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn previous_and_next_stop_at_bounds() {
        let mut state = loaded(numbered(25));
        state.previous_page();
        assert_eq!(state.page(), 1);

        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);

        state.previous_page();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn edit_save_replaces_fields_in_place() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "Bob"), member(3, "Carol")]);
        let original = state.records()[1].clone();

        state.open_edit(&original);
        state.change_field(MemberField::Name, "X");
        assert_eq!(state.save(), Some(id("2")));

        let saved = &state.records()[1];
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.name, "X");
        assert_eq!(saved.email, original.email);
        assert_eq!(saved.role, original.role);
        assert_eq!(record_ids(&state), vec!["1", "2", "3"]);
        assert!(state.edit().is_none());
    }

    #[test]
    fn save_accepts_empty_fields() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "Bob"), member(3, "Carol")]);
        let original = state.records()[1].clone();

        state.open_edit(&original);
        state.change_field(MemberField::Name, "");
        state.change_field(MemberField::Email, "");
        assert_eq!(state.save(), Some(id("2")));

        let saved = &state.records()[1];
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.name, "");
        assert_eq!(saved.email, "");
        assert_eq!(saved.role, original.role);
        assert_eq!(record_ids(&state), vec!["1", "2", "3"]);
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut state = loaded(vec![member(1, "Alice")]);
        let before = state.records().to_vec();

        state.open_edit(&before[0]);
        state.change_field(MemberField::Name, "X");
        state.cancel();

        assert_eq!(state.records(), before.as_slice());
        assert!(!state.is_editing());
    }

    #[test]
    fn save_without_edit_is_noop() {
        let mut state = loaded(vec![member(1, "Alice")]);
        let before = state.records().to_vec();

        state.change_field(MemberField::Name, "X");
        assert_eq!(state.save(), None);
        assert_eq!(state.records(), before.as_slice());
    }

    #[test]
    fn opening_second_edit_replaces_first() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "Bob")]);
        let first = state.records()[0].clone();
        let second = state.records()[1].clone();

        state.open_edit(&first);
        state.change_field(MemberField::Name, "changed");
        state.open_edit(&second);
        state.save();

        assert_eq!(state.records()[0].name, "Alice");
        assert_eq!(state.records()[1].name, "Bob");
    }

    #[test]
    fn save_of_deleted_record_changes_nothing() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "Bob")]);
        let first = state.records()[0].clone();

        state.open_edit(&first);
        state.delete_one(&id("1"));
        state.save();

        assert_eq!(record_ids(&state), vec!["2"]);
    }

    #[test]
    fn delete_one_removes_exactly_that_record() {
        let mut state = loaded(numbered(4));

        assert!(state.delete_one(&id("2")));
        assert_eq!(record_ids(&state), vec!["1", "3", "4"]);

        assert!(!state.delete_one(&id("42")));
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn delete_selected_removes_selection_and_clears_it() {
        let mut state = loaded(numbered(4));
        state.toggle(&id("1"));
        state.toggle(&id("3"));

        assert_eq!(state.delete_selected(), 2);
        assert_eq!(record_ids(&state), vec!["2", "4"]);
        assert!(!state.has_selection());
    }

    #[test]
    fn delete_selected_with_empty_selection_is_noop() {
        let mut state = loaded(numbered(3));
        assert_eq!(state.delete_selected(), 0);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = loaded(numbered(3));
        state.toggle(&id("2"));
        assert!(state.is_selected(&id("2")));
        state.toggle(&id("2"));
        assert!(!state.is_selected(&id("2")));
    }

    #[test]
    fn toggle_all_twice_restores_selection() {
        let mut state = loaded(numbered(25));

        state.toggle_all();
        assert_eq!(state.selected().len(), 10);
        assert_eq!(state.header_check(), HeaderCheck::Checked);
        state.toggle_all();
        assert!(state.selected().is_empty());

        // Starting from a fully selected page
        state.toggle_all();
        let full = state.selected().clone();
        state.toggle_all();
        state.toggle_all();
        assert_eq!(state.selected(), &full);
    }

    #[test]
    fn toggle_all_from_partial_selects_whole_page() {
        let mut state = loaded(numbered(25));
        state.toggle(&id("4"));
        assert_eq!(state.header_check(), HeaderCheck::Indeterminate);

        state.toggle_all();
        let expected: BTreeSet<MemberId> = (1..=10).map(|i| id(&i.to_string())).collect();
        assert_eq!(state.selected(), &expected);
    }

    #[test]
    fn selection_is_dropped_when_page_changes() {
        let mut state = loaded(numbered(25));
        state.toggle_all();

        state.set_page(2);
        assert!(state.selected().is_empty());
        assert_eq!(state.header_check(), HeaderCheck::Unchecked);
    }

    #[test]
    fn selection_is_pruned_to_search_results() {
        let mut state = loaded(vec![member(1, "Alice"), member(2, "Bob"), member(3, "Alan")]);
        state.toggle(&id("1"));
        state.toggle(&id("2"));

        state.set_search("al");
        let expected: BTreeSet<MemberId> = [id("1")].into_iter().collect();
        assert_eq!(state.selected(), &expected);
        assert_eq!(state.header_check(), HeaderCheck::Indeterminate);
    }

    #[test]
    fn header_unchecked_on_empty_page() {
        let state = loaded(Vec::new());
        assert_eq!(state.header_check(), HeaderCheck::Unchecked);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(MembersState::new(0).page_size(), DEFAULT_PAGE_SIZE);
    }
}
