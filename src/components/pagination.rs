//! Pagination Component
//!
//! Previous / numbered pages / next. Emits the chosen 1-based page number.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};
use gpui_component::{
    ActiveTheme, Disableable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
};
use std::rc::Rc;

/// Page buttons shown in full before gaps are introduced
const MAX_INLINE_PAGES: usize = 9;
/// Pages shown on each side of the current one when gapped
const SIBLINGS: usize = 1;

/// A slot in the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Lay out page buttons: everything when short, else first, last and the
/// current page's neighbours separated by gaps.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_INLINE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(SIBLINGS).max(2);
    let end = (current + SIBLINGS).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    summary: Option<SharedString>,
    previous_label: SharedString,
    next_label: SharedString,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            summary: None,
            previous_label: "‹".into(),
            next_label: "›".into(),
            on_page_change: None,
        }
    }

    /// Text shown on the left (e.g. item count)
    pub fn summary(mut self, summary: impl Into<SharedString>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Labels for the step buttons
    pub fn step_labels(
        mut self,
        previous: impl Into<SharedString>,
        next: impl Into<SharedString>,
    ) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn page_button(
        &self,
        id: (&'static str, usize),
        label: impl Into<SharedString>,
        target: usize,
        disabled: bool,
        active: bool,
    ) -> Button {
        let button = Button::new(id).small().label(label).disabled(disabled);
        let button = if active { button.primary() } else { button.ghost() };

        match self.on_page_change.clone() {
            Some(handler) if !disabled => {
                button.on_click(move |_event, window, cx| handler(target, window, cx))
            }
            _ => button,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let can_prev = current > 1 && total > 0;
        let can_next = current < total;

        let mut pages = h_flex().items_center().gap_1().child(self.page_button(
            ("members-page-prev", 0),
            self.previous_label.clone(),
            current.saturating_sub(1),
            !can_prev,
            false,
        ));

        for item in page_items(current, total) {
            pages = match item {
                PageItem::Page(page) => pages.child(self.page_button(
                    ("members-page", page),
                    page.to_string(),
                    page,
                    false,
                    page == current,
                )),
                PageItem::Gap => pages.child(
                    div()
                        .px_1()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("…"),
                ),
            };
        }

        pages = pages.child(self.page_button(
            ("members-page-next", 0),
            self.next_label.clone(),
            current + 1,
            !can_next,
            false,
        ));

        h_flex()
            .w_full()
            .px_4()
            .py_2()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .children(self.summary),
            )
            .child(pages)
    }
}
