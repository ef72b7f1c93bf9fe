//! Checkbox Component
//!
//! Tri-state checkbox used for row selection and the select-all header.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::ActiveTheme;

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    fn mark(self) -> &'static str {
        match self {
            CheckState::Unchecked => "",
            CheckState::Indeterminate => "–",
            CheckState::Checked => "✓",
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            disabled: false,
            on_toggle: None,
        }
    }

    /// Set the visual state
    pub fn state(mut self, state: impl Into<CheckState>) -> Self {
        self.state = state.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let filled = self.state != CheckState::Unchecked;
        let theme = cx.theme();

        let (bg, border) = if filled {
            (theme.primary, theme.primary)
        } else {
            (theme.background, theme.input)
        };

        let mut checkbox = div()
            .id(self.id)
            .size(px(18.0))
            .rounded_sm()
            .border_1()
            .border_color(border)
            .bg(bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(theme.primary_foreground)
            .text_size(px(12.0))
            .child(self.state.mark());

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else if let Some(handler) = self.on_toggle {
            checkbox = checkbox
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(window, cx));
        }

        checkbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_maps_to_two_states() {
        assert_eq!(CheckState::from(true), CheckState::Checked);
        assert_eq!(CheckState::from(false), CheckState::Unchecked);
    }

    #[test]
    fn only_unchecked_has_no_mark() {
        assert!(CheckState::Unchecked.mark().is_empty());
        assert!(!CheckState::Indeterminate.mark().is_empty());
        assert_ne!(CheckState::Indeterminate.mark(), CheckState::Checked.mark());
    }
}
