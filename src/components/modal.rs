//! Modal Component
//!
//! A centered dialog over a dimmed backdrop. Clicking the backdrop or the
//! close button invokes the close handler.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use std::rc::Rc;

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    width: f32,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            width: 400.0,
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Set the dialog width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element (buttons, right-aligned)
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let backdrop_close = self.on_close.clone();
        let button_close = self.on_close;

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                // Modal container; swallows clicks so they don't reach the backdrop
                v_flex()
                    .id("modal-container")
                    .w(px(self.width))
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .shadow_lg()
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    // Header
                    .child(
                        h_flex()
                            .px_6()
                            .py_4()
                            .items_center()
                            .justify_between()
                            .border_b_1()
                            .border_color(cx.theme().border)
                            .child(Label::new(self.title).text_lg())
                            .when_some(button_close, |el, handler| {
                                el.child(
                                    Button::new("modal-close")
                                        .ghost()
                                        .xsmall()
                                        .icon(IconName::Close)
                                        .on_click(move |_event, window, cx| handler(window, cx)),
                                )
                            }),
                    )
                    // Content
                    .child(v_flex().px_6().py_4().gap_3().children(self.children))
                    // Footer
                    .when(!self.footer.is_empty(), |el| {
                        el.child(
                            h_flex()
                                .px_6()
                                .py_3()
                                .gap_2()
                                .justify_end()
                                .border_t_1()
                                .border_color(cx.theme().border)
                                .children(self.footer),
                        )
                    }),
            )
    }
}
