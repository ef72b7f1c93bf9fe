//! Edit Dialog
//!
//! Modal form over the edit buffer. Each input writes straight into the
//! buffer; Save commits it, Cancel or closing the modal discards it.

use gpui::{Context, Entity, Subscription, Window, prelude::*};
use gpui_component::{
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

use crate::constants::EDIT_DIALOG_WIDTH;
use crate::components::Modal;
use crate::domain::{Member, MemberField};
use crate::features::members::controller::MembersController;
use crate::features::members::page::MembersPage;
use crate::states::{i18n_common, i18n_members};

/// Input state for one open edit
pub struct EditForm {
    fields: Vec<(MemberField, Entity<InputState>)>,
    _subscriptions: Vec<Subscription>,
}

impl EditForm {
    /// Build inputs pre-filled from the buffer
    pub fn new(
        member: &Member,
        controller: &MembersController,
        window: &mut Window,
        cx: &mut Context<MembersPage>,
    ) -> Self {
        let mut fields = Vec::with_capacity(MemberField::ALL.len());
        let mut subscriptions = Vec::with_capacity(MemberField::ALL.len());

        for field in MemberField::ALL {
            let value = member.field(field).to_string();
            let input = cx.new(|cx| InputState::new(window, cx).default_value(value));

            let controller = controller.clone();
            subscriptions.push(cx.subscribe(&input, move |_this, state, event, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    let value = state.read(cx).value().to_string();
                    controller.change_field(field, value, cx);
                }
            }));

            fields.push((field, input));
        }

        Self {
            fields,
            _subscriptions: subscriptions,
        }
    }

    /// Render the modal
    pub fn render(&self, cx: &mut Context<MembersPage>) -> Modal {
        let mut modal = Modal::new(i18n_members(cx, "edit_title"))
            .width(EDIT_DIALOG_WIDTH)
            .on_close({
                let page = cx.weak_entity();
                move |_window, cx| {
                    page.update(cx, |this, cx| this.cancel_edit(cx)).ok();
                }
            });

        for (field, input) in &self.fields {
            modal = modal.child(
                v_flex()
                    .gap_1()
                    .child(Label::new(i18n_members(cx, field.label_key())).text_sm())
                    .child(Input::new(input).w_full()),
            );
        }

        modal
            .footer(
                Button::new("edit-cancel")
                    .ghost()
                    .label(i18n_common(cx, "cancel"))
                    .on_click(cx.listener(|this, _, _window, cx| this.cancel_edit(cx))),
            )
            .footer(
                Button::new("edit-save")
                    .primary()
                    .label(i18n_common(cx, "save"))
                    .on_click(cx.listener(|this, _, _window, cx| this.save_edit(cx))),
            )
    }
}
