//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set on the members page root element
pub const MEMBERS_CONTEXT: &str = "MembersPage";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Edit dialog actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum EditAction {
    /// Commit the edit buffer
    Save,
    /// Discard the edit buffer
    Cancel,
}

/// Pager actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum PageAction {
    /// Go to the previous page
    Previous,
    /// Go to the next page
    Next,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Edit dialog
        KeyBinding::new("secondary-enter", EditAction::Save, Some(MEMBERS_CONTEXT)),
        KeyBinding::new("escape", EditAction::Cancel, Some(MEMBERS_CONTEXT)),
        // Pager
        KeyBinding::new("alt-left", PageAction::Previous, Some(MEMBERS_CONTEXT)),
        KeyBinding::new("alt-right", PageAction::Next, Some(MEMBERS_CONTEXT)),
    ]
}
