//! Members Admin Library
//!
//! Desktop admin console for a member directory: fetches the member list
//! once, then searches, paginates, selects, edits and deletes it locally.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
