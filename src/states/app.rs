//! Application State
//!
//! Persisted settings (locale, window bounds, member source, page size) and
//! the global store that hands out the state entities and the injected
//! member source.

use crate::constants::{DEFAULT_MEMBERS_URL, DEFAULT_PAGE_SIZE};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::MemberSource;
use crate::states::MembersState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

// ==================== Actions ====================

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }
}

// ==================== Persisted State ====================

const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("members-admin.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminAppState {
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    /// Remote member collection URL
    source_url: Option<String>,
    /// Rows per table page
    page_size: Option<usize>,
}

impl AdminAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Parse persisted state; an empty document yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    /// Current locale, falling back to English for unsupported codes
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if SUPPORTED_LOCALES.contains(&locale) => locale,
            _ => "en",
        }
    }

    pub fn source_url(&self) -> &str {
        self.source_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_MEMBERS_URL)
    }

    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_locale(&mut self, locale: impl Into<String>, cx: &mut Context<Self>) {
        let locale = locale.into();
        if self.locale.as_deref() != Some(locale.as_str()) {
            self.locale = Some(locale);
            cx.notify();
        }
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<AdminGlobalStore>()`
#[derive(Clone)]
pub struct AdminGlobalStore {
    app_state: Entity<AdminAppState>,
    members_state: Entity<MembersState>,
    source: Arc<dyn MemberSource>,
}

impl AdminGlobalStore {
    /// Create a new global store
    pub fn new(
        app_state: Entity<AdminAppState>,
        members_state: Entity<MembersState>,
        source: Arc<dyn MemberSource>,
    ) -> Self {
        Self {
            app_state,
            members_state,
            source,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<AdminAppState> {
        self.app_state.clone()
    }

    /// Get the members state entity
    pub fn members_state(&self) -> Entity<MembersState> {
        self.members_state.clone()
    }

    /// Get the injected member source
    pub fn source(&self) -> Arc<dyn MemberSource> {
        self.source.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a AdminAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AdminAppState, &mut Context<AdminAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for AdminGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &AdminAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AdminAppState, &mut Context<AdminAppState>) + Send + 'static,
{
    let store = cx.global::<AdminGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}
