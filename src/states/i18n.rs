//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::AdminGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AdminGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "members" namespace
pub fn i18n_members(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AdminGlobalStore>().read(cx).locale();
    t!(format!("members.{key}"), locale = locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `total: "{count} members"`
/// i18n_format(cx, "members.total", &[("count", "42")])
/// // Returns "42 members"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<AdminGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn search_placeholder_is_translated_per_locale() {
        let en = t!("members.search_placeholder", locale = "en");
        let zh = t!("members.search_placeholder", locale = "zh");
        assert_ne!(en, zh);
        assert_ne!(en, "members.search_placeholder");
    }

    #[test]
    fn page_empty_message_exists_in_both_locales() {
        for locale in ["en", "zh"] {
            let text = t!("members.page_empty", locale = locale);
            assert_ne!(text, "members.page_empty");
        }
    }
}
