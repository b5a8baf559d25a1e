//! Per-view UI preferences (theme and language).
//!
//! The browser keeps the user's choice in local storage and mirrors it into
//! `theme` / `lang` cookies so the server can render the right variant on the
//! first request. An explicit query parameter always wins. Without either,
//! the theme follows the `Sec-CH-Prefers-Color-Scheme` client hint.

use axum::http::{HeaderMap, HeaderName};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::i18n::Language;
use crate::theme::Theme;

pub const THEME_COOKIE: &str = "theme";
pub const LANG_COOKIE: &str = "lang";

/// Client hint carrying the OS colour scheme (`"dark"` / `"light"`).
pub const COLOR_SCHEME_HINT: HeaderName = HeaderName::from_static("sec-ch-prefers-color-scheme");

/// Query parameters accepted by page routes.
#[derive(Debug, Default, Deserialize)]
pub struct PreferenceQuery {
    pub theme: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    pub fn resolve(query: &PreferenceQuery, headers: &HeaderMap) -> Preferences {
        let jar = CookieJar::from_headers(headers);
        let pick = |param: &Option<String>, cookie: &str| -> Option<String> {
            param
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| jar.get(cookie).map(|c| c.value().to_string()))
        };

        let theme = pick(&query.theme, THEME_COOKIE).or_else(|| color_scheme_hint(headers));
        let language = pick(&query.lang, LANG_COOKIE);

        Preferences {
            theme: Theme::from_preference(theme.as_deref()),
            language: Language::from_preference(language.as_deref()),
        }
    }
}

fn color_scheme_hint(headers: &HeaderMap) -> Option<String> {
    headers
        .get(&COLOR_SCHEME_HINT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
