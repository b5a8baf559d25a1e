//! Decorative effects shared by the browser page and the terminal renderer.
//!
//! - `rain`: falling binary-glyph columns (background animation)
//! - `reveal`: scrambled text that settles left to right once it scrolls into view
//!
//! Both engines are pure state machines stepped one frame at a time with a
//! caller-supplied random source, so renderers own timing and tests can seed
//! the randomness.

pub mod rain;
pub mod reveal;

pub use rain::{Cell, CellKind, RainConfig, RainField};
pub use reveal::{Glyph, InViewOnce, Reveal, RevealConfig, RevealFrame};

use serde::Serialize;

use crate::profile::SiteProfile;
use crate::theme::Theme;

/// Effect parameters embedded into the page for the browser script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    pub accent: &'static str,
    pub opacity: f64,
    pub trail_alpha: TrailAlpha,
    pub rain: RainConfig,
    pub heading: RevealConfig,
    pub in_view: RevealConfig,
    pub in_view_threshold: f64,
}

/// Rain veil alpha per theme; the page can switch theme without a reload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailAlpha {
    pub dark: f64,
    pub light: f64,
}

impl EffectSettings {
    pub fn for_page(profile: &SiteProfile) -> Self {
        Self {
            accent: profile.colors.accent,
            opacity: profile.rain.opacity,
            trail_alpha: TrailAlpha {
                dark: Theme::Dark.trail_alpha(),
                light: Theme::Light.trail_alpha(),
            },
            rain: RainConfig::with_font_size(f64::from(profile.rain.font_size)),
            heading: RevealConfig::heading(),
            in_view: RevealConfig::in_view(),
            in_view_threshold: InViewOnce::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_profile_and_themes() {
        let profile = SiteProfile::get();
        let settings = EffectSettings::for_page(profile);

        assert_eq!(settings.accent, "#23d5ab");
        assert_eq!(settings.rain.font_size, 16.0);
        assert_eq!(settings.trail_alpha.dark, 0.08);
        assert_eq!(settings.trail_alpha.light, 0.04);
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let json = serde_json::to_value(EffectSettings::for_page(SiteProfile::get())).unwrap();

        assert_eq!(json["trailAlpha"]["dark"], 0.08);
        assert_eq!(json["trailAlpha"]["light"], 0.04);
        assert_eq!(json["inView"]["step"], 2);
        assert_eq!(json["rain"]["charset"], "01");
        assert!(json.get("in_view").is_none());
    }
}
