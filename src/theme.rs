use serde::{Deserialize, Serialize};

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Lenient parse of a stored preference; anything unknown is dark.
    pub fn from_preference(value: Option<&str>) -> Theme {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Translation key for the toggle button: it names the theme a click
    /// switches to.
    pub fn toggle_label_key(self) -> &'static str {
        match self.toggled() {
            Theme::Dark => "theme.dark",
            Theme::Light => "theme.light",
        }
    }

    /// Per-frame veil alpha for the rain trail.
    pub fn trail_alpha(self) -> f64 {
        match self {
            Theme::Dark => 0.08,
            Theme::Light => 0.04,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference() {
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some(" LIGHT ")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_preference(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_label_names_next_theme() {
        assert_eq!(Theme::Dark.toggle_label_key(), "theme.light");
        assert_eq!(Theme::Light.toggle_label_key(), "theme.dark");
    }

    #[test]
    fn test_trail_alpha_is_denser_in_dark() {
        assert!(Theme::Dark.trail_alpha() > Theme::Light.trail_alpha());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
