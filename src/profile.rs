//! Static site profile: who the page is about and what it links to.

use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedRepo {
    pub name: &'static str,
    pub description: &'static str,
    pub repo_url: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    GitHub,
    Telegram,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
}

impl Contact {
    /// Link target for the "Open" button.
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email => format!("mailto:{}", self.value),
            _ => self.value.to_string(),
        }
    }

    /// Whether the link leaves the site (opened in a new tab).
    pub fn is_external(&self) -> bool {
        self.kind != ContactKind::Email
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub accent: &'static str,
    pub accent2: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RainSettings {
    pub font_size: u16,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub label: &'static str,
    /// Key into the page's inline icon set
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteProfile {
    pub display_name: &'static str,
    pub full_name: &'static str,
    pub age: u8,
    pub codewars_username: &'static str,
    pub github_username: &'static str,
    pub featured_repo: FeaturedRepo,
    pub contacts: Vec<Contact>,
    pub colors: Palette,
    pub rain: RainSettings,
    pub skills: Vec<Skill>,
}

static PROFILE: OnceLock<SiteProfile> = OnceLock::new();

impl SiteProfile {
    pub fn get() -> &'static SiteProfile {
        PROFILE.get_or_init(default_profile)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }

    pub fn codewars_profile_url(&self, username: &str) -> String {
        format!("https://www.codewars.com/users/{}", urlencoding::encode(username))
    }

    /// Contribution chart image, tinted with the accent colour.
    pub fn github_chart_url(&self) -> String {
        format!(
            "https://ghchart.rshah.org/{}/{}",
            self.colors.accent.trim_start_matches('#'),
            self.github_username
        )
    }
}

fn default_profile() -> SiteProfile {
    SiteProfile {
        display_name: "GrAz1p",
        full_name: "Alihan Torebekov",
        age: 13,
        codewars_username: "grazip777",
        github_username: "grazip777",
        featured_repo: FeaturedRepo {
            name: "My Django Starter",
            description: "A Dockerized Django API template with JWT auth, PostgreSQL, pytest, and GitHub Actions.",
            repo_url: "https://github.com/graz1p/django-starter",
            topics: &["Django", "DRF", "PostgreSQL", "Docker", "Pytest"],
        },
        contacts: vec![
            Contact {
                kind: ContactKind::GitHub,
                label: "GitHub",
                value: "https://github.com/grazip777",
            },
            Contact {
                kind: ContactKind::Telegram,
                label: "Telegram",
                value: "https://t.me/GrAz1p",
            },
            Contact {
                kind: ContactKind::LinkedIn,
                label: "LinkedIn",
                value: "https://www.linkedin.com/in/alihan-torebekov-9335a0376/",
            },
            Contact {
                kind: ContactKind::Email,
                label: "Email",
                value: "graz1p777@gmail.com",
            },
        ],
        colors: Palette {
            accent: "#23d5ab",
            accent2: "#00b3ff",
        },
        rain: RainSettings {
            font_size: 16,
            opacity: 0.5,
        },
        skills: [
            ("Python", "python"),
            ("Django", "django"),
            ("FastAPI", "fastapi"),
            ("Flask", "flask"),
            ("Docker", "docker"),
            ("JavaScript", "js"),
            ("HTML", "html"),
            ("CSS", "css"),
            ("SQLite", "sqlite"),
            ("PostgreSQL", "postgresql"),
            ("Pytest", "pytest"),
            ("Telebot", "telebot"),
            ("CSV / ETL", "csv"),
        ]
        .into_iter()
        .map(|(label, icon)| Skill { label, icon })
        .collect(),
    }
}
