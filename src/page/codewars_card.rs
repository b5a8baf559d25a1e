//! HTML fragment for the Codewars widget on the GitHub section.

use crate::codewars::{CodewarsProfile, Rank};
use crate::i18n::{fill, translate, Language};
use crate::page::html::{escape_html, format_thousands};
use crate::profile::SiteProfile;

/// Per-language rank pills: (label, key under `ranks.languages`).
const LANGUAGE_PILLS: [(&str, &str); 2] = [("Python", "python"), ("JavaScript", "javascript")];

/// Render the card for a loaded profile, or the error string on failure.
pub fn render_codewars_card(
    result: Result<&CodewarsProfile, &str>,
    language: Language,
    site: &SiteProfile,
) -> String {
    match result {
        Ok(profile) => render_profile(profile, language, site),
        Err(error) => format!(
            r#"<div class="cw-error">{}</div>"#,
            escape_html(&fill(
                translate("codewars.error", language),
                &[("error", error)]
            ))
        ),
    }
}

fn render_profile(profile: &CodewarsProfile, language: Language, site: &SiteProfile) -> String {
    let username = profile.username().unwrap_or(site.codewars_username);
    let display_name = profile.display_name().unwrap_or(username);

    let clan = profile
        .clan_name()
        .map(|clan| format!(r#"<span class="cw-clan">{}</span>"#, escape_html(clan)))
        .unwrap_or_default();

    let mut stats = vec![format!(
        r#"<div>{}: <span class="cw-value">{}</span></div>"#,
        translate("codewars.honor", language),
        honor_text(profile)
    )];
    if let Some(position) = profile.leaderboard() {
        stats.push(format!(
            r#"<div>{}: <span class="cw-value">#{}</span></div>"#,
            translate("codewars.leaderboard", language),
            position
        ));
    }
    if let Some(completed) = profile.total_completed() {
        stats.push(format!(
            r#"<div>{}: <span class="cw-value">{}</span></div>"#,
            translate("codewars.completed", language),
            completed
        ));
    }

    let mut pills: Vec<String> = Vec::new();
    if let Some(rank) = profile.overall_rank() {
        pills.push(rank_pill(translate("codewars.rank_overall", language), &rank));
    }
    for (label, key) in LANGUAGE_PILLS {
        if let Some(rank) = profile.language_rank(key) {
            pills.push(rank_pill(label, &rank));
        }
    }

    format!(
        r#"<div class="cw-profile">
  <div class="cw-head">
    <a class="cw-name" href="{href}" target="_blank" rel="noreferrer">{name}</a>
    {clan}
  </div>
  <div class="cw-stats">{stats}</div>
  <div class="cw-ranks">{pills}</div>
</div>"#,
        href = escape_html(&site.codewars_profile_url(username)),
        name = escape_html(display_name),
        clan = clan,
        stats = stats.join(""),
        pills = pills.join(""),
    )
}

/// Honor is thousands-separated when numeric and shown verbatim otherwise.
fn honor_text(profile: &CodewarsProfile) -> String {
    match (profile.get("honor"), profile.honor_value()) {
        (_, Some(value)) => format_thousands(value),
        (Some(other), None) if !other.is_null() => escape_html(&other.to_string()),
        _ => String::new(),
    }
}

fn rank_pill(label: &str, rank: &Rank) -> String {
    let (background, border) = match rank.color.as_deref().and_then(rank_color_hex) {
        Some(hex) => (format!("{}33", hex), format!("{}66", hex)),
        None => (
            "rgba(0,0,0,0.2)".to_string(),
            "rgba(255,255,255,0.1)".to_string(),
        ),
    };
    let score = rank
        .score
        .map(|s| format!(r#" <span class="cw-muted">({})</span>"#, s))
        .unwrap_or_default();

    format!(
        r#"<div class="cw-pill" style="background:{};border:1px solid {}"><div class="cw-pill-label">{}</div><div class="cw-value">{}{}</div></div>"#,
        background,
        border,
        escape_html(label),
        escape_html(rank.name.as_deref().unwrap_or("")),
        score
    )
}

/// Codewars reports rank colours by name; map them to hex so an alpha
/// suffix can be appended. Hex values are accepted as-is.
fn rank_color_hex(color: &str) -> Option<&str> {
    match color {
        "white" => Some("#e6e6e6"),
        "yellow" => Some("#ecb613"),
        "blue" => Some("#3c7ebb"),
        "purple" => Some("#866cc7"),
        "black" => Some("#555555"),
        "red" => Some("#bb432c"),
        hex if hex.len() == 7
            && hex.starts_with('#')
            && hex[1..].chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            Some(hex)
        }
        _ => None,
    }
}
