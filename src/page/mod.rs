//! Server-side page rendering.
//!
//! Everything is rendered into plain strings; client behaviour (rain canvas,
//! text reveal, theme persistence, copy buttons, the Codewars widget fetch)
//! lives in `assets/site.js` and reads its parameters from `data-*`
//! attributes written here.

mod codewars_card;
mod html;
mod icons;

pub use codewars_card::render_codewars_card;
pub use html::escape_html;

use crate::effects::EffectSettings;
use crate::i18n::{fill, translate, Language};
use crate::preferences::Preferences;
use crate::profile::SiteProfile;
use crate::theme::Theme;
use html::external_attrs;

/// Stylesheet and script served next to the page.
pub const SITE_CSS: &str = include_str!("../../assets/site.css");
pub const SITE_JS: &str = include_str!("../../assets/site.js");

/// Nav anchors in display order: (fragment id, translation key).
const SECTIONS: [(&str, &str); 5] = [
    ("about", "nav.about"),
    ("skills", "nav.skills"),
    ("projects", "nav.projects"),
    ("github", "nav.github"),
    ("contact", "nav.contact"),
];

#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteProfile,
    pub prefs: Preferences,
    /// Year printed in the footer
    pub year: i32,
}

impl PageContext<'_> {
    fn t(&self, key: &'static str) -> String {
        escape_html(translate(key, self.language()))
    }

    fn language(&self) -> Language {
        self.prefs.language
    }

    fn theme(&self) -> Theme {
        self.prefs.theme
    }
}

/// Render the complete landing page.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let site = ctx.site;
    let effects = serde_json::to_string(&EffectSettings::for_page(site))
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" class="{theme_class}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{full_name} - Portfolio</title>
    <meta name="description" content="Portfolio of {full_name}, a passionate software developer specializing in backend web development, Django, and testing.">
    <link rel="stylesheet" href="/assets/site.css">
    <style>:root{{--c1:{accent};--c2:{accent2}}}</style>
</head>
<body data-effects="{effects}">
<canvas id="matrix-rain" aria-hidden="true"></canvas>
<div class="page">
{header}
<main class="container">
{hero}
{about}
{skills}
{projects}
{github}
{contact}
</main>
{footer}
<a href="#home" class="sr-only">{back_to_top}</a>
</div>
<script src="/assets/site.js" defer></script>
</body>
</html>
"##,
        lang = ctx.language().code(),
        theme_class = ctx.theme().as_str(),
        full_name = escape_html(site.full_name),
        accent = site.colors.accent,
        accent2 = site.colors.accent2,
        effects = escape_html(&effects),
        header = render_header(ctx),
        hero = render_hero(ctx),
        about = render_about(ctx),
        skills = render_skills(ctx),
        projects = render_projects(ctx),
        github = render_github(ctx),
        contact = render_contact(ctx),
        footer = render_footer(ctx),
        back_to_top = ctx.t("a11y.back_to_top"),
    )
}

/// Section heading that reveals immediately on load.
fn heading(ctx: &PageContext<'_>, key: &'static str) -> String {
    format!(
        r#"<h2 class="section-title"><span data-reveal="now">{}</span></h2>"#,
        ctx.t(key)
    )
}

fn render_header(ctx: &PageContext<'_>) -> String {
    let nav_links: String = SECTIONS
        .iter()
        .map(|&(id, key)| format!(r##"<a href="#{}">{}</a>"##, id, ctx.t(key)))
        .collect();
    let other = ctx.language().other();
    let theme = ctx.theme();

    format!(
        r##"<header class="site-header">
  <div class="container header-row">
    <a href="#home" class="brand">{name}</a>
    <nav class="nav">
      {nav_links}
      <a href="/resume?lang={lang}" target="_blank">{resume}</a>
      <a class="toggle" href="?lang={other}" data-lang-toggle="{other}" aria-label="{lang_aria}">{other_label}</a>
      <button class="toggle" type="button" data-theme-toggle data-label-dark="{label_dark}" data-label-light="{label_light}" aria-label="{theme_aria}">{theme_label}</button>
    </nav>
  </div>
</header>"##,
        name = escape_html(ctx.site.display_name),
        nav_links = nav_links,
        lang = ctx.language().code(),
        resume = ctx.t("nav.resume"),
        other = other.code(),
        other_label = escape_html(other.config().toggle_label),
        lang_aria = ctx.t("lang.toggle_aria"),
        label_dark = ctx.t("theme.dark"),
        label_light = ctx.t("theme.light"),
        theme_aria = ctx.t("theme.toggle_aria"),
        theme_label = ctx.t(theme.toggle_label_key()),
    )
}

fn render_hero(ctx: &PageContext<'_>) -> String {
    format!(
        r##"<section id="home" class="hero">
  <div class="badge"><span class="dot"></span>{badge}</div>
  <h1>
    <span class="kicker">{kicker}</span>
    <span class="gradient-title">{title}</span>
  </h1>
  <p class="lead" data-reveal>{tagline}</p>
  <div class="actions">
    <a class="button" href="{github}" target="_blank" rel="noreferrer">{cta_github}</a>
    <a class="button button-accent" href="#contact">{cta_contact}</a>
  </div>
  <div class="glow" aria-hidden="true"></div>
</section>"##,
        badge = ctx.t("hero.badge"),
        kicker = ctx.t("hero.kicker"),
        title = ctx.t("hero.title"),
        tagline = ctx.t("hero.tagline"),
        github = escape_html(&ctx.site.github_profile_url()),
        cta_github = ctx.t("hero.cta_github"),
        cta_contact = ctx.t("hero.cta_contact"),
    )
}

fn render_about(ctx: &PageContext<'_>) -> String {
    let age = ctx.site.age.to_string();
    let intro = fill(
        translate("about.intro", ctx.language()),
        &[("name", ctx.site.display_name), ("age", &age)],
    );
    let facts: String = [
        ("about.focus_label", "about.focus"),
        ("about.learning_label", "about.learning"),
        ("about.available_label", "about.available"),
        ("about.languages_label", "about.languages"),
    ]
    .iter()
    .map(|&(label, value)| {
        format!(
            r#"<div class="muted">{}</div><div>{}</div>"#,
            ctx.t(label),
            ctx.t(value)
        )
    })
    .collect();

    format!(
        r#"<section id="about" class="section">
  {heading}
  <div class="grid-2">
    <div class="prose">
      <p data-reveal>{intro}</p>
      <p data-reveal>{stack}</p>
    </div>
    <div class="card facts">{facts}</div>
  </div>
</section>"#,
        heading = heading(ctx, "about.title"),
        intro = escape_html(&intro),
        stack = ctx.t("about.stack"),
        facts = facts,
    )
}

fn render_skills(ctx: &PageContext<'_>) -> String {
    let keys: String = ctx
        .site
        .skills()
        .iter()
        .map(|skill| {
            format!(
                r#"<div class="skill-key" role="listitem" aria-label="{label}"><span aria-hidden="true">{icon}</span><span class="mono">{label}</span></div>"#,
                label = escape_html(skill.label),
                icon = icons::icon_svg(skill.icon),
            )
        })
        .collect();

    format!(
        r#"<section id="skills" class="section">
  {heading}
  <div class="skills-grid" role="list">{keys}</div>
</section>"#,
        heading = heading(ctx, "skills.title"),
        keys = keys,
    )
}

fn render_projects(ctx: &PageContext<'_>) -> String {
    let repo = &ctx.site.featured_repo;
    let topics: String = repo
        .topics
        .iter()
        .map(|topic| format!(r#"<span class="tag">{}</span>"#, escape_html(topic)))
        .collect();

    format!(
        r#"<section id="projects" class="section">
  {heading}
  <p class="muted small" data-reveal>{intro}</p>
  <a class="card repo-card" href="{url}" target="_blank" rel="noreferrer">
    <div class="repo-name">{name}</div>
    <div class="repo-description" data-reveal>{description}</div>
    <div class="tags">{topics}</div>
  </a>
</section>"#,
        heading = heading(ctx, "projects.title"),
        intro = ctx.t("projects.intro"),
        url = escape_html(repo.repo_url),
        name = escape_html(repo.name),
        description = escape_html(repo.description),
        topics = topics,
    )
}

fn render_github(ctx: &PageContext<'_>) -> String {
    let site = ctx.site;

    format!(
        r#"<section id="github" class="section">
  {heading}
  <div class="card panel">
    <div class="muted small">{note}</div>
    <div class="grid-2">
      <div class="card">
        <div class="label">{contributions}</div>
        <img class="chart" src="{chart}" alt="{chart_alt}" loading="lazy">
      </div>
      <div class="card">
        <div class="label">{profile}</div>
        <a class="profile-link" href="{profile_url}" target="_blank" rel="noreferrer">
          <div><div class="strong">github.com/{user}</div><div class="muted small">{hint}</div></div>
          <span class="arrow">→</span>
        </a>
      </div>
    </div>
  </div>
  <div class="card codewars">
    <div class="label">{codewars}</div>
    <div id="codewars-card" data-src="/partials/codewars?lang={lang}">
      <div class="skeleton" aria-busy="true">{loading}</div>
    </div>
  </div>
</section>"#,
        heading = heading(ctx, "github.title"),
        note = ctx.t("github.note"),
        contributions = ctx.t("github.contributions"),
        chart = escape_html(&site.github_chart_url()),
        chart_alt = ctx.t("github.chart_alt"),
        profile = ctx.t("github.profile"),
        profile_url = escape_html(&site.github_profile_url()),
        user = escape_html(site.github_username),
        hint = ctx.t("github.profile_hint"),
        codewars = ctx.t("codewars.title"),
        lang = ctx.language().code(),
        loading = ctx.t("codewars.loading"),
    )
}

fn render_contact(ctx: &PageContext<'_>) -> String {
    let cards: String = ctx
        .site
        .contacts
        .iter()
        .map(|contact| {
            format!(
                r#"<div class="card contact">
      <div class="muted small">{label}</div>
      <div class="truncate">{value}</div>
      <div class="actions">
        <a class="button small" href="{href}"{external}>{open}</a>
        <button class="button small" type="button" data-copy="{value}" data-copied="{copied}">{copy}</button>
      </div>
    </div>"#,
                label = escape_html(contact.label),
                value = escape_html(contact.value),
                href = escape_html(&contact.href()),
                external = external_attrs(contact.is_external()),
                open = ctx.t("contact.open"),
                copy = ctx.t("contact.copy"),
                copied = ctx.t("contact.copied"),
            )
        })
        .collect();

    format!(
        r#"<section id="contact" class="section">
  {heading}
  <div class="contact-grid">
    {cards}
  </div>
</section>"#,
        heading = heading(ctx, "contact.title"),
        cards = cards,
    )
}

fn render_footer(ctx: &PageContext<'_>) -> String {
    let year = ctx.year.to_string();
    let text = fill(
        translate("footer.copyright", ctx.language()),
        &[("year", &year), ("name", ctx.site.display_name)],
    );

    format!(
        r#"<footer class="site-footer"><div class="container muted small">{}</div></footer>"#,
        escape_html(&text)
    )
}
