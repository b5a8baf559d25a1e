//! Inline SVG icons for the skills grid, keyed by `Skill::icon`.

const PYTHON: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path fill="#3776AB" d="M12 2c5.5 0 5 4 5 4v3H7V6c0-3 3-4 5-4z"/><path fill="#FFD43B" d="M12 22c-5.5 0-5-4-5-4v-3h10v3c0 3-3 4-5 4z"/><circle cx="9.5" cy="5.5" r="1" fill="#fff"/><circle cx="14.5" cy="18.5" r="1" fill="#000"/></svg>"##;
const DJANGO: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path fill="#0c4b33" d="M5 3h6v18H8V6H5V3zm9 0h5v3h-2v15h-3V3z"/></svg>"##;
const FASTAPI: &str = r##"<svg viewBox="0 0 24 24" class="icon"><circle cx="12" cy="12" r="10" fill="#05998b"/><path d="M12 6v12M8 10h8M8 14h8" stroke="#fff" stroke-width="2" stroke-linecap="round"/></svg>"##;
const FLASK: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path d="M18 3s-2 9-12 13c0 0-.5 3 3 5 0 0 11-6 9-18z" fill="#fff" stroke="#111" stroke-width="1.5"/></svg>"##;
const DOCKER: &str = r##"<svg viewBox="0 0 24 24" class="icon"><rect x="3" y="10" width="3" height="3" fill="#2496ed"/><rect x="7" y="10" width="3" height="3" fill="#2496ed"/><rect x="11" y="10" width="3" height="3" fill="#2496ed"/><rect x="7" y="6" width="3" height="3" fill="#2496ed"/><rect x="11" y="6" width="3" height="3" fill="#2496ed"/><path d="M3 14c0 0 0 4 6 4h6c6 0 6-4 6-4H3z" fill="#2496ed"/></svg>"##;
const JS: &str = r##"<svg viewBox="0 0 24 24" class="icon"><rect width="24" height="24" rx="4" fill="#f7df1e"/><text x="12" y="17" text-anchor="middle" font-size="10" font-weight="700" fill="#000" font-family="ui-monospace">JS</text></svg>"##;
const HTML: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path fill="#e34f26" d="M3 2l2 18 7 2 7-2 2-18H3z"/><path fill="#fff" d="M12 19l5-1 1-12H6l.2 2h9.6l-.2 2H6.6l.3 2h8.5l-.3 3-3.9 1.1"/></svg>"##;
const CSS: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path fill="#264de4" d="M3 2l2 18 7 2 7-2 2-18H3z"/><path fill="#fff" d="M12 19l5-1 .7-8H7.4l.2 2h8.8l-.3 3-3.9 1.1"/></svg>"##;
const SQLITE: &str = r##"<svg viewBox="0 0 24 24" class="icon"><rect x="3" y="3" width="18" height="18" rx="3" fill="#0e76a8"/><path d="M7 17V7h10" stroke="#fff" stroke-width="2"/></svg>"##;
const POSTGRESQL: &str = r##"<svg viewBox="0 0 24 24" class="icon"><path d="M12 3c6 0 8 3 8 6 0 5-4 8-8 8S4 14 4 9c0-3 2-6 8-6z" fill="#336791"/><path d="M9 11c0-1 .8-2 3-2s3 1 3 2-1 2-3 2-3-1-3-2z" fill="#fff"/></svg>"##;
const PYTEST: &str = r##"<svg viewBox="0 0 24 24" class="icon"><circle cx="8" cy="12" r="5" fill="#0a9edc"/><circle cx="16" cy="12" r="5" fill="#5aa02c"/><circle cx="12" cy="12" r="3" fill="#fff"/></svg>"##;
const TELEBOT: &str = r##"<svg viewBox="0 0 24 24" class="icon"><circle cx="12" cy="12" r="10" fill="#2aabee"/><path d="M6 12l12-5-2.5 10-5-3-2.5 3v-4.5z" fill="#fff"/></svg>"##;
const CSV: &str = r##"<svg viewBox="0 0 24 24" class="icon"><rect x="4" y="3" width="16" height="18" rx="2" fill="#16a34a"/><text x="12" y="16" text-anchor="middle" font-size="8" fill="#fff" font-family="ui-monospace">CSV</text></svg>"##;
const FALLBACK: &str = r##"<svg viewBox="0 0 24 24" class="icon"><rect x="4" y="4" width="16" height="16" rx="4" fill="#3f3f46"/></svg>"##;

pub fn icon_svg(key: &str) -> &'static str {
    match key {
        "python" => PYTHON,
        "django" => DJANGO,
        "fastapi" => FASTAPI,
        "flask" => FLASK,
        "docker" => DOCKER,
        "js" => JS,
        "html" => HTML,
        "css" => CSS,
        "sqlite" => SQLITE,
        "postgresql" => POSTGRESQL,
        "pytest" => PYTEST,
        "telebot" => TELEBOT,
        "csv" => CSV,
        _ => FALLBACK,
    }
}
