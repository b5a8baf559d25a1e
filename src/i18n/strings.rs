use crate::i18n::Language;

/// One row of the translation table.
///
/// An empty string means "not translated yet" and falls back to English.
#[derive(Debug, Clone, Copy)]
pub struct Translation {
    pub key: &'static str,
    pub en: &'static str,
    pub ru: &'static str,
}

impl Translation {
    fn text_for(&self, language: Language) -> &'static str {
        let text = match language.code() {
            "ru" => self.ru,
            _ => self.en,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }
}

const fn t(key: &'static str, en: &'static str, ru: &'static str) -> Translation {
    Translation { key, en, ru }
}

/// All user-facing page strings.
///
/// Placeholders use `{name}` syntax and are substituted with [`fill`].
pub static TRANSLATIONS: &[Translation] = &[
    // ==================== Navigation ====================
    t("nav.about", "About", "Обо мне"),
    t("nav.skills", "Skills", "Навыки"),
    t("nav.projects", "Projects", "Проекты"),
    t("nav.github", "GitHub", "GitHub"),
    t("nav.contact", "Contact", "Контакты"),
    t("nav.resume", "Resume", "Резюме"),
    t("theme.toggle_aria", "Toggle theme", "Сменить тему"),
    t("theme.dark", "Dark", "Тёмная"),
    t("theme.light", "Light", "Светлая"),
    t("lang.toggle_aria", "Switch language", "Сменить язык"),
    // ==================== Hero ====================
    t("hero.badge", "Open to real projects", "Открыт для реальных проектов"),
    t("hero.kicker", "Python", "Python"),
    t("hero.title", "Backend Developer", "Backend-разработчик"),
    t(
        "hero.tagline",
        "I design and build clean, tested backends with Django, Docker and Pytest.",
        "Проектирую и строю чистые, протестированные бэкенды на Django, Docker и Pytest.",
    ),
    t("hero.cta_github", "View GitHub →", "Открыть GitHub →"),
    t("hero.cta_contact", "Contact Me", "Связаться"),
    // ==================== About ====================
    t("about.title", "About", "Обо мне"),
    t(
        "about.intro",
        "Hi! I’m {name}, a {age}-year-old Python backend developer focused on Django and testing. \
I’m still learning and haven’t shipped client projects yet, but I’m ready to take them on and deliver clean, reliable code.",
        "Привет! Я {name}, мне {age}, я Python backend-разработчик, сфокусированный на Django и тестировании. \
Я всё ещё учусь и пока не сдавал клиентских проектов, но готов за них взяться и писать чистый, надёжный код.",
    ),
    t(
        "about.stack",
        "My stack: Django (ORM), Pytest, Docker, FastAPI/Flask for microservices, \
SQLite/PostgreSQL, and solid basics in HTML/CSS/JS for simple frontends.",
        "Мой стек: Django (ORM), Pytest, Docker, FastAPI/Flask для микросервисов, \
SQLite/PostgreSQL и уверенная база HTML/CSS/JS для простых фронтендов.",
    ),
    t("about.focus_label", "Primary Focus", "Основной фокус"),
    t("about.focus", "Django • Testing • APIs", "Django • Тестирование • API"),
    t("about.learning_label", "Learning", "Изучаю"),
    t("about.learning", "System design basics, CI/CD", "Основы системного дизайна, CI/CD"),
    t("about.available_label", "Available", "Доступность"),
    t(
        "about.available",
        "Part-time remote / project-based",
        "Частичная занятость, удалённо / по проектам",
    ),
    t("about.languages_label", "Languages", "Языки"),
    t("about.languages", "English only", "Только английский"),
    // ==================== Skills & Projects ====================
    t("skills.title", "Skills", "Навыки"),
    t("projects.title", "Projects", "Проекты"),
    t(
        "projects.intro",
        "I’m currently learning and haven’t shipped client projects yet, but I’m ready to take them on. \
Here’s what I’m building now.",
        "Сейчас я учусь и пока не сдавал клиентских проектов, но готов за них взяться. \
Вот над чем я работаю сейчас.",
    ),
    // ==================== GitHub & Codewars ====================
    t("github.title", "GitHub Live", "GitHub в реальном времени"),
    t(
        "github.note",
        "Contributions & repos update automatically from GitHub.",
        "Активность и репозитории обновляются автоматически из GitHub.",
    ),
    t("github.contributions", "Contributions", "Активность"),
    t("github.profile", "Profile", "Профиль"),
    t("github.profile_hint", "See repositories & activity", "Репозитории и активность"),
    t("github.chart_alt", "GitHub contribution chart", "График активности GitHub"),
    t("codewars.title", "Codewars", "Codewars"),
    t("codewars.loading", "Loading…", "Загрузка…"),
    t("codewars.error", "Failed to load Codewars: {error}", "Не удалось загрузить Codewars: {error}"),
    t("codewars.honor", "Honor", "Честь"),
    t("codewars.leaderboard", "Leaderboard", "Рейтинг"),
    t("codewars.completed", "Completed", "Решено"),
    t("codewars.rank_overall", "Overall", "Общий"),
    // ==================== Contact & Footer ====================
    t("contact.title", "Contact", "Контакты"),
    t("contact.open", "Open", "Открыть"),
    t("contact.copy", "Copy", "Копировать"),
    t("contact.copied", "Copied!", "Скопировано!"),
    t(
        "footer.copyright",
        "© {year} {name}. Built with Python love 🐍",
        "© {year} {name}. Сделано с любовью к Python 🐍",
    ),
    t("a11y.back_to_top", "Back to top", "Наверх"),
];

/// Look up `key` for `language`.
///
/// Unknown keys return the key itself so a missing string is visible on the
/// page instead of rendering as blank.
pub fn translate(key: &str, language: Language) -> &str {
    TRANSLATIONS
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.text_for(language))
        .unwrap_or(key)
}

/// Substitute `{placeholder}` occurrences in `template`.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Table Integrity Tests ====================

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in TRANSLATIONS {
            assert!(seen.insert(entry.key), "duplicate key: {}", entry.key);
        }
    }

    #[test]
    fn test_every_entry_has_english_and_russian() {
        for entry in TRANSLATIONS {
            assert!(!entry.en.is_empty(), "missing en for {}", entry.key);
            assert!(!entry.ru.is_empty(), "missing ru for {}", entry.key);
        }
    }

    #[test]
    fn test_placeholders_match_across_languages() {
        for entry in TRANSLATIONS {
            for placeholder in ["{name}", "{age}", "{year}", "{error}"] {
                assert_eq!(
                    entry.en.contains(placeholder),
                    entry.ru.contains(placeholder),
                    "placeholder {} mismatch in {}",
                    placeholder,
                    entry.key
                );
            }
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_translate_english() {
        assert_eq!(translate("nav.about", Language::ENGLISH), "About");
    }

    #[test]
    fn test_translate_russian() {
        assert_eq!(translate("nav.about", Language::RUSSIAN), "Обо мне");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate("nav.missing", Language::RUSSIAN), "nav.missing");
    }

    #[test]
    fn test_untranslated_text_falls_back_to_english() {
        let entry = t("demo", "Hello", "");
        assert_eq!(entry.text_for(Language::RUSSIAN), "Hello");
    }

    // ==================== fill Tests ====================

    #[test]
    fn test_fill_replaces_all_placeholders() {
        let text = fill(
            translate("about.intro", Language::ENGLISH),
            &[("name", "GrAz1p"), ("age", "13")],
        );
        assert!(text.contains("I’m GrAz1p, a 13-year-old"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{a} {b}", &[("a", "x")]), "x {b}");
    }
}
