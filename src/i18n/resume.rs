use crate::i18n::Language;

const RESUME_EN: &str = "\
Alihan Torebekov

Python Backend Developer

Location: Bishkek (Remote)
Contacts:
GitHub: https://github.com/graz1p777dev
Telegram: https://t.me/graz1p
Email: graz1p@proton.me

Profile

Python backend developer focused on building clean, secure, and testable APIs.
Experienced with Django, REST architecture, Dockerized environments, and database-driven applications.
Strong interest in backend architecture, security, and performance.

Technical Skills
\t•\tLanguages: Python
\t•\tFrameworks: Django, Django REST Framework, FastAPI (basic), Flask
\t•\tDatabases: PostgreSQL, SQLite
\t•\tTools: Docker, Git, GitHub Actions
\t•\tTesting: Pytest
\t•\tOther: REST APIs, JWT authentication, basic system design

Additional
\t•\tActive GitHub contributor
\t•\tCodewars profile with solved challenges
\t•\tInterested in cybersecurity best practices and backend scalability

Availability

Open to small projects, learning opportunities, and backend-focused collaboration.
";

const RESUME_RU: &str = "\
Алихан Торебеков

Разработчик серверной части на Python

Местонахождение: Бишкек (удаленно)
Контакты:
GitHub: https://github.com/graz1p777dev
Telegram: https://t.me/graz1p
Электронная почта: graz1p@proton.me

Профиль

Разработчик серверной части на Python, сосредоточенный на создании чистых, безопасных и тестируемых API.
Опыт работы с Django, архитектурой REST, средами на Docker и приложениями, управляемыми базами данных.
Большой интерес к серверной архитектуре, безопасности и производительности.

Технические навыки
\t•\tЯзыки: Python
\t•\tФреймворки: Django, Django REST Framework, FastAPI (базовый), Flask
\t•\tБазы данных: PostgreSQL, SQLite
\t•\tИнструменты: Docker, Git, GitHub Actions
\t•\tТестирование: Pytest
\t•\tПрочее: REST API, аутентификация JWT, базовый дизайн систем

Дополнительно
\t•\tАктивный участник GitHub
\t•\tПрофиль на Codewars с решёнными задачами
\t•\tИнтерес к лучшим практикам кибербезопасности и масштабируемости серверной части

Доступность

Открыт для небольших проектов, возможностей обучения и совместной работы над серверной частью.
";

/// Plain-text resume for `language`; languages without a resume get English.
pub fn resume_text(language: Language) -> &'static str {
    match language.code() {
        "ru" => RESUME_RU,
        _ => RESUME_EN,
    }
}
