//! Internationalization (i18n) for the portfolio page.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type backed by the registry
//! - `strings`: Static translation table (key -> text per language)
//! - `resume`: Plain-text resume per language
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::i18n::{translate, Language};
//!
//! let russian = Language::from_code("ru")?;
//! let heading = translate("nav.about", russian);
//! ```

mod language;
mod registry;
mod resume;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resume::resume_text;
pub use strings::{fill, translate, TRANSLATIONS};
