pub mod cli;
pub mod codewars;
pub mod config;
pub mod effects;
pub mod i18n;
pub mod page;
pub mod preferences;
pub mod profile;
pub mod server;
pub mod theme;
