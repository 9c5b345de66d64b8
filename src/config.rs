use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::common::ConfigError;
use crate::models::CreatorFallback;

/// Process configuration, read from the environment (and `.env` via
/// `dotenvy` in `main`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub courses_file: PathBuf,
    pub articles_file: PathBuf,
    pub static_dir: PathBuf,
    pub pkg_dir: PathBuf,
    pub creator_fallback: CreatorFallback,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_var("BIND_ADDR", "0.0.0.0:8080")?,
            courses_file: path_var("COURSES_FILE", "data/courses.json"),
            articles_file: path_var("ARTICLES_FILE", "data/articles.json"),
            static_dir: path_var("STATIC_DIR", "./static"),
            pkg_dir: path_var("PKG_DIR", "./pkg"),
            creator_fallback: parse_var("CREATOR_FALLBACK", "first")?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            log::info!("{key} not set, using default: {default}");
            default.to_string()
        })
}

fn path_var(key: &str, default: &str) -> PathBuf {
    PathBuf::from(var_or(key, default))
}

fn parse_var<T>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    var_or(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        })
}
