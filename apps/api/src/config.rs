use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::catalog::DEFAULT_ROLE_ID;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub default_role: String,
    pub max_upload_bytes: usize,
    pub extraction_timeout_secs: u64,
    /// PDF parses allowed on the blocking pool at once, timed-out ones included.
    pub max_concurrent_extractions: usize,
    /// Built frontend to serve for unmatched GETs. Unset → the built-in upload form.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 5000).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_role: std::env::var("DEFAULT_ROLE")
                .unwrap_or_else(|_| DEFAULT_ROLE_ID.to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            extraction_timeout_secs: parse_env("EXTRACTION_TIMEOUT_SECS", 30)
                .context("EXTRACTION_TIMEOUT_SECS must be a whole number of seconds")?,
            max_concurrent_extractions: parse_env("MAX_CONCURRENT_EXTRACTIONS", 4)
                .context("MAX_CONCURRENT_EXTRACTIONS must be a positive count")?,
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/unused".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            default_role: DEFAULT_ROLE_ID.to_string(),
            max_upload_bytes: 64 * 1024,
            extraction_timeout_secs: 1,
            max_concurrent_extractions: 1,
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_parse_env_default_when_unset() {
        let v: u64 = parse_env("RESUME_ANALYZER_TEST_UNSET", 30).unwrap();
        assert_eq!(v, 30);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUME_ANALYZER_TEST_PORT", " 8081 ");
        let v: u16 = parse_env("RESUME_ANALYZER_TEST_PORT", 5000).unwrap();
        assert_eq!(v, 8081);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_ANALYZER_TEST_BAD", "lots");
        let err = parse_env::<usize>("RESUME_ANALYZER_TEST_BAD", 1).unwrap_err();
        assert!(err.to_string().contains("RESUME_ANALYZER_TEST_BAD"));
    }

    #[test]
    fn test_require_env_names_missing_key() {
        let err = require_env("RESUME_ANALYZER_TEST_MISSING").unwrap_err();
        assert!(err.to_string().contains("RESUME_ANALYZER_TEST_MISSING"));
    }
}
