//! Process-wide configuration for the backend origin.
//!
//! The origin is read once at startup and injected into the HTTP adapter
//! instead of being repeated as a literal at every call site. Override it
//! at build time with the `BANK_API_BASE` environment variable.

use std::sync::OnceLock;

/// Fallback origin for local development.
const DEFAULT_API_BASE: &str = "http://localhost:8080";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Origin of the REST backend, without a trailing slash.
    pub api_base: String,
}

impl Config {
    /// Build a config from an origin, trimming any trailing slashes so
    /// path construction stays uniform.
    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self { api_base }
    }

    /// Config from the build-time environment, falling back to the local
    /// development origin.
    pub fn from_env() -> Self {
        Self::new(option_env!("BANK_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Install the process-wide config. Call once at startup, before the first
/// request goes out.
pub fn init(config: Config) {
    CONFIG.set(config).expect("config initialized twice");
}

/// The active config. Falls back to [`Config::from_env`] when [`init`] was
/// never called, which keeps host tests free of setup.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let config = Config::new("http://localhost:9000/");
        assert_eq!(config.api_base, "http://localhost:9000");

        let config = Config::new("http://localhost:9000///");
        assert_eq!(config.api_base, "http://localhost:9000");
    }

    #[test]
    fn new_leaves_clean_origins_alone() {
        let config = Config::new("https://bank.example.com");
        assert_eq!(config.api_base, "https://bank.example.com");
    }

    #[test]
    fn from_env_yields_a_usable_origin() {
        let config = Config::from_env();
        assert!(!config.api_base.is_empty());
        assert!(!config.api_base.ends_with('/'));
    }
}
