//! Runtime configuration for the player binary.

use std::time::Duration;

/// Default character endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/character";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "charsheet_player=debug,dioxus=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_filter: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Read configuration from the process environment.
    ///
    /// Uses `CHARSHEET_API_URL`, `CHARSHEET_REQUEST_TIMEOUT_SECS` and `RUST_LOG`,
    /// falling back to defaults if not set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("CHARSHEET_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Invalid values are reported by `config_warnings` once logging is up.
        let timeout_secs = lookup("CHARSHEET_REQUEST_TIMEOUT_SECS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let log_filter = lookup("RUST_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            log_filter,
        }
    }
}

/// Configuration problems worth reporting once logging is up.
pub fn config_warnings(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(raw) = lookup("CHARSHEET_REQUEST_TIMEOUT_SECS") {
        if !matches!(raw.trim().parse::<u64>(), Ok(secs) if secs > 0) {
            warnings.push(format!(
                "Invalid CHARSHEET_REQUEST_TIMEOUT_SECS {raw:?}, using {DEFAULT_REQUEST_TIMEOUT_SECS}s"
            ));
        }
    }
    warnings
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Values already set in the environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PlayerConfig::from_lookup(|_| None);
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = PlayerConfig::from_lookup(lookup_from(&[
            ("CHARSHEET_API_URL", " http://example.test/character "),
            ("CHARSHEET_REQUEST_TIMEOUT_SECS", "5"),
            ("RUST_LOG", "charsheet_player=trace"),
        ]));

        assert_eq!(config.api_url, "http://example.test/character");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_filter, "charsheet_player=trace");
    }

    #[test]
    fn invalid_timeout_falls_back_with_a_warning() {
        for raw in ["soon", "0", "-3"] {
            let lookup = lookup_from(&[("CHARSHEET_REQUEST_TIMEOUT_SECS", raw)]);
            let config = PlayerConfig::from_lookup(&lookup);
            assert_eq!(config.request_timeout, Duration::from_secs(30));
            assert_eq!(config_warnings(&lookup).len(), 1, "{raw}");
        }

        assert!(config_warnings(lookup_from(&[("CHARSHEET_REQUEST_TIMEOUT_SECS", "12")])).is_empty());
    }

    #[test]
    fn blank_url_uses_default() {
        let config = PlayerConfig::from_lookup(lookup_from(&[("CHARSHEET_API_URL", "  ")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
