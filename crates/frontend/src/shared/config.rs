//! Frontend configuration.
//!
//! The defaults are embedded in the bundle. A build can point the app at a
//! different API by setting `TOUR_ADMIN_API_BASE` at compile time.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full API base, e.g. `https://admin.example.com/api`. Wins over everything below.
    #[serde(default)]
    pub base_url: Option<String>,
    /// `http`/`https`; the page's own scheme when absent
    #[serde(default)]
    pub scheme: Option<String>,
    pub port: u16,
    pub prefix: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3002
prefix = "/api"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Parse the embedded config and apply the compile-time override
pub fn load_config() -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base) = option_env!("TOUR_ADMIN_API_BASE") {
        config.api.base_url = Some(base.to_string());
    }
    Ok(config)
}

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|e| {
            log::error!("invalid embedded config, using built-in defaults: {}", e);
            Config {
                api: ApiConfig {
                    base_url: None,
                    scheme: None,
                    port: 3002,
                    prefix: "/api".to_string(),
                },
            }
        })
    })
}

impl ApiConfig {
    /// API base for a page served from `protocol` (`"https:"`) and `hostname`.
    /// Never ends with a slash.
    pub fn base_for_host(&self, protocol: &str, hostname: &str) -> String {
        if let Some(base) = self.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            return base.trim().trim_end_matches('/').to_string();
        }
        let scheme = self
            .scheme
            .clone()
            .unwrap_or_else(|| protocol.trim_end_matches(':').to_string());
        let scheme = if scheme.is_empty() { "http".to_string() } else { scheme };
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}://{}:{}", scheme, hostname, self.port)
        } else {
            format!("{}://{}:{}/{}", scheme, hostname, self.port, prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: Option<&str>, scheme: Option<&str>, prefix: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.map(str::to_string),
            scheme: scheme.map(str::to_string),
            port: 3002,
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3002);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.api.base_url, None);
    }

    #[test]
    fn test_base_follows_page_location() {
        let a = api(None, None, "/api");
        assert_eq!(a.base_for_host("http:", "localhost"), "http://localhost:3002/api");
        assert_eq!(a.base_for_host("https:", "admin.example.com"), "https://admin.example.com:3002/api");
        assert_eq!(a.base_for_host("", "127.0.0.1"), "http://127.0.0.1:3002/api");
    }

    #[test]
    fn test_explicit_scheme_and_empty_prefix() {
        let a = api(None, Some("https"), "/");
        assert_eq!(a.base_for_host("http:", "localhost"), "https://localhost:3002");
    }

    #[test]
    fn test_base_url_override_wins() {
        let a = api(Some("https://api.example.com/v1/"), Some("http"), "/api");
        assert_eq!(a.base_for_host("http:", "localhost"), "https://api.example.com/v1");

        let blank = api(Some("  "), None, "/api");
        assert_eq!(blank.base_for_host("http:", "localhost"), "http://localhost:3002/api");
    }
}
