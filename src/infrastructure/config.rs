use crate::domain::dashboard::TargetDefaults;
use crate::domain::store::Store;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    #[serde(default)]
    pub targets: TargetSettings,
    #[serde(default)]
    pub stores: Vec<Store>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Mock,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    pub base_url: Option<String>,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl ProviderSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_latency_ms() -> u64 {
    200
}

fn default_cache_ttl_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct TargetSettings {
    pub stock_health: u32,
    pub nps: u32,
    pub max_pending_orders: u32,
}

impl Default for TargetSettings {
    fn default() -> Self {
        let defaults = TargetDefaults::default();
        Self {
            stock_health: defaults.stock_health,
            nps: defaults.nps,
            max_pending_orders: defaults.max_pending_orders,
        }
    }
}

impl From<&TargetSettings> for TargetDefaults {
    fn from(settings: &TargetSettings) -> Self {
        Self {
            stock_health: settings.stock_health,
            nps: settings.nps,
            max_pending_orders: settings.max_pending_orders,
        }
    }
}

/// Loads `config/dashboard.toml`, overridden by `DASHBOARD__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = parse(
            r#"
            [server]
            bind = "127.0.0.1:3000"

            [provider]
            kind = "mock"
            "#,
        );

        assert_eq!(cfg.provider.kind, ProviderKind::Mock);
        assert_eq!(cfg.provider.latency(), Duration::from_millis(200));
        assert_eq!(cfg.provider.cache_ttl(), Duration::from_secs(60));
        assert_eq!(TargetDefaults::from(&cfg.targets), TargetDefaults::default());
        assert!(cfg.stores.is_empty());
    }

    #[test]
    fn test_full_config() {
        let cfg = parse(
            r#"
            [server]
            bind = "0.0.0.0:8080"

            [provider]
            kind = "http"
            base_url = "http://localhost:9000/api"
            cache_ttl_secs = 5

            [targets]
            stock_health = 85
            nps = 70
            max_pending_orders = 12

            [[stores]]
            id = "all"
            name = "All Stores"
            city = "India"
            "#,
        );

        assert_eq!(cfg.provider.kind, ProviderKind::Http);
        assert_eq!(cfg.provider.base_url.as_deref(), Some("http://localhost:9000/api"));
        assert_eq!(TargetDefaults::from(&cfg.targets).max_pending_orders, 12);
        assert_eq!(cfg.stores[0].name, "All Stores");
    }
}
