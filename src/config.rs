use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

/// Default values for configuration
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";
const DEFAULT_ENDPOINT: &str = "https://live.riskgate.com/orders";
const DEFAULT_SANDBOX_ENDPOINT: &str = "https://sandbox.riskgate.com/orders";

/// Per-store gateway credentials.
///
/// Stores inherit the root-level settings; any field set in a store scope
/// overrides the root value for that store only.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct StoreSettings {
    /// Merchant reference assigned by the gateway
    #[validate(length(min = 1, message = "merchant_ref must not be empty"))]
    pub merchant_ref: Option<String>,

    /// Shared secret used to sign requests for this merchant
    #[validate(length(min = 8, message = "user_secret must be at least 8 characters"))]
    pub user_secret: Option<String>,
}

/// Gateway configuration with per-store scoping.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct GatewayConfig {
    /// Root-scope credentials, used when a store has no override
    #[serde(default)]
    #[validate]
    pub core: StoreSettings,

    /// Store-scoped overrides keyed by store id
    #[serde(default)]
    pub stores: HashMap<String, StoreSettings>,

    /// Carrier titles keyed by carrier code, used for delivery-method labels
    #[serde(default)]
    pub carriers: HashMap<String, String>,

    /// Gateway endpoint the transport layer submits payloads to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Use the sandbox endpoint instead of the live one
    #[serde(default)]
    pub sandbox: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            core: StoreSettings::default(),
            stores: HashMap::new(),
            carriers: HashMap::new(),
            endpoint: default_endpoint(),
            sandbox: false,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum GatewayConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl GatewayConfig {
    /// Resolves the merchant reference for a store scope, falling back to
    /// the root scope.
    pub fn merchant_ref(&self, store_id: Option<u32>) -> Option<&str> {
        self.scoped(store_id, |s| s.merchant_ref.as_deref())
    }

    /// Resolves the signing secret for a store scope, falling back to the
    /// root scope.
    pub fn user_secret(&self, store_id: Option<u32>) -> Option<&str> {
        self.scoped(store_id, |s| s.user_secret.as_deref())
    }

    /// Looks up the configured title for a carrier code.
    pub fn carrier_title(&self, carrier_code: &str) -> Option<&str> {
        self.carriers.get(carrier_code).map(String::as_str)
    }

    /// Endpoint the transport layer should submit to.
    pub fn submit_endpoint(&self) -> &str {
        if self.sandbox {
            DEFAULT_SANDBOX_ENDPOINT
        } else {
            &self.endpoint
        }
    }

    fn scoped<'a, F>(&'a self, store_id: Option<u32>, pick: F) -> Option<&'a str>
    where
        F: Fn(&'a StoreSettings) -> Option<&'a str>,
    {
        store_id
            .and_then(|id| self.stores.get(&id.to_string()))
            .and_then(&pick)
            .or_else(|| pick(&self.core))
    }
}

/// Loads gateway configuration from `config/` files and `RISKGATE__`
/// environment variables, then validates it.
///
/// File layout mirrors the deployment environment: `config/default.*` is
/// always read, `config/{RUN_ENV}.*` layers on top, and environment
/// variables win over both.
pub fn load_config() -> Result<GatewayConfig, GatewayConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading gateway configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("sandbox", false)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("RISKGATE").separator("__"))
        .build()?;

    let gateway_config: GatewayConfig = config.try_deserialize()?;

    gateway_config.validate().map_err(|e| {
        error!("Gateway configuration validation failed: {:?}", e);
        e
    })?;

    for (store_id, settings) in &gateway_config.stores {
        settings.validate().map_err(|e| {
            error!(
                "Gateway configuration validation failed for store {}: {:?}",
                store_id, e
            );
            e
        })?;
    }

    Ok(gateway_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_store_override() -> GatewayConfig {
        let mut stores = HashMap::new();
        stores.insert(
            "3".to_string(),
            StoreSettings {
                merchant_ref: Some("merchant-es".to_string()),
                user_secret: None,
            },
        );
        GatewayConfig {
            core: StoreSettings {
                merchant_ref: Some("merchant-default".to_string()),
                user_secret: Some("root-secret-key".to_string()),
            },
            stores,
            ..Default::default()
        }
    }

    #[test]
    fn test_store_override_wins_for_merchant_ref() {
        let config = config_with_store_override();
        assert_eq!(config.merchant_ref(Some(3)), Some("merchant-es"));
        assert_eq!(config.merchant_ref(Some(7)), Some("merchant-default"));
        assert_eq!(config.merchant_ref(None), Some("merchant-default"));
    }

    #[test]
    fn test_store_scope_falls_back_per_field() {
        // Store 3 overrides merchant_ref only; secret comes from root
        let config = config_with_store_override();
        assert_eq!(config.user_secret(Some(3)), Some("root-secret-key"));
    }

    #[test]
    fn test_unconfigured_scope_is_none() {
        let config = GatewayConfig::default();
        assert_eq!(config.merchant_ref(Some(1)), None);
        assert_eq!(config.user_secret(None), None);
    }

    #[test]
    fn test_carrier_title_lookup() {
        let mut config = GatewayConfig::default();
        config
            .carriers
            .insert("ups".to_string(), "United Parcel Service".to_string());
        assert_eq!(config.carrier_title("ups"), Some("United Parcel Service"));
        assert_eq!(config.carrier_title("dhl"), None);
    }

    #[test]
    fn test_sandbox_endpoint_selection() {
        let mut config = GatewayConfig::default();
        assert_eq!(config.submit_endpoint(), DEFAULT_ENDPOINT);
        config.sandbox = true;
        assert_eq!(config.submit_endpoint(), DEFAULT_SANDBOX_ENDPOINT);
    }

    #[test]
    fn test_short_secret_fails_validation() {
        let config = GatewayConfig {
            core: StoreSettings {
                merchant_ref: Some("merchant".to_string()),
                user_secret: Some("short".to_string()),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
