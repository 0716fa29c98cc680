//! # Application Configuration
//!
//! Fixed chain constants plus a small runtime configuration read from the
//! page URL once at startup:
//!
//! | query param | values | default |
//! |---|---|---|
//! | `log` | `error`, `warn`, `info`, `debug`, `trace` | `info` |
//! | `wallet` | `keplr-mobile`, `keplr-extension` | `keplr-mobile` |
//!
//! Unknown values fall back to the default with a warning.

use leptos::prelude::*;

use crate::services::wallet::KEPLR_WALLET_IDS;
use crate::utils::url::get_query_param;

pub use shared::dto::permit::PERMIT_CHAIN_ID;

/// Chain registry name of the chain the section connects to
pub const CHAIN_NAME: &str = "secretnetwork";

/// Wallet whose client signs the permit
pub const SIGNING_WALLET: &str = "keplr-mobile";

pub const KEPLR_INSTALL_URL: &str = "https://www.keplr.app/get";

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub chain_name: String,
    /// Chain enabled in the wallet and bound into the permit
    pub chain_id: String,
    pub signing_wallet: String,
    pub install_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chain_name: CHAIN_NAME.to_string(),
            chain_id: PERMIT_CHAIN_ID.to_string(),
            signing_wallet: SIGNING_WALLET.to_string(),
            install_url: KEPLR_INSTALL_URL.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from the current page URL.
    pub fn from_location() -> Self {
        Self::from_params(get_query_param)
    }

    /// Build configuration from a query parameter lookup.
    pub fn from_params(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("log") {
            match level.parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("[CONFIG] ignoring log level {:?}", level),
            }
        }

        if let Some(wallet) = lookup("wallet") {
            if KEPLR_WALLET_IDS.contains(&wallet.as_str()) {
                config.signing_wallet = wallet;
            } else {
                log::warn!("[CONFIG] ignoring unknown wallet {:?}", wallet);
            }
        }

        config
    }
}

pub fn provide_app_config(config: AppConfig) -> AppConfig {
    provide_context(config.clone());
    config
}

pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_params(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chain_id, "secret-4");
        assert_eq!(config.chain_name, "secretnetwork");
        assert_eq!(config.signing_wallet, "keplr-mobile");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_params(lookup(&[("log", "debug"), ("wallet", "keplr-extension")]));
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.signing_wallet, "keplr-extension");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_params(lookup(&[("log", "loud"), ("wallet", "leap")]));
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.signing_wallet, "keplr-mobile");
    }
}
