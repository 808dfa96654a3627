//! Storefront Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Catalog presentation and filtering settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Quiet period before a search-as-you-type change is applied
    #[serde(with = "millis")]
    pub search_debounce: Duration,

    /// Related products shown on a product page
    pub related_limit: usize,

    pub currency_symbol: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(150),
            related_limit: 3,
            currency_symbol: "$".into(),
        }
    }
}

impl CatalogConfig {
    /// Read overrides from `STOREFRONT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("STOREFRONT_SEARCH_DEBOUNCE_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| CatalogError::Config(format!("STOREFRONT_SEARCH_DEBOUNCE_MS: '{}' is not a number", raw)))?;
            config.search_debounce = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("STOREFRONT_RELATED_LIMIT") {
            config.related_limit = raw
                .trim()
                .parse()
                .map_err(|_| CatalogError::Config(format!("STOREFRONT_RELATED_LIMIT: '{}' is not a number", raw)))?;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
