//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MORNING_BREW_CART_KEY` - storage key for the persisted cart
//!   (default: `morning-brew-cart`)
//! - `MORNING_BREW_TAX_RATE` - tax rate as a decimal fraction
//!   (default: `0.09`)
//! - `MORNING_BREW_CURRENCY` - ISO 4217 currency code (default: `USD`)

use morning_brew_core::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Storage key the cart is persisted under when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "morning-brew-cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart behavior configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the serialized cart is persisted under.
    pub storage_key: String,
    /// Tax rate applied to the subtotal, as a fraction (0.09 = 9%).
    pub tax_rate: Decimal,
    /// Currency all cart amounts are denominated in.
    pub currency: CurrencyCode,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            tax_rate: Decimal::new(9, 2),
            currency: CurrencyCode::USD,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_key = get_env_or_default("MORNING_BREW_CART_KEY", DEFAULT_STORAGE_KEY);
        let tax_rate = parse_tax_rate(
            "MORNING_BREW_TAX_RATE",
            &get_env_or_default("MORNING_BREW_TAX_RATE", "0.09"),
        )?;
        let currency = parse_currency(
            "MORNING_BREW_CURRENCY",
            &get_env_or_default("MORNING_BREW_CURRENCY", "USD"),
        )?;

        Ok(Self {
            storage_key,
            tax_rate,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate a tax rate value.
fn parse_tax_rate(var_name: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let rate = raw
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("tax rate must be in [0, 1), got {rate}"),
        ));
    }

    Ok(rate)
}

/// Parse a currency code value.
fn parse_currency(var_name: &str, raw: &str) -> Result<CurrencyCode, ConfigError> {
    raw.parse::<CurrencyCode>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "morning-brew-cart");
        assert_eq!(config.tax_rate, Decimal::new(9, 2));
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_tax_rate_valid() {
        assert_eq!(
            parse_tax_rate("TEST_VAR", "0.09").unwrap(),
            Decimal::new(9, 2)
        );
        assert_eq!(parse_tax_rate("TEST_VAR", "0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_tax_rate_not_a_number() {
        let err = parse_tax_rate("TEST_VAR", "nine percent").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_tax_rate_out_of_range() {
        assert!(parse_tax_rate("TEST_VAR", "-0.01").is_err());
        assert!(parse_tax_rate("TEST_VAR", "1").is_err());
        assert!(parse_tax_rate("TEST_VAR", "1.5").is_err());
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(
            parse_currency("TEST_VAR", "CAD").unwrap(),
            CurrencyCode::CAD
        );
        assert!(parse_currency("TEST_VAR", "BTC").is_err());
    }
}
