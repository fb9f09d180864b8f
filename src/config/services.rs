//! Identity, minting and valuation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::minting::{DEFAULT_SUFFIX_LENGTH, DEFAULT_TOKEN_PREFIX};
use crate::adapters::valuation::DEFAULT_BASE_VALUE;

/// Minimum token suffix length
pub const MIN_SUFFIX_LENGTH: usize = 4;

/// Maximum token suffix length
pub const MAX_SUFFIX_LENGTH: usize = 32;

/// Identity configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Accounts created through login with this name (any case) become
    /// administrators
    #[serde(default = "default_administrator_name")]
    pub administrator_name: String,
}

impl IdentityConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.administrator_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("identity.administrator_name"));
        }
        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            administrator_name: default_administrator_name(),
        }
    }
}

/// Minting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MintingConfig {
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,

    #[serde(default = "default_suffix_length")]
    pub suffix_length: usize,

    /// Reject a second mint against the same property
    #[serde(default)]
    pub one_token_per_property: bool,
}

impl MintingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SUFFIX_LENGTH..=MAX_SUFFIX_LENGTH).contains(&self.suffix_length) {
            return Err(ValidationError::InvalidSuffixLength {
                min: MIN_SUFFIX_LENGTH,
                max: MAX_SUFFIX_LENGTH,
                actual: self.suffix_length,
            });
        }
        Ok(())
    }
}

impl Default for MintingConfig {
    fn default() -> Self {
        Self {
            token_prefix: default_token_prefix(),
            suffix_length: default_suffix_length(),
            one_token_per_property: false,
        }
    }
}

/// Valuation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationConfig {
    /// Base used for properties stored without an estimated value
    #[serde(default = "default_base")]
    pub default_base: f64,
}

impl ValuationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_base.is_finite() || self.default_base < 0.0 {
            return Err(ValidationError::InvalidDefaultBase);
        }
        Ok(())
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_base: default_base(),
        }
    }
}

fn default_administrator_name() -> String {
    "admin".to_string()
}

fn default_token_prefix() -> String {
    DEFAULT_TOKEN_PREFIX.to_string()
}

fn default_suffix_length() -> usize {
    DEFAULT_SUFFIX_LENGTH
}

fn default_base() -> f64 {
    DEFAULT_BASE_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(IdentityConfig::default().validate().is_ok());
        assert!(MintingConfig::default().validate().is_ok());
        assert!(ValuationConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_administrator_name_is_rejected() {
        let config = IdentityConfig {
            administrator_name: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn suffix_length_out_of_range_is_rejected() {
        let config = MintingConfig {
            suffix_length: 2,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSuffixLength {
                min: 4,
                max: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn negative_default_base_is_rejected() {
        let config = ValuationConfig { default_base: -1.0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDefaultBase));
    }
}
