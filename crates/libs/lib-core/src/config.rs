//! # Wallet Configuration
//!
//! Timing knobs for extension discovery. The network table itself is
//! compile-time constant (see [`crate::network`]).
//!
//! ```rust
//! use lib_core::config::WalletConfig;
//! use std::time::Duration;
//!
//! let config = WalletConfig::default();
//! assert_eq!(config.poll_interval, Duration::from_millis(500));
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use lib_utils::envs::{self, get_env_parse_or};

use crate::error::{Result, WalletError};

const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
const DEFAULT_POLL_TIMEOUT_MS: u64 = 5_000;

/// Wallet provider configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// Delay between two looks for `window.starkey` while it is missing.
    pub poll_interval: Duration,

    /// Total time to keep looking before declaring the extension absent.
    pub poll_timeout: Duration,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            poll_timeout: Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS),
        }
    }
}

impl WalletConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SUPRA_POLL_INTERVAL_MS` (default 500)
    /// - `SUPRA_POLL_TIMEOUT_MS` (default 5000)
    ///
    /// Unset variables fall back to their defaults. In the browser there is no
    /// environment, so this is equivalent to [`WalletConfig::default`].
    pub fn from_env() -> Result<Self> {
        let poll_interval = get_env_parse_or("SUPRA_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)
            .map_err(env_error)?;
        let poll_timeout = get_env_parse_or("SUPRA_POLL_TIMEOUT_MS", DEFAULT_POLL_TIMEOUT_MS)
            .map_err(env_error)?;

        let config = Self {
            poll_interval: Duration::from_millis(poll_interval),
            poll_timeout: Duration::from_millis(poll_timeout),
        };
        config.validate()?;
        tracing::debug!(
            "Wallet config: poll every {:?} for up to {:?}",
            config.poll_interval,
            config.poll_timeout
        );
        Ok(config)
    }

    /// Validate the timing values.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            return Err(WalletError::Config(
                "SUPRA_POLL_INTERVAL_MS must be greater than zero".to_string(),
            ));
        }

        if self.poll_interval > self.poll_timeout {
            return Err(WalletError::Config(
                "SUPRA_POLL_INTERVAL_MS must not exceed SUPRA_POLL_TIMEOUT_MS".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_error(err: envs::Error) -> WalletError {
    match err {
        envs::Error::WrongFormat(name) => {
            WalletError::Config(format!("{name} must be a number of milliseconds"))
        }
        envs::Error::MissingEnv(name) => WalletError::Config(format!("{name} must be set")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WalletConfig::default();
        assert_eq!(config.poll_timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = WalletConfig {
            poll_interval: Duration::ZERO,
            ..WalletConfig::default()
        };
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_interval_over_timeout() {
        let config = WalletConfig {
            poll_interval: Duration::from_secs(10),
            poll_timeout: Duration::from_secs(1),
        };
        assert!(config.validate().is_err());
    }

    // the only test touching these variables
    #[test]
    fn test_from_env() {
        std::env::set_var("SUPRA_POLL_INTERVAL_MS", "250");
        std::env::remove_var("SUPRA_POLL_TIMEOUT_MS");
        let config = WalletConfig::from_env().unwrap();
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.poll_timeout, Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        std::env::set_var("SUPRA_POLL_TIMEOUT_MS", "soon");
        assert!(matches!(WalletConfig::from_env(), Err(WalletError::Config(_))));

        std::env::set_var("SUPRA_POLL_TIMEOUT_MS", "100");
        assert!(WalletConfig::from_env().is_err());

        std::env::remove_var("SUPRA_POLL_INTERVAL_MS");
        std::env::remove_var("SUPRA_POLL_TIMEOUT_MS");
    }

    #[test]
    fn test_env_error_mapping() {
        let err = env_error(envs::Error::WrongFormat("SUPRA_POLL_TIMEOUT_MS"));
        assert_eq!(
            err.to_string(),
            "Configuration error: SUPRA_POLL_TIMEOUT_MS must be a number of milliseconds"
        );
    }
}
