use std::env;

use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub base_gas_price_gwei: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

        let base_gas_price_gwei = env::var("BASE_GAS_PRICE_GWEI")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| AppError::Config("BASE_GAS_PRICE_GWEI must be a valid number".to_string()))?;

        Ok(Self {
            bind_address,
            base_gas_price_gwei,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_gas_price_gwei <= 0.0 || !self.base_gas_price_gwei.is_finite() {
            return Err(AppError::Config(
                "BASE_GAS_PRICE_GWEI must be positive".to_string(),
            ));
        }

        if self.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(AppError::Config(format!(
                "BIND_ADDRESS is not a valid socket address: {}",
                self.bind_address
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_gas_price() {
        let config = Config {
            bind_address: "127.0.0.1:3001".to_string(),
            base_gas_price_gwei: 0.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_bind_address() {
        let config = Config {
            bind_address: "not-an-address".to_string(),
            base_gas_price_gwei: 20.0,
        };
        assert!(config.validate().is_err());
    }
}
