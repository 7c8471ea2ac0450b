// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisConfig, Config, MarketDataConfig, ServerConfig};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads and validates configuration from a named file.
pub fn load_config_from(name: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(name))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects values a correctly-formed file could still get wrong.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Validation(
            "server.port must be nonzero".to_string(),
        ));
    }
    if config.market_data.base_url.is_empty() {
        return Err(ConfigError::Validation(
            "market_data.base_url must not be empty".to_string(),
        ));
    }
    if config.market_data.quote_suffix.is_empty() {
        return Err(ConfigError::Validation(
            "market_data.quote_suffix must not be empty".to_string(),
        ));
    }
    if config.analysis.default_start_year <= 0 {
        return Err(ConfigError::Validation(format!(
            "analysis.default_start_year must be positive, got {}",
            config.analysis.default_start_year
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            market_data: MarketDataConfig {
                base_url: "https://api.binance.com".to_string(),
                quote_suffix: "USDT".to_string(),
            },
            analysis: AnalysisConfig {
                default_start_year: 2016,
            },
        }
    }

    #[test]
    fn accepts_a_well_formed_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_empty_quote_suffix() {
        let mut config = valid_config();
        config.market_data.quote_suffix.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_positive_start_year() {
        let mut config = valid_config();
        config.analysis.default_start_year = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
