//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Defaults applied to freshly created line items.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Line item defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Tax rate (percent) given to new lines.
    #[serde(default = "default_gst_percentage")]
    pub default_gst_percentage: Decimal,
    /// Unit label given to new product lines.
    #[serde(default = "default_unit_type")]
    pub default_unit_type: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_gst_percentage: default_gst_percentage(),
            default_unit_type: default_unit_type(),
        }
    }
}

fn default_gst_percentage() -> Decimal {
    Decimal::from(18)
}

fn default_unit_type() -> String {
    "Piece".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TAXLINE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TAXLINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads a `.env` file (if any) and then the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_with_dotenv() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }
}
