pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_socket_addr, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_MONTHLY_FILE: &str = "PeliculasPorMesListo.csv";
pub const DEFAULT_DAILY_FILE: &str = "PeliculasPorDiaListo.csv";

/// Command line flags. Anything left unset falls back to the TOML file, then to the defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "peliculas-api")]
#[command(about = "Read-only API counting movie releases per month and weekday")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on [default: 127.0.0.1:8000]
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory holding both CSV files [default: ./data]
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Monthly release file name inside the data directory
    #[arg(long)]
    pub monthly_file: Option<String>,

    /// Daily release file name inside the data directory
    #[arg(long)]
    pub daily_file: Option<String>,

    /// Base URL used in example links instead of the request host
    #[arg(long)]
    pub public_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved settings the server runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub data_dir: String,
    pub monthly_file: String,
    pub daily_file: String,
    pub public_url: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            monthly_file: DEFAULT_MONTHLY_FILE.to_string(),
            daily_file: DEFAULT_DAILY_FILE.to_string(),
            public_url: None,
            json_logs: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Layers defaults, then the TOML file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(monthly_file) = &self.monthly_file {
            config.monthly_file = monthly_file.clone();
        }
        if let Some(daily_file) = &self.daily_file {
            config.daily_file = daily_file.clone();
        }
        if self.public_url.is_some() {
            config.public_url = self.public_url.clone();
        }
        config.json_logs |= self.json_logs;
        config.verbose |= self.verbose;

        Ok(config)
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("bind", &self.bind)
    }
}

impl ConfigProvider for ServerConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn monthly_file(&self) -> &str {
        &self.monthly_file
    }

    fn daily_file(&self) -> &str {
        &self.daily_file
    }

    fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        validate_path("data_dir", &self.data_dir)?;
        validate_path("monthly_file", &self.monthly_file)?;
        validate_path("daily_file", &self.daily_file)?;
        validate_file_extension("monthly_file", &self.monthly_file, &["csv"])?;
        validate_file_extension("daily_file", &self.daily_file, &["csv"])?;
        if let Some(url) = &self.public_url {
            validate_url("public_url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags_override_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[server]
bind = "0.0.0.0:9000"

[data]
dir = "/srv/peliculas"
monthly_file = "mes.csv"
"#,
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            bind: Some("127.0.0.1:7000".to_string()),
            ..Default::default()
        };
        let config = cli.resolve().unwrap();

        assert_eq!(config.bind, "127.0.0.1:7000");
        assert_eq!(config.data_dir, "/srv/peliculas");
        assert_eq!(config.monthly_file, "mes.csv");
        assert_eq!(config.daily_file, DEFAULT_DAILY_FILE);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig {
            config: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = ServerConfig {
            bind: "not-an-address".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            monthly_file: "mes.xlsx".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            public_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
