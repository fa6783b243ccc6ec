use crate::config::ServerConfig;
use crate::utils::error::{ApiError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub data: Option<DataSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub public_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub dir: Option<String>,
    pub monthly_file: Option<String>,
    pub daily_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ApiError::ConfigError {
            message: format!("cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApiError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overwrites fields of `config` that this file sets.
    pub fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(server) = &self.server {
            if let Some(bind) = &server.bind {
                config.bind = bind.clone();
            }
            if server.public_url.is_some() {
                config.public_url = server.public_url.clone();
            }
        }

        if let Some(data) = &self.data {
            if let Some(dir) = &data.dir {
                config.data_dir = dir.clone();
            }
            if let Some(monthly_file) = &data.monthly_file {
                config.monthly_file = monthly_file.clone();
            }
            if let Some(daily_file) = &data.daily_file {
                config.daily_file = daily_file.clone();
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(json) = logging.json {
                config.json_logs = json;
            }
            if let Some(verbose) = logging.verbose {
                config.verbose = verbose;
            }
        }
    }
}
