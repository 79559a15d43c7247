use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};

/// TOML configuration file. Values set here take precedence over CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    pub provider: ProviderSection,
    pub summarizer: Option<SummarizerSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_addr: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    pub endpoint: String,
    pub league: Option<String>,
    pub season: Option<String>,
    pub stat_type: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSection {
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute ${VAR_NAME} placeholders with environment values, so API
    /// keys can stay out of the file. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("provider.endpoint", &self.provider.endpoint)?;

        if let Some(timeout) = self.provider.timeout_seconds {
            validation::validate_positive_number("provider.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
