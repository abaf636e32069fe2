use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SiftError};

/// Top-level configuration for the Sift backend.
///
/// Loaded from `~/.sift/config.toml` by default. Secrets (API keys) are
/// never stored here; they come from the environment at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl SiftConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiftConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| SiftError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// True when running against the local development frontend.
    pub fn is_development(&self) -> bool {
        self.general.environment == "development"
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// API server port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Deployment environment: "development" or "production".
    pub environment: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: 3030,
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model used for intent classification and general chat.
    pub chat_model: String,
    /// Model used for SQL generation.
    pub sql_model: String,
    /// Sampling temperature for SQL generation (0.0 = deterministic).
    pub sql_temperature: f32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            chat_model: "gemini-2.0-flash".to_string(),
            sql_model: "gemini-2.5-flash".to_string(),
            sql_temperature: 0.0,
            timeout_secs: 60,
        }
    }
}

/// SQL execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Supabase project URL. Overridden by `SUPABASE_URL` at startup.
    pub url: String,
    /// Name of the RPC function that executes raw SQL.
    pub rpc_function: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            rpc_function: "run_sql".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Chat orchestration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum message length in characters.
    pub max_message_length: usize,
    /// Frontend origin allowed by CORS in development.
    pub dev_origin: String,
    /// Frontend origin allowed by CORS in production.
    pub prod_origin: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_length: 2000,
            dev_origin: "http://localhost:3000".to_string(),
            prod_origin: "https://evolvenxt-frontend.vercel.app".to_string(),
        }
    }
}
