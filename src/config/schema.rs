use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
const MAX_REPLY_DELAY_MS: u64 = 60_000;

// ── Top-level config ──────────────────────────────────────────────

/// Top-level MindVest configuration, loaded from `config.toml`.
///
/// Resolution order: `MINDVEST_CONFIG_DIR` env → `~/.mindvest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Assistant orchestration settings (`[assistant]`).
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Assistant orchestration configuration (`[assistant]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Artificial delay before a reply is appended, in milliseconds. Default: `1000`.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Open each session with the assistant's greeting. Default: `true`.
    #[serde(default = "default_seed_greeting")]
    pub seed_greeting: bool,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_seed_greeting() -> bool {
    true
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            seed_greeting: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            assistant: AssistantConfig::default(),
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MINDVEST_CONFIG_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let user_dirs = UserDirs::new().context("Could not determine home directory")?;
    Ok(user_dirs.home_dir().join(".mindvest"))
}

impl Config {
    pub async fn load_or_init() -> Result<Self> {
        let config_dir = config_dir()?;
        let config_path = config_dir.join("config.toml");

        fs::create_dir_all(&config_dir)
            .await
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .await
                .context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path;
            config.apply_env_overrides();
            config.validate()?;
            tracing::info!(
                path = %config.config_path.display(),
                initialized = false,
                "Config loaded"
            );
            Ok(config)
        } else {
            let mut config = Config::default();
            config.config_path = config_path;
            config.save().await?;
            config.apply_env_overrides();
            config.validate()?;
            tracing::info!(
                path = %config.config_path.display(),
                initialized = true,
                "Config loaded"
            );
            Ok(config)
        }
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(delay) = std::env::var("MINDVEST_REPLY_DELAY_MS") {
            if let Ok(delay) = delay.parse::<u64>() {
                self.assistant.reply_delay_ms = delay;
            }
        }
    }

    /// Validate configuration values that would cause runtime failures.
    pub fn validate(&self) -> Result<()> {
        if self.assistant.reply_delay_ms > MAX_REPLY_DELAY_MS {
            anyhow::bail!(
                "assistant.reply_delay_ms must be at most {MAX_REPLY_DELAY_MS} (got {})",
                self.assistant.reply_delay_ms
            );
        }
        Ok(())
    }

    pub async fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let parent_dir = self
            .config_path
            .parent()
            .context("Config path must have a parent directory")?;
        fs::create_dir_all(parent_dir).await.with_context(|| {
            format!(
                "Failed to create config directory: {}",
                parent_dir.display()
            )
        })?;

        fs::write(&self.config_path, toml_str)
            .await
            .context("Failed to write config file")?;
        Ok(())
    }
}
