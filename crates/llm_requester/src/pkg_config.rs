use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Prefix of environment variables that override config keys,
/// e.g. `C2RS_LLM__MODEL` for `llm.model`.
pub const ENV_PREFIX: &str = "C2RS";

/// Ordered search locations for `config.toml` relative to the working directory.
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config/config.toml",
    "../config/config.toml",
    "../../config/config.toml",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LlmSection {
    llm: LlmConfig,
}

pub fn get_config() -> Result<LlmConfig, ConfigError> {
    load_config(None)
}

/// Load the `[llm]` section from the given file, or from the first file found
/// in [`CONFIG_SEARCH_PATHS`] when none is given.
pub fn load_config(explicit: Option<&Path>) -> Result<LlmConfig, ConfigError> {
    let defaults = LlmConfig::default();
    let section: LlmSection = config_builder(explicit)
        .set_default("llm.model", defaults.model)?
        .set_default("llm.base_url", defaults.base_url)?
        .set_default("llm.api_key_env", defaults.api_key_env)?
        .build()?
        .try_deserialize()?;
    Ok(section.llm)
}

/// Common source stack shared by every crate reading the config file:
/// the config file (explicit, else discovered, else none) then `C2RS_*`
/// environment variables. Callers add their own defaults.
pub fn config_builder(explicit: Option<&Path>) -> ConfigBuilder<DefaultState> {
    let mut builder = Config::builder();

    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => locate_config_file(),
    };
    if let Some(path) = path {
        debug!("Using config file: {}", path.display());
        builder = builder.add_source(File::from(path));
    } else {
        debug!("No config file found, using defaults");
    }

    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}

/// Locate the first existing config file among the supported search locations.
pub fn locate_config_file() -> Option<PathBuf> {
    CONFIG_SEARCH_PATHS
        .iter()
        .map(Path::new)
        .find(|candidate| candidate.exists())
        .map(Path::to_path_buf)
}
