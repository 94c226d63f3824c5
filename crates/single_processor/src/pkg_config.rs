use config::ConfigError;
use llm_requester::pkg_config::config_builder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessorConfig {
    pub output_dir: PathBuf,
    /// Keep translating the remaining files after a per-file failure.
    pub continue_on_error: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            continue_on_error: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProcessorSection {
    processor: ProcessorConfig,
}

pub fn get_config() -> Result<ProcessorConfig, ConfigError> {
    load_config(None)
}

/// Load the `[processor]` section, falling back to defaults for missing keys.
pub fn load_config(explicit: Option<&Path>) -> Result<ProcessorConfig, ConfigError> {
    let section: ProcessorSection = config_builder(explicit)
        .set_default("processor.output_dir", DEFAULT_OUTPUT_DIR)?
        .set_default("processor.continue_on_error", false)?
        .build()?
        .try_deserialize()?;
    Ok(section.processor)
}
