pub mod ai_checker;
pub mod cfg_checker;

use anyhow::{Result, bail};
use llm_requester::LlmConfig;
use log::{error, info, warn};
use std::path::Path;

pub use ai_checker::{load_api_key, resolve_api_key};
pub use cfg_checker::{ConfigCheckReport, ConfigIssue, IssueLevel, check_config};

/// Run every startup check and return the API key on success.
///
/// Configuration errors and a missing credential are fatal; warnings are
/// only logged.
pub fn startup_check(llm: &LlmConfig, output_dir: &Path) -> Result<String> {
    let report = check_config(llm, output_dir);
    for issue in &report.issues {
        match issue.level {
            IssueLevel::Error => error!("{}", issue),
            IssueLevel::Warning => warn!("{}", issue),
        }
    }

    if report.has_errors() {
        let details = report
            .errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Invalid configuration: {}", details);
    }

    let api_key = load_api_key(&llm.api_key_env)?;
    info!("Startup checks passed, model: {}", llm.model);
    Ok(api_key)
}
