use anyhow::{Result, bail};
use llm_requester::openai_provider::validate_api_key;
use log::{debug, info};

/// Read the API key from the process environment.
pub fn load_api_key(var_name: &str) -> Result<String> {
    resolve_api_key(var_name, std::env::var(var_name).ok())
}

/// Validate the raw value of the credential variable `var_name`.
pub fn resolve_api_key(var_name: &str, value: Option<String>) -> Result<String> {
    let Some(key) = value else {
        bail!(
            "Environment variable {} is not set. Export it or add it to a .env file",
            var_name
        );
    };

    if let Err(e) = validate_api_key(&key) {
        bail!("Environment variable {} holds an unusable key: {}", var_name, e);
    }

    debug!("Found API key in {} ({} chars)", var_name, key.len());
    info!("AI service credential loaded from {}", var_name);
    Ok(key)
}
