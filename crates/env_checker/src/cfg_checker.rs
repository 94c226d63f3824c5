use llm_requester::LlmConfig;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLevel {
    Error,
    Warning,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Error => write!(f, "ERROR"),
            IssueLevel::Warning => write!(f, "WARN"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub level: IssueLevel,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.field, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigCheckReport {
    pub issues: Vec<ConfigIssue>,
}

impl ConfigCheckReport {
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.level == IssueLevel::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
    }
}

/// Sanity-check the resolved settings before any file is processed.
pub fn check_config(llm: &LlmConfig, output_dir: &Path) -> ConfigCheckReport {
    fn is_blank(value: &str) -> bool {
        value.trim().is_empty()
    }

    let mut issues = Vec::new();

    if is_blank(&llm.model) {
        issues.push(ConfigIssue::error("llm.model", "`model` must not be empty"));
    }

    if is_blank(&llm.api_key_env) {
        issues.push(ConfigIssue::error(
            "llm.api_key_env",
            "`api_key_env` must name an environment variable",
        ));
    }

    let base_url = llm.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        issues.push(ConfigIssue::error(
            "llm.base_url",
            "`base_url` must start with http:// or https://",
        ));
    } else if base_url.starts_with("http://") && !is_loopback_url(base_url) {
        issues.push(ConfigIssue::warning(
            "llm.base_url",
            "`base_url` uses plain http, the API key is sent unencrypted",
        ));
    }

    if output_dir.as_os_str().is_empty() {
        issues.push(ConfigIssue::error(
            "processor.output_dir",
            "`output_dir` must not be empty",
        ));
    }

    ConfigCheckReport { issues }
}

fn is_loopback_url(url: &str) -> bool {
    let authority = url
        .trim_start_matches("http://")
        .split('/')
        .next()
        .unwrap_or_default();
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    };
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}
