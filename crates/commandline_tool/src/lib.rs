use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use llm_requester::{LlmConfig, OpenAIProvider};
use single_processor::pkg_config::ProcessorConfig;
use single_processor::{BatchSummary, BatchTranslator, RunConfig};

pub mod logging;

#[derive(Parser, Debug)]
#[command(name = "c2rs")]
#[command(version)]
#[command(about = "C to Rust translator using an AI chat-completion service", long_about = None)]
pub struct Cli {
    /// C file or directory of C files to translate
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Ask the model to keep the memory safety errors of the C code
    #[arg(long, short = 'k')]
    pub keep: bool,

    /// Directory receiving the translated files (default: outputs)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Model identifier sent to the completion service
    #[arg(long, short = 'm', value_name = "MODEL")]
    pub model: Option<String>,

    /// Config file (default: first of config/config.toml, ../config/config.toml, ../../config/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep translating the remaining files when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Show debug logs (off by default)
    #[arg(long, short = 'd')]
    pub debug: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Merge config file values with command line overrides.
pub fn resolve_settings(
    cli: &Cli,
    llm: LlmConfig,
    processor: ProcessorConfig,
) -> (LlmConfig, RunConfig) {
    let llm = LlmConfig {
        model: cli.model.clone().unwrap_or(llm.model),
        ..llm
    };
    let output_dir = cli.output_dir.clone().unwrap_or(processor.output_dir);

    let run_config = RunConfig::new(&cli.filename, cli.keep, llm.model.clone(), output_dir)
        .with_continue_on_error(cli.keep_going || processor.continue_on_error);
    (llm, run_config)
}

/// Load configuration, run the startup checks and translate everything the
/// command line points at.
pub async fn run(cli: &Cli) -> Result<BatchSummary> {
    let llm = llm_requester::pkg_config::load_config(cli.config.as_deref())
        .context("Failed to load LLM configuration")?;
    let processor = single_processor::pkg_config::load_config(cli.config.as_deref())
        .context("Failed to load processor configuration")?;

    let (llm, run_config) = resolve_settings(cli, llm, processor);
    debug!("Run configuration: {:?}", run_config);

    let api_key = env_checker::startup_check(&llm, &run_config.output_dir)?;
    let client = OpenAIProvider::from_config(&llm, api_key)?;

    info!(
        "Translating {} ({}) into {}",
        run_config.input_path.display(),
        if run_config.single_file { "file" } else { "directory" },
        run_config.output_dir.display()
    );

    BatchTranslator::new(run_config, Box::new(client)).run().await
}

/// One-line recap printed after a run.
pub fn summary_line(summary: &BatchSummary) -> String {
    let mut line = format!(
        "Translated {} file(s), skipped {}.",
        summary.translated.len(),
        summary.skipped.len()
    );
    if summary.has_failures() {
        line.push_str(&format!(" {} failed.", summary.failed.len()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["c2rs", "samples"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("samples"));
        assert!(!cli.keep);
        assert!(!cli.keep_going);
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "c2rs", "hello.c", "-k", "-o", "out", "-m", "gpt-4o", "--keep-going", "-d",
        ])
        .unwrap();
        assert!(cli.keep);
        assert!(cli.keep_going);
        assert!(cli.debug);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_filename_is_required() {
        assert!(Cli::try_parse_from(["c2rs"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["c2rs", "hello.c", "-m", "gpt-4o", "-o", "out"]).unwrap();
        let (llm, run) = resolve_settings(&cli, LlmConfig::default(), ProcessorConfig::default());
        assert_eq!(llm.model, "gpt-4o");
        assert_eq!(run.model, "gpt-4o");
        assert_eq!(run.output_dir, Path::new("out"));
        assert!(!run.continue_on_error);
    }

    #[test]
    fn test_config_used_without_overrides() {
        let cli = Cli::try_parse_from(["c2rs", "hello.c", "-k"]).unwrap();
        let processor = ProcessorConfig {
            output_dir: PathBuf::from("translated"),
            continue_on_error: true,
        };
        let (llm, run) = resolve_settings(&cli, LlmConfig::default(), processor);
        assert_eq!(llm.model, llm_requester::pkg_config::DEFAULT_MODEL);
        assert_eq!(run.output_dir, Path::new("translated"));
        assert!(run.keep_errors);
        assert!(run.continue_on_error);
    }

    #[test]
    fn test_summary_line() {
        let mut summary = BatchSummary::default();
        summary.translated.push(PathBuf::from("outputs/a.rs"));
        summary.skipped.push("notes.txt".to_string());
        assert_eq!(summary_line(&summary), "Translated 1 file(s), skipped 1.");

        summary.failed.push(("b.c".to_string(), "boom".to_string()));
        assert_eq!(
            summary_line(&summary),
            "Translated 1 file(s), skipped 1. 1 failed."
        );
    }
}
