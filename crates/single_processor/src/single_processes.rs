use anyhow::{Context, Result};
use file_scanner::{Candidate, is_c_source, resolve_candidates};
use llm_requester::CompletionClient;
use log::{debug, error, info, warn};
use prompt_builder::build_translation_prompt;
use std::path::PathBuf;

use crate::code_extractor::sanitize_completion;
use crate::error::is_fatal;
use crate::file_writer::{check_output_dir, read_source, save_code};
use crate::run_config::RunConfig;

/// What happened to each candidate of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub translated: Vec<PathBuf>,
    pub skipped: Vec<String>,
    /// File name and error message, only filled when continuing past failures.
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Outcome of a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Translated(PathBuf),
    Skipped,
}

/// Drives the translation of every candidate of a run, one file at a time.
pub struct BatchTranslator {
    config: RunConfig,
    client: Box<dyn CompletionClient>,
}

impl BatchTranslator {
    pub fn new(config: RunConfig, client: Box<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Translate every candidate in listing order.
    ///
    /// The first error aborts the run unless `continue_on_error` is set, in
    /// which case only fatal errors abort and the rest are collected. An
    /// output path that is not a directory fails the run before any request.
    pub async fn run(&self) -> Result<BatchSummary> {
        check_output_dir(&self.config.output_dir)?;
        let candidates = resolve_candidates(&self.config.input_path, self.config.single_file)?;
        info!(
            "Processing {} candidates with {} (model: {})",
            candidates.len(),
            self.client.provider_name(),
            self.config.model
        );

        let mut summary = BatchSummary::default();
        for candidate in &candidates {
            match self.translate_and_save(candidate).await {
                Ok(FileOutcome::Translated(path)) => summary.translated.push(path),
                Ok(FileOutcome::Skipped) => summary.skipped.push(candidate.display_name()),
                Err(e) if self.config.continue_on_error && !is_fatal(&e) => {
                    let name = candidate.display_name();
                    error!("Translation of {} failed: {:#}", name, e);
                    println!("Failed to translate '{}': {:#}", name, e);
                    summary.failed.push((name, format!("{:#}", e)));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Batch finished: {} translated, {} skipped, {} failed",
            summary.translated.len(),
            summary.skipped.len(),
            summary.failed.len()
        );
        Ok(summary)
    }

    /// Translate one candidate and write the result, skipping non-C files.
    pub async fn translate_and_save(&self, candidate: &Candidate) -> Result<FileOutcome> {
        if !is_c_source(&candidate.file_name) {
            println!("{} is not a C file. Skipping.", candidate.display_name());
            debug!("Skipped non-C candidate {:?}", candidate);
            return Ok(FileOutcome::Skipped);
        }

        let source_path = candidate.path();
        let output_path = self.config.output_path_for(&candidate.file_name);
        println!(
            "Translating '{}' -> '{}'",
            source_path.display(),
            output_path.display()
        );

        let code = read_source(&source_path)?;
        let rust_code = self
            .translate(&code)
            .await
            .with_context(|| format!("Failed to translate {}", source_path.display()))?;

        if rust_code.is_empty() {
            warn!("Empty translation for {}", source_path.display());
        }

        let saved = save_code(&rust_code, &self.config.output_dir, &output_path)?;
        Ok(FileOutcome::Translated(saved))
    }

    /// Prompt the model with `code` and return the sanitized completion.
    pub async fn translate(&self, code: &str) -> Result<String> {
        let prompt = build_translation_prompt(code, self.config.keep_errors);
        let completion = self.client.complete(&prompt, &self.config.model).await?;
        debug!("Raw completion length: {} chars", completion.len());
        Ok(sanitize_completion(&completion))
    }
}
