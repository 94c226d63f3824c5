//! Prompt construction for C to Rust translation requests.

pub mod formatter;
pub mod types;

use log::{debug, warn};

pub use types::TranslationMode;

/// Opening instruction of every translation prompt.
pub const BASE_INSTRUCTION: &str = "Please convert the following C code to Rust code";

/// Appended to the opening instruction in preserve-errors mode.
pub const PRESERVE_ERRORS_CLAUSE: &str =
    " while maintaining all memory safety errors, if possible";

/// Closing instruction asking for a bare code answer.
pub const OUTPUT_INSTRUCTION: &str =
    "Provide only the complete Rust code as a plaintext response.";

/// Build the prompt sent to the generation service for one C source file.
pub fn build_translation_prompt(code: &str, keep_errors: bool) -> String {
    PromptBuilder::new(TranslationMode::from_keep_errors(keep_errors)).build(code)
}

/// Assembles translation prompts for a fixed mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    mode: TranslationMode,
}

impl PromptBuilder {
    pub fn new(mode: TranslationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn build(&self, code: &str) -> String {
        if formatter::contains_fence(code) {
            warn!("Source contains a Markdown fence, the prompt may be ambiguous to the model");
        }

        let mut prompt = String::from(BASE_INSTRUCTION);
        if self.mode.keeps_errors() {
            prompt.push_str(PRESERVE_ERRORS_CLAUSE);
        }
        prompt.push('\n');
        prompt.push_str(&formatter::format_code_block("c", code));
        prompt.push('\n');
        prompt.push_str(OUTPUT_INSTRUCTION);
        prompt.push('\n');

        debug!(
            "Built {:?} prompt, length: {} chars",
            self.mode,
            prompt.len()
        );
        prompt
    }
}
