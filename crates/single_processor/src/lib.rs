// Module declarations

pub mod code_extractor;
pub mod error;
pub mod file_writer;
pub mod output_namer;
pub mod pkg_config;
pub mod run_config;
pub mod single_processes;

// Main entry points
pub use single_processes::{BatchSummary, BatchTranslator, FileOutcome};

pub use code_extractor::sanitize_completion;
pub use error::ProcessError;
pub use output_namer::{output_file_name, output_path};
pub use run_config::RunConfig;
