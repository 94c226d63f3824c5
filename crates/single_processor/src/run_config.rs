use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Settings for one run, fixed at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    /// `input_path` named a regular file when the run started.
    pub single_file: bool,
    pub keep_errors: bool,
    pub model: String,
    pub output_dir: PathBuf,
    pub continue_on_error: bool,
}

impl RunConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        keep_errors: bool,
        model: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let input_path = input_path.into();
        let single_file = file_scanner::is_single_file(&input_path);
        Self {
            input_path,
            single_file,
            keep_errors,
            model: model.into(),
            output_dir: output_dir.into(),
            continue_on_error: false,
        }
    }

    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Destination path for a C source named `file_name`.
    pub fn output_path_for(&self, file_name: impl AsRef<OsStr>) -> PathBuf {
        crate::output_namer::output_path(&self.output_dir, file_name, self.keep_errors)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
