use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures raised while reading sources and writing translations.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The output path exists but is not a directory. Stops the whole run.
    #[error("Output path is not a directory: {}", .path.display())]
    OutputNotDirectory { path: PathBuf },

    #[error("Failed to create output directory {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read source file {}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// Errors that invalidate every remaining file, not just the current one.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ProcessError::OutputNotDirectory { .. } | ProcessError::CreateOutputDir { .. }
        )
    }
}

/// Whether an error anywhere in the chain is a run-level failure.
pub fn is_fatal(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<ProcessError>())
        .any(ProcessError::is_fatal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_fatal_classification() {
        let fatal = ProcessError::OutputNotDirectory {
            path: PathBuf::from("outputs"),
        };
        assert!(fatal.is_fatal());

        let per_file = ProcessError::ReadSource {
            path: PathBuf::from("a.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(!per_file.is_fatal());
    }

    #[test]
    fn test_fatal_through_context() {
        let err = Err::<(), _>(ProcessError::OutputNotDirectory {
            path: PathBuf::from("outputs"),
        })
        .context("Failed to translate a.c")
        .unwrap_err();
        assert!(is_fatal(&err));

        let err = anyhow::anyhow!("network down");
        assert!(!is_fatal(&err));
    }
}
