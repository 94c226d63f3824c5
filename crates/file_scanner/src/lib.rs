//! Input discovery for the translator.
//!
//! Turns the path given on the command line into the list of candidate
//! files that the processor will look at, and decides which of those are
//! C sources.

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files with this suffix are documentation and never become candidates.
const DOC_SUFFIX: &[u8] = b".md";

/// A directory entry that is eligible for translation before the C filter runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Base name as found on disk, which need not be valid UTF-8.
    pub file_name: OsString,
    pub dir: PathBuf,
}

impl Candidate {
    pub fn new(file_name: impl Into<OsString>, dir: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            dir: dir.into(),
        }
    }

    /// Full path of the candidate on disk.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// File name for console output and summaries, lossy for non UTF-8 names.
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

/// Whether the input path names a regular file rather than a directory.
pub fn is_single_file(input_path: &Path) -> bool {
    input_path.is_file()
}

/// Resolve the candidates for a run.
///
/// A single file yields exactly one candidate. A directory yields its
/// immediate entries, minus sub-directories and `.md` files, in the order
/// the listing returns them.
pub fn resolve_candidates(input_path: &Path, single_file: bool) -> Result<Vec<Candidate>> {
    if single_file {
        let candidate = single_candidate(input_path)?;
        debug!("Resolved single file candidate: {:?}", candidate);
        return Ok(vec![candidate]);
    }

    let candidates = list_directory(input_path)?;
    info!(
        "Found {} candidate files in {}",
        candidates.len(),
        input_path.display()
    );
    Ok(candidates)
}

/// Split a file path into its base name and containing directory.
fn single_candidate(input_path: &Path) -> Result<Candidate> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| anyhow!("Input path has no usable file name: {}", input_path.display()))?;

    let dir = match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(Candidate::new(file_name, dir))
}

fn list_directory(dir: &Path) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            debug!("Skipping directory entry {}", path.display());
            continue;
        }

        let file_name = entry.file_name();
        if file_name.as_encoded_bytes().ends_with(DOC_SUFFIX) {
            debug!("Skipping documentation file {}", path.display());
            continue;
        }

        candidates.push(Candidate::new(file_name, dir));
    }

    Ok(candidates)
}

/// Whether a file name has a `.c` extension, compared case-insensitively.
///
/// Uses the platform notion of extension, so `.c` on its own is a hidden
/// file with no extension and `foo.cfoo` does not match.
pub fn is_c_source(file_name: impl AsRef<OsStr>) -> bool {
    Path::new(file_name.as_ref())
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("c"))
}
