//! Destination naming for translated files.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Prefix marking translations that were asked to keep memory-safety errors.
pub const PRESERVE_ERRORS_PREFIX: &str = "unsure-";

const RUST_SUFFIX: &str = ".rs";

/// Output file name for a C source.
///
/// Only the trailing `.c` extension is rewritten, so `c.config.c` becomes
/// `c.config.rs`. A name without that extension gets `.rs` appended. Names
/// that are not valid UTF-8 are carried over unchanged.
pub fn output_file_name(file_name: impl AsRef<OsStr>, keep_errors: bool) -> OsString {
    let file_name = file_name.as_ref();
    let stem = strip_c_extension(file_name).unwrap_or(file_name);

    let mut name = OsString::with_capacity(file_name.len() + PRESERVE_ERRORS_PREFIX.len() + 1);
    if keep_errors {
        name.push(PRESERVE_ERRORS_PREFIX);
    }
    name.push(stem);
    name.push(RUST_SUFFIX);
    name
}

/// Full output path of a C source inside `output_dir`.
pub fn output_path(output_dir: &Path, file_name: impl AsRef<OsStr>, keep_errors: bool) -> PathBuf {
    output_dir.join(output_file_name(file_name, keep_errors))
}

fn strip_c_extension(file_name: &OsStr) -> Option<&OsStr> {
    let path = Path::new(file_name);
    if !path.extension()?.eq_ignore_ascii_case("c") {
        return None;
    }
    path.file_stem()
}
