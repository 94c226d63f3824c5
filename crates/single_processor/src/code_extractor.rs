//! Recovers plain source code from a model completion.

use log::debug;

/// Opening fences removed from the start of a completion, tried in order.
const OPENING_FENCES: [&str; 2] = ["```rs", "```rust"];

const CLOSING_FENCE: &str = "```";

/// Strip Markdown fence decoration from a completion.
///
/// Removes at most one opening fence (the first of [`OPENING_FENCES`] found
/// at the very start), then one closing fence at the very end, then trims
/// surrounding whitespace. Text without fences only gets trimmed.
pub fn sanitize_completion(raw: &str) -> String {
    let mut text = raw;

    if let Some(rest) = OPENING_FENCES
        .iter()
        .find_map(|fence| text.strip_prefix(fence))
    {
        debug!("Removed opening code fence");
        text = rest;
    }

    if let Some(rest) = text.strip_suffix(CLOSING_FENCE) {
        debug!("Removed closing code fence");
        text = rest;
    }

    text.trim().to_string()
}
