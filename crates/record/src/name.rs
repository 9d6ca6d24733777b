use std::sync::LazyLock;

use regex::Regex;

/// Name a record falls back to when sanitizing invalid input.
pub const DEFAULT_NAME: &str = "file";

// Anchored so the whole name must match, not a substring of it.
static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid name pattern"));

/// Whether `name` is acceptable as a file name: ASCII letters, digits,
/// dots, hyphens and underscores, at least one character long.
pub(crate) fn is_valid(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
