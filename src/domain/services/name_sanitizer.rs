//! Filesystem-safe names for guilds and assets.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s").expect("Invalid regex"))
}

fn non_word_regex() -> &'static Regex {
    static NON_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    NON_WORD_REGEX.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex"))
}

/// Maps a display name to a token made only of ASCII letters, digits and `_`.
///
/// Whitespace becomes `_`; every other character outside the word class is
/// dropped. The result may be empty.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let underscored = whitespace_regex().replace_all(name, "_");
    non_word_regex().replace_all(&underscored, "").into_owned()
}
