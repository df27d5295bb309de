use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Canonicalizes free-text identifiers (stream names, subject names) for
/// case/punctuation-insensitive comparison: lower-case, `&` becomes "and",
/// runs of non-alphanumerics collapse to a single space, then trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', "and");
    non_alphanumeric()
        .replace_all(&lowered, " ")
        .trim()
        .to_string()
}
