use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

/// True when the input has nothing but whitespace. Such input is rejected
/// before normalization ever runs.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Canonicalize free text before classification.
///
/// Lowercases, drops URL tokens, turns every non-alphanumeric,
/// non-whitespace char into a space, then collapses whitespace runs and
/// trims. Never fails; the result may be empty. Applying it twice gives
/// the same string as applying it once.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_RE.replace_all(&lowered, "");

    let cleaned: String = without_urls
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
