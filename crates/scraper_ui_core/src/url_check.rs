use std::sync::LazyLock;

use regex::Regex;

/// Same shape check the scrape form applies while the user types. It is
/// deliberately loose and case-sensitive; the server does the real parsing.
static URL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[0-9a-z.-]+\.[a-z.]{2,6}[/A-Za-z0-9_ .-]*/?$").ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlValidity {
    /// Empty input: neither valid nor invalid styling.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

pub fn check_url(input: &str) -> UrlValidity {
    let url = input.trim();
    if url.is_empty() {
        return UrlValidity::Neutral;
    }
    match URL_SHAPE.as_ref() {
        Some(shape) if shape.is_match(url) => UrlValidity::Valid,
        _ => UrlValidity::Invalid,
    }
}
