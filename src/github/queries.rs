//! Search query construction for the `/search/repositories` endpoint.
//!
//! A filtered search is always scoped to a single owner and includes
//! forks, matching what the repository view displays in browse mode.

/// Build the `q` parameter from the filter criteria. The free text (if
/// any) leads, followed by the scoping qualifiers.
pub fn build_search_query(username: &str, text: &str, language: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let text = text.trim();
    if !text.is_empty() {
        parts.push(text.to_string());
    }

    parts.push(format!("user:{}", username));
    parts.push("fork:true".to_string());

    if let Some(language) = language
        && !language.trim().is_empty()
    {
        parts.push(language_qualifier(language.trim()));
    }

    parts.join(" ")
}

/// Build a `language:` qualifier from a display name as returned by the
/// repositories API.
///
/// `+` and `#` don't survive the query encoding, so they are replaced
/// with the aliases the search API accepts (`C++` becomes `Cpp`, `C#`
/// becomes `Csharp`). Multi-word names are quoted.
pub fn language_qualifier(language: &str) -> String {
    let token = language.replace('+', "p").replace('#', "sharp");
    if token.contains(char::is_whitespace) {
        format!("language:\"{}\"", token)
    } else {
        format!("language:{}", token)
    }
}
