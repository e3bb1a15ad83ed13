/// Report whether a paginated response has a further page, based on the
/// `Link` response header.
///
/// The header is a comma-separated list of `<url>; rel="relation"`
/// entries; a `rel="next"` entry is the sole indicator of more data.
/// Whitespace around the semicolon and unquoted relation values are
/// tolerated. Empty or malformed input yields `false`.
pub fn has_next_page(link: &str) -> bool {
    link.split(',').any(entry_is_next)
}

fn entry_is_next(entry: &str) -> bool {
    let mut parts = entry.split(';');

    let url = parts.next().map(str::trim).unwrap_or_default();
    if !(url.starts_with('<') && url.ends_with('>')) {
        return false;
    }

    parts.any(|param| {
        let param = param.trim();
        param
            .strip_prefix("rel=")
            .is_some_and(|rel| rel.trim().trim_matches('"') == "next")
    })
}
