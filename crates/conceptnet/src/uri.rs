/// Build a concept URI from free text: `"Tea Kettle"` -> `/c/en/tea_kettle`.
///
/// The API is case-insensitive about concept names but canonicalizes to
/// lowercase with underscores; normalizing here keeps cache keys stable.
pub fn concept_uri(lang: &str, term: &str) -> String {
    let slug = term
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("/c/{lang}/{slug}")
}

/// Last path segment of a concept URI, underscores restored to spaces:
/// `/c/en/tea_kettle` -> `tea kettle`. Non-URI labels pass through.
pub(crate) fn concept_label(uri_or_label: &str) -> String {
    uri_or_label
        .rsplit('/')
        .next()
        .unwrap_or(uri_or_label)
        .replace('_', " ")
}
