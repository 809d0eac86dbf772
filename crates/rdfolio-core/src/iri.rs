//! IRI validation for user-supplied ontology and base IRIs

/// Schemes accepted for user-supplied IRIs.
const VALID_SCHEMES: [&str; 8] = [
    "http://", "https://", "ftp://", "mailto:", "urn:", "tag:", "doi:", "data:",
];

/// Check whether a string is acceptable as an IRI. The rules are
/// deliberately narrow: a known scheme, no whitespace or angle-bracket
/// family characters, a non-empty authority for http/https/ftp, and a
/// trailing `/`, `#` or `:` so the IRI can serve as a namespace.
pub fn is_valid_iri(iri: &str) -> bool {
    let Some(scheme) = VALID_SCHEMES.iter().find(|s| iri.starts_with(**s)) else {
        return false;
    };

    if iri.chars().any(|c| {
        matches!(
            c,
            ' ' | '\t' | '\n' | '\r' | '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`'
        )
    }) {
        return false;
    }

    if matches!(*scheme, "http://" | "https://" | "ftp://") {
        let rest = &iri[scheme.len()..];
        let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
        if authority.is_empty() {
            return false;
        }
    }

    matches!(iri.chars().last(), Some('/' | '#' | ':'))
}
