//! Turtle export of a mapping graph
//!
//! Hand-written writer: a `@prefix` block from the store's registry, then
//! triples grouped by subject with predicate lists. IRIs covered by a
//! registered namespace are rendered as prefixed names.

use crate::snapshot::StoreError;
use crate::store::GraphStore;
use rdfolio_core::model::{Iri, Term};
use std::fs;
use std::path::Path;

/// Serialize the store as Turtle.
pub fn export_turtle(store: &GraphStore) -> String {
    let mut out = String::new();

    for (prefix, namespace) in store.namespaces() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
    }
    if store.namespaces().next().is_some() {
        out.push('\n');
    }

    // Group triples by subject, preserving first-seen subject order.
    let mut subjects: Vec<&Term> = Vec::new();
    for triple in store.iter() {
        if !subjects.contains(&&triple.subject) {
            subjects.push(&triple.subject);
        }
    }

    for subject in subjects {
        let entries = store.predicate_objects(subject);
        let count = entries.len();
        out.push_str(&render_term(store, subject));
        for (i, (predicate, object)) in entries.into_iter().enumerate() {
            let sep = if i + 1 == count { " ." } else { " ;" };
            if i == 0 {
                out.push(' ');
            } else {
                out.push_str("\n    ");
            }
            out.push_str(&render_iri(store, predicate));
            out.push(' ');
            out.push_str(&render_term(store, object));
            out.push_str(sep);
        }
        out.push('\n');
    }

    out
}

/// Serialize the store as Turtle and write it to `path`.
pub fn export_to_file(store: &GraphStore, path: &Path) -> Result<(), StoreError> {
    fs::write(path, export_turtle(store))?;
    Ok(())
}

fn render_term(store: &GraphStore, term: &Term) -> String {
    match term {
        Term::Iri(iri) => render_iri(store, iri),
        Term::Blank(node) => format!("_:{}", node.as_str()),
        Term::Literal(lit) => {
            let escaped = lit
                .value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('\n', "\\n")
                .replace('\r', "\\r");
            match &lit.datatype {
                Some(dt) => format!("\"{}\"^^{}", escaped, render_iri(store, dt)),
                None => format!("\"{}\"", escaped),
            }
        }
    }
}

fn render_iri(store: &GraphStore, iri: &Iri) -> String {
    let (namespace, local) = iri.split_local();
    if !local.is_empty() && is_plain_local(local) {
        for (prefix, bound) in store.namespaces() {
            if bound == namespace {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    format!("<{}>", iri.as_str())
}

// Local names with punctuation would need escaping; fall back to the full
// IRI form instead.
fn is_plain_local(local: &str) -> bool {
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
