//! Subject-generation rule resolution
//!
//! A subject map node carries at most one generation rule: a string template
//! with `{field}` placeholders, a fixed constant, or a direct field
//! reference. Well-formed data has exactly one; when several are present the
//! template wins, then the constant, then the reference.

use lazy_static::lazy_static;
use rdfolio_core::model::{Iri, Term};
use rdfolio_core::vocabulary::{rml_reference, rr_constant, rr_template};
use rdfolio_store::GraphStore;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Label used for anonymous subject map nodes.
pub const UNLABELLED: &str = "Unlabelled";

/// Generation strategy of a subject map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectRuleKind {
    Template,
    Constant,
    Reference,
}

/// Resolved identity of a subject map node. A node with no rule bound yet
/// resolves to all-`None` fields, a legitimate in-progress editing state
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectDescriptor {
    /// Raw rule value (template string, constant lexical form, or field name)
    pub value: Option<String>,
    /// Human-meaningful identifier extracted from the rule
    pub identifier: Option<String>,
    pub kind: Option<SubjectRuleKind>,
    /// Local name of the subject map node, or [`UNLABELLED`] for anonymous
    /// nodes
    pub label: String,
}

impl SubjectDescriptor {
    fn unresolved(label: String) -> Self {
        Self {
            value: None,
            identifier: None,
            kind: None,
            label,
        }
    }
}

/// Inspect a subject map node and extract its rule value, identifier, rule
/// kind and label. Pure read; the store is not modified.
pub fn resolve_subject(store: &GraphStore, node: &Term) -> SubjectDescriptor {
    let label = match node {
        Term::Iri(iri) => iri.local_name().to_string(),
        _ => UNLABELLED.to_string(),
    };

    let template = store.value(node, &rr_template());
    let constant = store.value(node, &rr_constant());
    let reference = store.value(node, &rml_reference());

    if let Some(template) = template {
        let raw = template.lexical().to_string();
        let identifier = PLACEHOLDER
            .captures_iter(&raw)
            .last()
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| raw.clone());
        return SubjectDescriptor {
            value: Some(raw),
            identifier: Some(identifier),
            kind: Some(SubjectRuleKind::Template),
            label,
        };
    }

    if let Some(constant) = constant {
        let raw = constant.lexical().to_string();
        // The constant is expected to be URI-shaped; degrade to the whole
        // value when no local name can be split off.
        let local = Iri::new(raw.clone()).local_name().to_string();
        let identifier = if local.is_empty() {
            debug!(value = %raw, "constant subject rule is not URI-shaped");
            raw.clone()
        } else {
            local
        };
        return SubjectDescriptor {
            value: Some(raw),
            identifier: Some(identifier),
            kind: Some(SubjectRuleKind::Constant),
            label,
        };
    }

    if let Some(reference) = reference {
        let raw = reference.lexical().to_string();
        return SubjectDescriptor {
            value: Some(raw.clone()),
            identifier: Some(raw),
            kind: Some(SubjectRuleKind::Reference),
            label,
        };
    }

    SubjectDescriptor::unresolved(label)
}
