//! Tabular projections of the mapping for display
//!
//! Plain serializable rows; no graph logic beyond reading the session
//! caches. Summary views list the most recently created map first.

use crate::session::EditingSession;
use crate::subject::{SubjectRuleKind, UNLABELLED};
use rdfolio_core::model::Term;
use rdfolio_core::vocabulary::{rml_logical_source, rr_class, rr_graph, rr_subject_map, rr_term_type};
use serde::Serialize;

/// One triple map with its logical source binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripleMapRow {
    pub label: String,
    pub logical_source_label: String,
    pub data_source: Option<String>,
    pub iri: String,
}

/// One triple map's subject rule summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRow {
    pub triple_map: String,
    pub data_source: Option<String>,
    pub subject_label: String,
    pub rule: Option<SubjectRuleKind>,
    pub subject: String,
    pub iri: String,
}

/// Full subject view including class, term type and graph bindings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDetailRow {
    pub triple_map: String,
    pub data_source: Option<String>,
    pub subject_label: String,
    pub rule: Option<SubjectRuleKind>,
    pub subject: String,
    pub class: Option<String>,
    pub term_type: Option<String>,
    pub graph: Option<String>,
}

fn node_label(node: &Term) -> String {
    match node {
        Term::Iri(iri) => iri.local_name().to_string(),
        _ => UNLABELLED.to_string(),
    }
}

/// Triple map summary, newest first.
pub fn triple_map_rows(session: &EditingSession) -> Vec<TripleMapRow> {
    let mut rows: Vec<TripleMapRow> = session
        .labels()
        .filter_map(|label| {
            let tmap = session.triple_map(label)?;
            let logical_source = session.store().value(tmap, &rml_logical_source());
            Some(TripleMapRow {
                label: label.to_string(),
                logical_source_label: logical_source.map(node_label).unwrap_or_default(),
                data_source: session.data_source(label).map(str::to_string),
                iri: tmap.lexical().to_string(),
            })
        })
        .collect();
    rows.reverse();
    rows
}

/// Subject summary, newest first. Maps without a resolved subject identifier
/// are omitted.
pub fn subject_rows(session: &EditingSession) -> Vec<SubjectRow> {
    let mut rows: Vec<SubjectRow> = session
        .labels()
        .filter_map(|label| {
            let subject = session.subject(label)?;
            let identifier = subject.identifier.clone()?;
            Some(SubjectRow {
                triple_map: label.to_string(),
                data_source: session.data_source(label).map(str::to_string),
                subject_label: subject.label.clone(),
                rule: subject.kind,
                subject: identifier,
                iri: session.triple_map(label)?.lexical().to_string(),
            })
        })
        .collect();
    rows.reverse();
    rows
}

/// Complete subject view with class, term-type and graph bindings read from
/// the subject map node.
pub fn subject_detail_rows(session: &EditingSession) -> Vec<SubjectDetailRow> {
    session
        .labels()
        .filter_map(|label| {
            let subject = session.subject(label)?;
            let identifier = subject.identifier.clone()?;
            let tmap = session.triple_map(label)?;
            let store = session.store();
            let subject_node = store.value(tmap, &rr_subject_map())?.clone();

            let local = |predicate| {
                store.value(&subject_node, predicate).map(|term| match term {
                    Term::Iri(iri) => iri.local_name().to_string(),
                    other => other.lexical().to_string(),
                })
            };

            Some(SubjectDetailRow {
                triple_map: label.to_string(),
                data_source: session.data_source(label).map(str::to_string),
                subject_label: subject.label.clone(),
                rule: subject.kind,
                subject: identifier,
                class: local(&rr_class()),
                term_type: local(&rr_term_type()),
                graph: local(&rr_graph()),
            })
        })
        .collect()
}
