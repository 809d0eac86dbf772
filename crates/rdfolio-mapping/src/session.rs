//! Editing session: the mapping graph plus derived caches
//!
//! One session owns one mutable mapping graph. Label-to-node lookups, data
//! source names and resolved subject rules are cached and rebuilt explicitly
//! after every mutation rather than recomputed on every read.

use crate::derived::{derived_triples, exclusive_derived_triples};
use crate::mutate;
use crate::subject::{resolve_subject, SubjectDescriptor};
use crate::MappingError;
use rdfolio_core::model::{BlankNode, Iri, Term, Triple};
use rdfolio_core::vocabulary::{
    predefined_prefixes, rml_logical_source, rml_source, rr_subject_map, DEFAULT_PREFIXES,
};
use rdfolio_store::GraphStore;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Mutable editing session over one mapping document.
#[derive(Debug, Default)]
pub struct EditingSession {
    store: GraphStore,
    /// triple-map label -> node, in first-seen store order
    triple_maps: Vec<(String, Term)>,
    /// triple-map label -> data source file
    data_sources: HashMap<String, Option<String>>,
    /// triple-map label -> resolved subject rule
    subjects: HashMap<String, SubjectDescriptor>,
}

impl EditingSession {
    /// Start a session on an empty graph with the application namespaces
    /// bound.
    pub fn new() -> Self {
        let mut store = GraphStore::new();
        for (prefix, namespace) in predefined_prefixes() {
            store.bind(prefix, namespace);
        }
        Self {
            store,
            ..Default::default()
        }
    }

    /// Resume a session over an existing graph (e.g. a loaded snapshot).
    pub fn from_store(store: GraphStore) -> Self {
        let mut session = Self {
            store,
            ..Default::default()
        };
        session.refresh();
        session
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn into_store(self) -> GraphStore {
        self.store
    }

    /// Triple map labels in creation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.triple_maps.iter().map(|(label, _)| label.as_str())
    }

    pub fn triple_map(&self, label: &str) -> Option<&Term> {
        self.triple_maps
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, node)| node)
    }

    pub fn data_source(&self, label: &str) -> Option<&str> {
        self.data_sources.get(label)?.as_deref()
    }

    pub fn subject(&self, label: &str) -> Option<&SubjectDescriptor> {
        self.subjects.get(label)
    }

    /// Prefixes bound beyond the well-known defaults.
    pub fn user_namespaces(&self) -> Vec<(String, String)> {
        self.store
            .namespaces()
            .filter(|(prefix, _)| !DEFAULT_PREFIXES.contains_key(prefix))
            .map(|(p, n)| (p.to_string(), n.to_string()))
            .collect()
    }

    pub fn bind_namespace(&mut self, prefix: &str, namespace: &str) {
        self.store.bind(prefix, namespace);
    }

    /// Rebuild the derived caches from the graph. Called after every
    /// mutation; cheap at mapping-document scale.
    pub fn refresh(&mut self) {
        self.triple_maps.clear();
        self.data_sources.clear();
        self.subjects.clear();

        let logical_source = rml_logical_source();
        let subject_map = rr_subject_map();
        let source = rml_source();

        let nodes: Vec<Term> = self
            .store
            .subjects_with(&logical_source, None)
            .into_iter()
            .cloned()
            .collect();

        for node in nodes {
            let Term::Iri(iri) = &node else {
                // triple maps are always named; skip anything else
                continue;
            };
            let label = iri.local_name().to_string();

            let data_source = self
                .store
                .value(&node, &logical_source)
                .and_then(|ls| self.store.value(ls, &source))
                .and_then(|term| term.as_literal())
                .map(|lit| lit.value.clone());
            self.data_sources.insert(label.clone(), data_source);

            if let Some(subject_node) = self.store.value(&node, &subject_map).cloned() {
                self.subjects
                    .insert(label.clone(), resolve_subject(&self.store, &subject_node));
            }

            self.triple_maps.push((label, node));
        }

        debug!(triple_maps = self.triple_maps.len(), "session caches refreshed");
    }

    /// Create a triple map over a data source file, minting a fresh
    /// anonymous logical-source node.
    pub fn create_triple_map(
        &mut self,
        label: &str,
        source_file: &str,
    ) -> Result<Iri, MappingError> {
        if self.triple_map(label).is_some() {
            return Err(MappingError::DuplicateLabel(label.to_string()));
        }
        let logical_source = Term::Blank(BlankNode::new());
        let tmap = mutate::create_triple_map(&mut self.store, label, source_file, logical_source)?;
        self.refresh();
        Ok(tmap)
    }

    /// Bind a subject-map template to an existing triple map.
    pub fn bind_subject_template(
        &mut self,
        tmap_label: &str,
        subject_map_label: &str,
        identifier: &str,
    ) -> Result<Iri, MappingError> {
        let tmap = self
            .triple_map(tmap_label)
            .cloned()
            .ok_or_else(|| MappingError::UnknownTripleMap(tmap_label.to_string()))?;
        let subject_map =
            mutate::bind_subject_template(&mut self.store, &tmap, subject_map_label, identifier);
        self.refresh();
        Ok(subject_map)
    }

    /// Remove a triple map, preserving component nodes still referenced by
    /// another map. Returns the removed triples for undo/audit.
    pub fn remove_triple_map(&mut self, label: &str) -> Result<Vec<Triple>, MappingError> {
        let tmap = self
            .triple_map(label)
            .cloned()
            .ok_or_else(|| MappingError::UnknownTripleMap(label.to_string()))?;
        let removed = mutate::remove_triple_map(&mut self.store, &tmap);
        self.refresh();
        Ok(removed)
    }

    /// Identity triples of a triple map, by label.
    pub fn derived_triples(&self, label: &str) -> Result<HashSet<Triple>, MappingError> {
        let tmap = self
            .triple_map(label)
            .ok_or_else(|| MappingError::UnknownTripleMap(label.to_string()))?;
        Ok(derived_triples(&self.store, tmap))
    }

    /// Identity triples of a triple map that no other map shares, by label.
    pub fn exclusive_derived_triples(&self, label: &str) -> Result<Vec<Triple>, MappingError> {
        let target = self
            .triple_map(label)
            .ok_or_else(|| MappingError::UnknownTripleMap(label.to_string()))?;
        let others: Vec<&Term> = self.triple_maps.iter().map(|(_, node)| node).collect();
        Ok(exclusive_derived_triples(&self.store, others, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SubjectRuleKind;

    #[test]
    fn new_session_binds_application_prefixes() {
        let session = EditingSession::new();
        let prefixes: Vec<_> = session.store().namespaces().map(|(p, _)| p).collect();
        assert!(prefixes.contains(&"rml"));
        assert!(prefixes.contains(&"rr"));
        assert!(prefixes.contains(&"map"));
    }

    #[test]
    fn caches_follow_mutations() {
        let mut session = EditingSession::new();
        session.create_triple_map("M1", "a.csv").unwrap();

        assert_eq!(session.labels().collect::<Vec<_>>(), vec!["M1"]);
        assert_eq!(session.data_source("M1"), Some("a.csv"));
        assert!(session.subject("M1").is_none());

        session.bind_subject_template("M1", "S1", "id").unwrap();
        let subject = session.subject("M1").unwrap();
        assert_eq!(subject.kind, Some(SubjectRuleKind::Template));
        assert_eq!(subject.identifier.as_deref(), Some("id"));
        assert_eq!(subject.label, "S1");

        session.remove_triple_map("M1").unwrap();
        assert_eq!(session.labels().count(), 0);
        assert!(session.store().is_empty());
    }

    #[test]
    fn duplicate_label_is_rejected_before_mutation() {
        let mut session = EditingSession::new();
        session.create_triple_map("M1", "a.csv").unwrap();
        let before = session.store().len();

        assert!(matches!(
            session.create_triple_map("M1", "b.json"),
            Err(MappingError::DuplicateLabel(_))
        ));
        assert_eq!(session.store().len(), before);
    }

    #[test]
    fn unknown_labels_are_errors() {
        let mut session = EditingSession::new();
        assert!(matches!(
            session.bind_subject_template("missing", "S", "id"),
            Err(MappingError::UnknownTripleMap(_))
        ));
        assert!(matches!(
            session.remove_triple_map("missing"),
            Err(MappingError::UnknownTripleMap(_))
        ));
        assert!(matches!(
            session.derived_triples("missing"),
            Err(MappingError::UnknownTripleMap(_))
        ));
    }

    #[test]
    fn session_resumes_from_existing_store() {
        let mut first = EditingSession::new();
        first.create_triple_map("M1", "a.csv").unwrap();
        first.bind_subject_template("M1", "S1", "id").unwrap();

        let resumed = EditingSession::from_store(first.into_store());
        assert_eq!(resumed.labels().collect::<Vec<_>>(), vec!["M1"]);
        assert_eq!(resumed.data_source("M1"), Some("a.csv"));
        assert_eq!(
            resumed.subject("M1").and_then(|s| s.identifier.as_deref()),
            Some("id")
        );
    }

    #[test]
    fn user_namespaces_exclude_defaults() {
        let mut session = EditingSession::new();
        session.bind_namespace("xsd", "http://www.w3.org/2001/XMLSchema#");
        session.bind_namespace("ex", "http://example.org/ns#");

        let user: Vec<_> = session
            .user_namespaces()
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(user.contains(&"ex".to_string()));
        assert!(!user.contains(&"xsd".to_string()));
    }
}
