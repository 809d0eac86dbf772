//! Structural edits of the mapping graph
//!
//! Creation binds a triple map to its logical source and inferred reference
//! formulation; removal deletes the map's own triples and each component
//! node's triples only when no other map still references the node.

use crate::MappingError;
use rdfolio_core::model::{Iri, Literal, Term, Triple};
use rdfolio_core::vocabulary::{
    ql_csv, ql_json_path, ql_reference_formulation, ql_xpath, rml_logical_source, rml_source,
    rr_subject_map, rr_template, MAP,
};
use rdfolio_store::GraphStore;
use tracing::info;

/// Map a data source file name to its reference formulation by extension
/// (case-insensitive). The closed set mirrors the upstream file selection;
/// anything else is a defensive [`MappingError::UnsupportedFormat`].
pub fn infer_reference_formulation(source_file: &str) -> Result<Iri, MappingError> {
    let extension = source_file
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .ok_or_else(|| MappingError::UnsupportedFormat(source_file.to_string()))?;

    match extension.to_ascii_lowercase().as_str() {
        "csv" => Ok(ql_csv()),
        "json" => Ok(ql_json_path()),
        "xml" => Ok(ql_xpath()),
        other => Err(MappingError::UnsupportedFormat(other.to_string())),
    }
}

/// Create a triple map named from `label`, bound to `logical_source` and the
/// given data source file. Nothing is written when the label is already
/// taken or the format is unsupported.
pub fn create_triple_map(
    store: &mut GraphStore,
    label: &str,
    source_file: &str,
    logical_source: Term,
) -> Result<Iri, MappingError> {
    let tmap = MAP.iri(label);
    let tmap_term = Term::Iri(tmap.clone());
    if !store
        .find(Some(&tmap_term), Some(&rml_logical_source()), None)
        .is_empty()
    {
        return Err(MappingError::DuplicateLabel(label.to_string()));
    }
    let formulation = infer_reference_formulation(source_file)?;

    store.insert(Triple::new(
        tmap_term.clone(),
        rml_logical_source(),
        logical_source.clone(),
    ));
    store.insert(Triple::new(
        logical_source.clone(),
        rml_source(),
        Literal::new(source_file),
    ));
    store.insert(Triple::new(
        logical_source,
        ql_reference_formulation(),
        formulation,
    ));

    info!(label, source_file, "created triple map");
    Ok(tmap)
}

/// Bind a subject map to `tmap` with a template interpolating `identifier`
/// into the fixed resource URI pattern.
pub fn bind_subject_template(
    store: &mut GraphStore,
    tmap: &Term,
    subject_map_label: &str,
    identifier: &str,
) -> Iri {
    let subject_map = MAP.iri(subject_map_label);
    let template = format!("http://example.org/resource/{{{}}}", identifier);

    store.insert(Triple::new(
        tmap.clone(),
        rr_subject_map(),
        Term::Iri(subject_map.clone()),
    ));
    store.insert(Triple::new(
        Term::Iri(subject_map.clone()),
        rr_template(),
        Literal::new(template),
    ));

    info!(label = subject_map_label, identifier, "bound subject map");
    subject_map
}

/// Number of subjects pointing at `node` through `predicate`. The single
/// sharing primitive: both the deletion reuse-check and callers wanting a
/// would-be-orphaned answer go through this count.
pub fn reference_count(store: &GraphStore, predicate: &Iri, node: &Term) -> usize {
    store.find(None, Some(predicate), Some(node)).len()
}

/// Remove a triple map and its unshared component nodes, returning every
/// removed triple (owner first, then logical source, then subject map) for
/// caller-level undo.
///
/// The owner's triples go first, so the reuse scan for each component runs
/// against the post-removal graph and cannot count the just-removed edge.
pub fn remove_triple_map(store: &mut GraphStore, tmap: &Term) -> Vec<Triple> {
    let logical_source = store.value(tmap, &rml_logical_source()).cloned();
    let subject_map = store.value(tmap, &rr_subject_map()).cloned();

    let mut removed = store.remove(Some(tmap), None, None);

    if let Some(logical_source) = logical_source {
        if reference_count(store, &rml_logical_source(), &logical_source) == 0 {
            removed.extend(store.remove(Some(&logical_source), None, None));
        }
    }

    if let Some(subject_map) = subject_map {
        if reference_count(store, &rr_subject_map(), &subject_map) == 0 {
            removed.extend(store.remove(Some(&subject_map), None, None));
        }
    }

    info!(tmap = %tmap, removed = removed.len(), "removed triple map");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::exclusive_derived_triples;
    use rdfolio_core::model::BlankNode;

    fn fresh_map(store: &mut GraphStore, label: &str, source: &str) -> (Term, Term) {
        let ls = Term::Blank(BlankNode::new());
        let tmap = create_triple_map(store, label, source, ls.clone()).unwrap();
        (Term::Iri(tmap), ls)
    }

    #[test]
    fn create_binds_source_and_formulation() {
        let mut store = GraphStore::new();
        let (m1, ls) = fresh_map(&mut store, "M1", "readings.csv");

        assert_eq!(store.value(&m1, &rml_logical_source()), Some(&ls));
        assert_eq!(
            store.value(&ls, &rml_source()),
            Some(&Term::Literal(Literal::new("readings.csv")))
        );
        assert_eq!(
            store.value(&ls, &ql_reference_formulation()),
            Some(&Term::Iri(ql_csv()))
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn format_inference_is_case_insensitive_and_closed() {
        assert_eq!(infer_reference_formulation("readings.CSV").unwrap(), ql_csv());
        assert_eq!(
            infer_reference_formulation("device.xml").unwrap(),
            ql_xpath()
        );
        assert_eq!(
            infer_reference_formulation("payload.json").unwrap(),
            ql_json_path()
        );
        assert!(matches!(
            infer_reference_formulation("notes.txt"),
            Err(MappingError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            infer_reference_formulation("no_extension"),
            Err(MappingError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn duplicate_label_leaves_store_unchanged() {
        let mut store = GraphStore::new();
        fresh_map(&mut store, "M1", "a.csv");
        let before = store.len();

        let result = create_triple_map(
            &mut store,
            "M1",
            "b.json",
            Term::Blank(BlankNode::new()),
        );
        assert!(matches!(result, Err(MappingError::DuplicateLabel(_))));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn unsupported_format_leaves_store_unchanged() {
        let mut store = GraphStore::new();
        let result = create_triple_map(
            &mut store,
            "M1",
            "notes.txt",
            Term::Blank(BlankNode::new()),
        );
        assert!(matches!(result, Err(MappingError::UnsupportedFormat(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn subject_template_interpolates_identifier() {
        let mut store = GraphStore::new();
        let (m1, _) = fresh_map(&mut store, "M1", "a.csv");
        let sm = bind_subject_template(&mut store, &m1, "S1", "id");

        assert_eq!(store.value(&m1, &rr_subject_map()), Some(&Term::Iri(sm.clone())));
        assert_eq!(
            store.value(&Term::Iri(sm), &rr_template()),
            Some(&Term::Literal(Literal::new(
                "http://example.org/resource/{id}"
            )))
        );
    }

    #[test]
    fn removal_returns_all_removed_triples() {
        let mut store = GraphStore::new();
        let (m1, _) = fresh_map(&mut store, "M1", "a.csv");
        bind_subject_template(&mut store, &m1, "S1", "id");

        let removed = remove_triple_map(&mut store, &m1);
        assert_eq!(removed.len(), 5);
        assert!(store.is_empty());
    }

    #[test]
    fn shared_logical_source_survives_first_removal() {
        let mut store = GraphStore::new();
        let (m1, ls) = fresh_map(&mut store, "M1", "a.csv");
        // second map reuses M1's logical source node
        let m2 = Term::Iri(MAP.iri("M2"));
        store.insert(Triple::new(m2.clone(), rml_logical_source(), ls.clone()));

        remove_triple_map(&mut store, &m1);
        assert!(!store.find(Some(&ls), None, None).is_empty());
        assert_eq!(store.value(&m2, &rml_logical_source()), Some(&ls));

        // removing the second map deletes the now-unshared node
        remove_triple_map(&mut store, &m2);
        assert!(store.is_empty());
    }

    #[test]
    fn exclusive_matches_removal_decision() {
        // Whatever the exclusivity query reports as shared must be exactly
        // what removal preserves.
        let mut store = GraphStore::new();
        let (m1, ls) = fresh_map(&mut store, "M1", "a.csv");
        let m2 = Term::Iri(MAP.iri("M2"));
        store.insert(Triple::new(m2.clone(), rml_logical_source(), ls.clone()));

        let maps = [m1.clone(), m2.clone()];
        let m1_exclusive = exclusive_derived_triples(&store, maps.iter(), &m1);
        let shared_is_reported = !m1_exclusive
            .iter()
            .any(|t| t.subject == ls || t.object == ls && t.subject != m1);

        let removed = remove_triple_map(&mut store, &m1);
        let ls_preserved = !store.find(Some(&ls), None, None).is_empty();

        assert!(ls_preserved, "reference-counted removal must keep shared node");
        assert!(
            shared_is_reported,
            "exclusivity query must not claim shared node triples"
        );
        // the removed set is exactly the owner's own edges
        assert!(removed.iter().all(|t| t.subject == m1));
    }
}
