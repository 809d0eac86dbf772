//! Derived triples of a triple map
//!
//! The derived set is a whitelist-bounded depth-2 walk, not full
//! reachability: it isolates exactly the triples defining one triple map's
//! identity (its logical-source binding and subject-generation rule) and
//! ignores incidental graph neighbours.

use itertools::Itertools;
use rdfolio_core::model::{Iri, Term, Triple};
use rdfolio_core::vocabulary::{
    ql_reference_formulation, rml_logical_source, rml_reference, rr_class, rr_constant,
    rr_graph_map, rr_subject_map, rr_template, rr_term_type,
};
use rdfolio_store::GraphStore;
use std::collections::HashSet;

fn binding_predicates() -> [Iri; 2] {
    [rml_logical_source(), rr_subject_map()]
}

/// Predicates that may appear inside a logical-source or subject-map node.
fn child_whitelist() -> [Iri; 7] {
    [
        rr_class(),
        rr_term_type(),
        rr_graph_map(),
        rr_template(),
        rr_constant(),
        rml_reference(),
        ql_reference_formulation(),
    ]
}

/// Triples that define the identity of the triple map rooted at `tmap`.
pub fn derived_triples(store: &GraphStore, tmap: &Term) -> HashSet<Triple> {
    let bindings = binding_predicates();
    let whitelist = child_whitelist();

    let mut derived = HashSet::new();
    for (predicate, object) in store.predicate_objects(tmap) {
        if !bindings.contains(predicate) {
            continue;
        }
        derived.insert(Triple::new(tmap.clone(), predicate.clone(), object.clone()));

        // follow the component node and keep its whitelisted triples
        if object.is_node() {
            for (child_predicate, child_object) in store.predicate_objects(object) {
                if whitelist.contains(child_predicate) {
                    derived.insert(Triple::new(
                        object.clone(),
                        child_predicate.clone(),
                        child_object.clone(),
                    ));
                }
            }
        }
    }
    derived
}

/// Derived triples of `target` that are derived from no other triple map.
/// Read-only sharing query; the deletion routine makes its own reuse
/// decision via [`crate::mutate::reference_count`], and the two must agree.
pub fn exclusive_derived_triples<'a>(
    store: &GraphStore,
    others: impl IntoIterator<Item = &'a Term>,
    target: &Term,
) -> Vec<Triple> {
    let shared: HashSet<Triple> = others
        .into_iter()
        .filter(|other| *other != target)
        .flat_map(|other| derived_triples(store, other))
        .collect();

    derived_triples(store, target)
        .into_iter()
        .filter(|triple| !shared.contains(triple))
        .sorted()
        .collect()
}
