//! Reachability over the mapping graph
//!
//! Primary triples touch a node directly; secondary triples are reachable
//! over undirected chains of named/anonymous nodes. Literals are endpoints,
//! never followed.

use rdfolio_core::model::{Term, Triple};
use rdfolio_store::GraphStore;
use std::collections::HashSet;

/// All triples where `node` appears as subject or object.
pub fn primary_triples(store: &GraphStore, node: &Term) -> HashSet<Triple> {
    let mut primary: HashSet<Triple> = store
        .find(Some(node), None, None)
        .into_iter()
        .cloned()
        .collect();
    primary.extend(store.find(None, None, Some(node)).into_iter().cloned());
    primary
}

/// Triples transitively reachable from `node` that are not primary.
///
/// Depth-first over both edge directions; the visited set guarantees
/// termination on cyclic graphs, and a triple whose far endpoint was already
/// visited is neither collected nor re-followed.
pub fn secondary_triples(store: &GraphStore, node: &Term) -> HashSet<Triple> {
    let primary = primary_triples(store, node);

    let mut secondary = HashSet::new();
    let mut visited: HashSet<Term> = HashSet::new();
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        // outgoing edges
        for (predicate, object) in store.predicate_objects(&current) {
            if object.is_node() && !visited.contains(object) {
                stack.push(object.clone());
                let triple = Triple::new(current.clone(), predicate.clone(), object.clone());
                if !primary.contains(&triple) {
                    secondary.insert(triple);
                }
            }
        }

        // incoming edges
        for (subject, predicate) in store.subject_predicates(&current) {
            if subject.is_node() && !visited.contains(subject) {
                stack.push(subject.clone());
                let triple = Triple::new(subject.clone(), predicate.clone(), current.clone());
                if !primary.contains(&triple) {
                    secondary.insert(triple);
                }
            }
        }
    }

    secondary
}
