//! Graph storage and pattern-matched lookup

use rdfolio_core::model::{Iri, Term, Triple};
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap};

type IndexBucket = SmallVec<[usize; 8]>;

/// In-memory triple store with set semantics and subject/predicate/object
/// indices for pattern queries. One store backs one editing session.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    triples: Vec<Triple>,
    subject_index: HashMap<Term, IndexBucket>,
    predicate_index: HashMap<Iri, IndexBucket>,
    object_index: HashMap<Term, IndexBucket>,
    /// prefix -> namespace registry, sorted for deterministic export
    prefixes: BTreeMap<String, String>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.subject_index
            .get(&triple.subject)
            .map(|bucket| bucket.iter().any(|&i| &self.triples[i] == triple))
            .unwrap_or(false)
    }

    /// Insert a triple. Returns false when the triple was already present
    /// (the store has set semantics).
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.contains(&triple) {
            return false;
        }
        let index = self.triples.len();
        self.subject_index
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.predicate_index
            .entry(triple.predicate.clone())
            .or_default()
            .push(index);
        self.object_index
            .entry(triple.object.clone())
            .or_default()
            .push(index);
        self.triples.push(triple);
        true
    }

    /// Find triples matching a pattern, using the most selective index to
    /// narrow the search space.
    pub fn find(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let candidates: IndexBucket = match (subject, predicate, object) {
            (Some(s), _, _) => self.subject_index.get(s).cloned().unwrap_or_default(),
            (None, _, Some(o)) => self.object_index.get(o).cloned().unwrap_or_default(),
            (None, Some(p), None) => self.predicate_index.get(p).cloned().unwrap_or_default(),
            (None, None, None) => (0..self.triples.len()).collect(),
        };

        candidates
            .into_iter()
            .map(|i| &self.triples[i])
            .filter(|t| {
                subject.map_or(true, |s| &t.subject == s)
                    && predicate.map_or(true, |p| &t.predicate == p)
                    && object.map_or(true, |o| &t.object == o)
            })
            .collect()
    }

    /// Remove all triples matching a pattern, returning them in store order.
    /// Indices are rebuilt afterwards.
    pub fn remove(
        &mut self,
        subject: Option<&Term>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        let matches = |t: &Triple| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| &t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        };

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.triples.len());
        for triple in self.triples.drain(..) {
            if matches(&triple) {
                removed.push(triple);
            } else {
                kept.push(triple);
            }
        }
        self.triples = kept;
        if !removed.is_empty() {
            self.rebuild_indices();
        }
        removed
    }

    /// Single object for a (subject, predicate) pair, if any.
    pub fn value(&self, subject: &Term, predicate: &Iri) -> Option<&Term> {
        self.find(Some(subject), Some(predicate), None)
            .first()
            .map(|t| &t.object)
    }

    /// All (predicate, object) pairs leaving a subject.
    pub fn predicate_objects(&self, subject: &Term) -> Vec<(&Iri, &Term)> {
        self.find(Some(subject), None, None)
            .into_iter()
            .map(|t| (&t.predicate, &t.object))
            .collect()
    }

    /// All (subject, predicate) pairs arriving at an object.
    pub fn subject_predicates(&self, object: &Term) -> Vec<(&Term, &Iri)> {
        self.find(None, None, Some(object))
            .into_iter()
            .map(|t| (&t.subject, &t.predicate))
            .collect()
    }

    /// Distinct subjects with a matching (predicate, object) edge, in first
    /// insertion order.
    pub fn subjects_with(&self, predicate: &Iri, object: Option<&Term>) -> Vec<&Term> {
        let mut seen = Vec::new();
        for triple in self.find(None, Some(predicate), object) {
            if !seen.contains(&&triple.subject) {
                seen.push(&triple.subject);
            }
        }
        seen
    }

    /// Bind a prefix to a namespace for export.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        self.prefixes
            .insert(prefix.to_string(), namespace.to_string());
    }

    /// Enumerate the prefix registry.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    pub fn clear(&mut self) {
        self.triples.clear();
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
    }

    fn rebuild_indices(&mut self) {
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
        for (index, triple) in self.triples.iter().enumerate() {
            self.subject_index
                .entry(triple.subject.clone())
                .or_default()
                .push(index);
            self.predicate_index
                .entry(triple.predicate.clone())
                .or_default()
                .push(index);
            self.object_index
                .entry(triple.object.clone())
                .or_default()
                .push(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfolio_core::model::Literal;

    fn iri(s: &str) -> Iri {
        Iri::new(s)
    }

    fn t(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(iri(s), iri(p), iri(o))
    }

    #[test]
    fn insert_has_set_semantics() {
        let mut store = GraphStore::new();
        assert!(store.insert(t("http://x/s", "http://x/p", "http://x/o")));
        assert!(!store.insert(t("http://x/s", "http://x/p", "http://x/o")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_by_each_position() {
        let mut store = GraphStore::new();
        store.insert(t("http://x/s1", "http://x/p1", "http://x/o1"));
        store.insert(t("http://x/s1", "http://x/p2", "http://x/o2"));
        store.insert(t("http://x/s2", "http://x/p1", "http://x/o1"));

        let s = Term::Iri(iri("http://x/s1"));
        assert_eq!(store.find(Some(&s), None, None).len(), 2);

        let p = iri("http://x/p1");
        assert_eq!(store.find(None, Some(&p), None).len(), 2);

        let o = Term::Iri(iri("http://x/o1"));
        assert_eq!(store.find(None, None, Some(&o)).len(), 2);
        assert_eq!(store.find(Some(&s), Some(&p), Some(&o)).len(), 1);
        assert_eq!(store.find(None, None, None).len(), 3);
    }

    #[test]
    fn remove_returns_removed_and_keeps_rest_queryable() {
        let mut store = GraphStore::new();
        store.insert(t("http://x/s1", "http://x/p", "http://x/o1"));
        store.insert(t("http://x/s1", "http://x/p", "http://x/o2"));
        store.insert(t("http://x/s2", "http://x/p", "http://x/o1"));

        let s = Term::Iri(iri("http://x/s1"));
        let removed = store.remove(Some(&s), None, None);
        assert_eq!(removed.len(), 2);
        assert_eq!(store.len(), 1);

        // indices still consistent after removal
        let o = Term::Iri(iri("http://x/o1"));
        assert_eq!(store.find(None, None, Some(&o)).len(), 1);
    }

    #[test]
    fn value_returns_single_object() {
        let mut store = GraphStore::new();
        let s = Term::Iri(iri("http://x/s"));
        let p = iri("http://x/p");
        assert!(store.value(&s, &p).is_none());

        store.insert(Triple::new(iri("http://x/s"), p.clone(), Literal::new("v")));
        assert_eq!(
            store.value(&s, &p),
            Some(&Term::Literal(Literal::new("v")))
        );
    }

    #[test]
    fn subjects_with_deduplicates() {
        let mut store = GraphStore::new();
        let p = iri("http://x/p");
        store.insert(Triple::new(iri("http://x/s"), p.clone(), iri("http://x/o1")));
        store.insert(Triple::new(iri("http://x/s"), p.clone(), iri("http://x/o2")));
        store.insert(Triple::new(iri("http://x/s2"), p.clone(), iri("http://x/o1")));

        assert_eq!(store.subjects_with(&p, None).len(), 2);
        let o = Term::Iri(iri("http://x/o1"));
        assert_eq!(store.subjects_with(&p, Some(&o)).len(), 2);
    }

    #[test]
    fn prefix_registry_enumeration_is_sorted() {
        let mut store = GraphStore::new();
        store.bind("rr", "http://www.w3.org/ns/r2rml#");
        store.bind("map", "http://rdfolio.org/mapping#");
        let prefixes: Vec<_> = store.namespaces().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["map", "rr"]);
    }
}
