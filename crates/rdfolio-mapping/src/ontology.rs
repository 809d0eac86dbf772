//! Ontology graph checks
//!
//! Fetching and parsing a remote ontology document is a collaborator
//! concern; these checks operate on an already-loaded graph and fail closed.

use rdfolio_core::iri::is_valid_iri;
use rdfolio_core::model::{Iri, Term};
use rdfolio_core::vocabulary::{
    owl_class, owl_ontology, rdf_property, rdf_type, rdfs_class, BASE_IRI,
};
use rdfolio_store::GraphStore;

/// Base IRI declared by the ontology, or the application base IRI when the
/// graph declares none that validates.
pub fn ontology_base_iri(store: &GraphStore) -> Iri {
    let ontology = Term::Iri(owl_ontology());
    for subject in store.subjects_with(&rdf_type(), Some(&ontology)) {
        if let Term::Iri(iri) = subject {
            let namespace = iri.namespace();
            if !namespace.is_empty() && is_valid_iri(namespace) {
                return Iri::new(namespace);
            }
            if is_valid_iri(iri.as_str()) {
                return iri.clone();
            }
        }
    }
    Iri::new(BASE_IRI)
}

/// An ontology graph is usable when it declares at least one class or
/// property.
pub fn declares_schema_terms(store: &GraphStore) -> bool {
    let rdf_type = rdf_type();
    [owl_class(), rdfs_class(), rdf_property()]
        .into_iter()
        .any(|kind| !store.subjects_with(&rdf_type, Some(&Term::Iri(kind))).is_empty())
}
