//! # RDFolio Mapping
//!
//! Graph bookkeeping over a mapping document: resolve subject-generation
//! rules, compute primary/secondary/derived triples for a node, and mutate
//! the mapping (create triple maps, bind subject rules, remove triple maps
//! without touching shared fragments).

pub mod derived;
pub mod mutate;
pub mod ontology;
pub mod session;
pub mod subject;
pub mod traversal;
pub mod view;

pub use derived::{derived_triples, exclusive_derived_triples};
pub use mutate::{bind_subject_template, create_triple_map, reference_count, remove_triple_map};
pub use session::EditingSession;
pub use subject::{resolve_subject, SubjectDescriptor, SubjectRuleKind};
pub use traversal::{primary_triples, secondary_triples};

/// Mapping-level error taxonomy. User-correctable failures are reported at
/// the boundary; internal invariants (one logical source per map, at most one
/// subject map) are maintained by the mutator, not re-validated here.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("triple map label already in use: {0}")]
    DuplicateLabel(String),

    #[error("unsupported data source format: {0}")]
    UnsupportedFormat(String),

    #[error("unknown triple map: {0}")]
    UnknownTripleMap(String),

    #[error("store error: {0}")]
    Store(#[from] rdfolio_store::StoreError),
}
