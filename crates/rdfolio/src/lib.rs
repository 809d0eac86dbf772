//! # RDFolio - RML Mapping Document Builder
//!
//! RDFolio builds RML/R2RML-style mapping documents as mutable RDF graphs:
//! triple maps bound to tabular or semi-structured data sources, subject
//! generation rules, and safe incremental editing that preserves fragments
//! shared between maps.
//!
//! ## Quick Start
//!
//! ```rust
//! use rdfolio::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = EditingSession::new();
//!
//!     let tmap = session.create_triple_map("Readings", "readings.csv")?;
//!     session.bind_subject_template("Readings", "ReadingSubject", "id")?;
//!
//!     let identity = session.derived_triples("Readings")?;
//!     println!("{} identity triples for {}", identity.len(), tmap);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! RDFolio consists of several specialized crates:
//!
//! - **`rdfolio-core`**: RDF terms, IRI validation and the mapping vocabulary
//! - **`rdfolio-store`**: in-memory triple store, snapshots, Turtle export
//! - **`rdfolio-mapping`**: editing session, subject-rule resolution,
//!   reachability, derived triples and safe removal
//! - **`rdfolio-cli`**: command-line interface

pub use rdfolio_core as core;
pub use rdfolio_mapping as mapping;
pub use rdfolio_store as store;

// Convenience re-exports for common types
pub use rdfolio_core::{is_valid_iri, BlankNode, Iri, Literal, Term, Triple};
pub use rdfolio_mapping::{EditingSession, MappingError, SubjectDescriptor, SubjectRuleKind};
pub use rdfolio_store::{GraphStore, StoreError};

// Commonly used external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;
pub use thiserror;

/// Current version of RDFolio
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
///
/// ```rust
/// use rdfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::vocabulary;
    pub use crate::mapping::view::{subject_detail_rows, subject_rows, triple_map_rows};
    pub use crate::mapping::{
        derived_triples, exclusive_derived_triples, primary_triples, resolve_subject,
        secondary_triples,
    };
    pub use crate::{
        BlankNode, EditingSession, GraphStore, Iri, Literal, MappingError, SubjectDescriptor,
        SubjectRuleKind, Term, Triple,
    };
}
