//! # RDFolio Core
//!
//! RDF data model for mapping documents: terms, triples, IRI validation and
//! the fixed RML/R2RML vocabulary the mapping builder depends on.

pub mod iri;
pub mod model;
pub mod vocabulary;

pub use iri::is_valid_iri;
pub use model::{BlankNode, Iri, Literal, Term, Triple};
