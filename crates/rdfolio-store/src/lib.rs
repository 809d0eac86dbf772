//! # RDFolio Store
//!
//! Mutable in-memory triple store for mapping documents, plus persistence:
//! JSON snapshots for save/resume and Turtle export.

pub mod snapshot;
pub mod store;
pub mod turtle;

pub use snapshot::{load_snapshot, save_snapshot, StoreError, WorkspaceDirs};
pub use store::GraphStore;
pub use turtle::export_turtle;
