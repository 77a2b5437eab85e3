//! docchat-store
//!
//! Keeps built document indexes resident, bounded by capacity with
//! oldest-inserted eviction, and exposes the ingest/query boundary used by
//! front ends.
pub mod registry;
pub mod service;

pub use registry::StoreRegistry;
pub use service::{DocumentService, NOT_FOUND_TEXT};
