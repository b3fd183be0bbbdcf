//! Per-session metadata storage.
//!
//! Provides:
//! - Deterministic file layout: `<base>/<projectId>/<sessionId>.json`
//! - Read/write of one JSON document per session
//! - Tagged error outcomes (not found vs. malformed vs. I/O)

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{Document, MetadataStore, SESSION_ID_KEY, STORED_AT_KEY};
