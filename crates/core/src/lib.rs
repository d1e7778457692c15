//! `auditlog-core` — tags and error model shared by the audit-log docs pipeline.
//!
//! This crate contains **pure** value types (no I/O).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::{GhesVersion, Plan, VersionKey};
