//! `auditlog-events` — audit-log event selection for the documentation build.
//!
//! Two operations drive the per-plan and per-release reference pages:
//!
//! - [`filter_by_allowlist_values`] picks the events documented for one or more plans.
//! - [`filter_and_update_ghes_data_by_allowlist_values`] buckets GHES events by
//!   release and page, applying version-specific overrides.
//!
//! Neither performs I/O; the caller owns loading content and rendering pages.

pub mod catalog;
pub mod defaults;
pub mod event;
pub mod filter;
pub mod merge;
pub mod store;

pub use catalog::EventCatalog;
pub use defaults::PipelineDefaults;
pub use event::{Allowlisted, AuditEvent, GhesOverride};
pub use filter::{PlanSelection, filter_by_allowlist_values};
pub use merge::{MergeSummary, filter_and_update_ghes_data_by_allowlist_values, ghes_versions_for};
pub use store::{PageBuckets, VersionedEventStore};

pub use auditlog_core::{CatalogError, CatalogResult, GhesVersion, Plan, VersionKey};
