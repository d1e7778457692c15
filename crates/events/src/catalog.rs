//! Typed view over the raw event catalog handed over by the content pipeline.

use serde::{Deserialize, Serialize};

use auditlog_core::{CatalogResult, Plan};

use crate::defaults::PipelineDefaults;
use crate::event::AuditEvent;
use crate::filter::{PlanSelection, filter_by_allowlist_values};
use crate::merge::{MergeSummary, filter_and_update_ghes_data_by_allowlist_values};
use crate::store::VersionedEventStore;

/// Ordered list of audit-log event definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventCatalog {
    events: Vec<AuditEvent>,
}

impl EventCatalog {
    pub fn new(events: Vec<AuditEvent>) -> Self {
        Self { events }
    }

    /// Parse a JSON array of events.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(events = catalog.events.len(), "parsed event catalog");
        Ok(catalog)
    }

    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// See [`filter_by_allowlist_values`].
    pub fn for_plans(&self, plans: impl Into<PlanSelection>) -> Vec<AuditEvent> {
        filter_by_allowlist_values(&self.events, plans)
    }

    /// See [`filter_and_update_ghes_data_by_allowlist_values`].
    pub fn merge_ghes_into(
        &self,
        plan: &Plan,
        store: &mut VersionedEventStore,
        defaults: &PipelineDefaults,
        page: &Plan,
    ) -> MergeSummary {
        filter_and_update_ghes_data_by_allowlist_values(&self.events, plan, store, defaults, page)
    }
}

impl From<Vec<AuditEvent>> for EventCatalog {
    fn from(events: Vec<AuditEvent>) -> Self {
        Self::new(events)
    }
}
