//! GHES version merge: bucket events per release and apply overrides.

use auditlog_core::{GhesVersion, Plan, VersionKey};

use crate::defaults::PipelineDefaults;
use crate::event::{Allowlisted, AuditEvent, GhesOverride};
use crate::store::VersionedEventStore;

/// Counts reported by a merge pass (useful for logging; safe to ignore).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Merged events appended to a bucket.
    pub inserted: usize,
    /// Merged events skipped because the bucket already had that action.
    pub duplicates: usize,
}

/// Merge GHES-versioned events allowed for `plan` into `store`.
///
/// For every event with a `ghes` map and every release whose override lists
/// `plan`, the merged event is appended to `store[ghes-<release>][page]`.
/// Events without `ghes` and releases that exclude `plan` are skipped.
/// Existing buckets are only ever appended to.
pub fn filter_and_update_ghes_data_by_allowlist_values(
    events: &[AuditEvent],
    plan: &Plan,
    store: &mut VersionedEventStore,
    defaults: &PipelineDefaults,
    page: &Plan,
) -> MergeSummary {
    let mut summary = MergeSummary::default();

    for event in events {
        let Some(overrides) = event.ghes.as_ref() else {
            continue;
        };

        for (version, ov) in overrides {
            if !ov.is_allowed_for(plan) {
                continue;
            }

            let merged = merge_override(event, ov, defaults, page);
            let key = VersionKey::from(version);

            if store.insert(key, page.clone(), merged) {
                tracing::debug!(action = %event.action, version = %version, page = %page, "merged ghes event");
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }
    }

    tracing::info!(
        plan = %plan,
        page = %page,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        "ghes merge complete"
    );

    summary
}

/// Versioned releases of `event` that are documented for `plan`.
pub fn ghes_versions_for<'a>(event: &'a AuditEvent, plan: &'a Plan) -> impl Iterator<Item = &'a GhesVersion> {
    event
        .ghes
        .iter()
        .flat_map(|overrides| overrides.iter())
        .filter(move |(_, ov)| ov.is_allowed_for(plan))
        .map(|(version, _)| version)
}

/// Base event with the override applied; override wins on conflicting keys.
fn merge_override(
    event: &AuditEvent,
    ov: &GhesOverride,
    defaults: &PipelineDefaults,
    page: &Plan,
) -> AuditEvent {
    let fields = ov
        .fields
        .as_ref()
        .or(event.fields.as_ref())
        .cloned()
        .unwrap_or_else(|| defaults.fields.clone());

    let mut description = ov
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(Some(event.description.as_str()).filter(|d| !d.is_empty()))
        .or(defaults.description.as_deref())
        .unwrap_or_default()
        .to_string();

    if let Some(extra) = defaults.appended_description(page) {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(extra);
    }

    AuditEvent {
        action: event.action.clone(),
        description,
        allowlists: ov.allowlists.clone(),
        fields: Some(fields),
        docs_reference_links: event.docs_reference_links.clone(),
        ghes: None,
    }
}
