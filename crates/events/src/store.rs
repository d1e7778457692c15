//! Versioned event store: `ghes-<version>` → page → events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use auditlog_core::{CatalogResult, Plan, VersionKey};

use crate::event::AuditEvent;

/// Events bucketed per page for a single GHES release.
pub type PageBuckets = BTreeMap<Plan, Vec<AuditEvent>>;

/// Accumulator the GHES merge writes into.
///
/// Buckets are created lazily on first insertion and never removed by the
/// merge, so callers can fold several pages into the same store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionedEventStore {
    versions: BTreeMap<VersionKey, PageBuckets>,
}

impl VersionedEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a previously rendered store (JSON object keyed by `ghes-<version>`).
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn version_keys(&self) -> impl Iterator<Item = &VersionKey> {
        self.versions.keys()
    }

    pub fn pages(&self, version: &VersionKey) -> Option<&PageBuckets> {
        self.versions.get(version)
    }

    pub fn has_page(&self, version: &VersionKey, page: &Plan) -> bool {
        self.versions
            .get(version)
            .is_some_and(|pages| pages.contains_key(page))
    }

    /// Events stored under `version` / `page`, if that bucket exists.
    pub fn bucket(&self, version: &VersionKey, page: &Plan) -> Option<&[AuditEvent]> {
        self.versions
            .get(version)
            .and_then(|pages| pages.get(page))
            .map(Vec::as_slice)
    }

    /// Actions stored under `version` / `page`, in insertion order.
    pub fn actions(&self, version: &VersionKey, page: &Plan) -> Vec<&str> {
        self.bucket(version, page)
            .map(|events| events.iter().map(|e| e.action.as_str()).collect())
            .unwrap_or_default()
    }

    /// Append `event` to `version` / `page`, creating the bucket if needed.
    ///
    /// Returns `false` without modifying the bucket when an event with the
    /// same action is already there.
    pub fn insert(&mut self, version: VersionKey, page: Plan, event: AuditEvent) -> bool {
        let bucket = self
            .versions
            .entry(version)
            .or_default()
            .entry(page)
            .or_default();

        if bucket.iter().any(|existing| existing.action == event.action) {
            return false;
        }

        bucket.push(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditlog_core::GhesVersion;

    fn key(v: &str) -> VersionKey {
        VersionKey::from(GhesVersion::new(v))
    }

    #[test]
    fn insert_creates_buckets_lazily() {
        let mut store = VersionedEventStore::new();
        assert!(store.is_empty());
        assert!(!store.has_page(&key("3.10"), &Plan::user()));

        assert!(store.insert(key("3.10"), Plan::user(), AuditEvent::new("repo.create", "")));

        assert!(store.has_page(&key("3.10"), &Plan::user()));
        assert!(!store.has_page(&key("3.10"), &Plan::organization()));
        assert_eq!(store.actions(&key("3.10"), &Plan::user()), vec!["repo.create"]);
    }

    #[test]
    fn duplicate_action_is_not_appended() {
        let mut store = VersionedEventStore::new();
        assert!(store.insert(key("3.10"), Plan::user(), AuditEvent::new("repo.create", "a")));
        assert!(!store.insert(key("3.10"), Plan::user(), AuditEvent::new("repo.create", "b")));

        let bucket = store.bucket(&key("3.10"), &Plan::user()).unwrap();
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].description, "a");
    }

    #[test]
    fn parses_rendered_store() {
        let store = VersionedEventStore::from_json(
            r#"{
                "ghes-3.11": { "organization": [ { "action": "repo.update", "description": "repo was created" } ] },
                "ghes-3.12": { "enterprise": [ { "action": "repo.delete", "description": "repo was deleted" } ] }
            }"#,
        )
        .unwrap();

        let keys: Vec<String> = store.version_keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["ghes-3.11", "ghes-3.12"]);
        assert_eq!(store.actions(&key("3.12"), &Plan::enterprise()), vec!["repo.delete"]);
    }

    #[test]
    fn rejects_unprefixed_version_keys() {
        assert!(VersionedEventStore::from_json(r#"{ "3.11": {} }"#).is_err());
    }
}
