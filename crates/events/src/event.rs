use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use auditlog_core::{GhesVersion, Plan};

/// Anything gated by a plan allowlist.
///
/// A missing `_allowlists` deserializes to an empty list and therefore matches
/// no plan.
pub trait Allowlisted {
    fn allowlists(&self) -> &[Plan];

    fn is_allowed_for(&self, plan: &Plan) -> bool {
        self.allowlists().contains(plan)
    }

    fn is_allowed_for_any(&self, plans: &[Plan]) -> bool {
        plans.iter().any(|plan| self.is_allowed_for(plan))
    }
}

/// A single audit-log event definition as it appears in the content catalog.
///
/// Key names follow the catalog format (`_allowlists`, `ghes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "_allowlists", default)]
    pub allowlists: Vec<Plan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_reference_links: Option<String>,

    /// Per-version overrides for GHES, keyed by release number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ghes: Option<BTreeMap<GhesVersion, GhesOverride>>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            description: description.into(),
            allowlists: Vec::new(),
            fields: None,
            docs_reference_links: None,
            ghes: None,
        }
    }

    pub fn with_allowlists<I, P>(mut self, plans: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Plan>,
    {
        self.allowlists = plans.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ghes_override(mut self, version: impl Into<GhesVersion>, ov: GhesOverride) -> Self {
        self.ghes
            .get_or_insert_with(BTreeMap::new)
            .insert(version.into(), ov);
        self
    }
}

impl Allowlisted for AuditEvent {
    fn allowlists(&self) -> &[Plan] {
        &self.allowlists
    }
}

/// Partial record overriding an event for one GHES release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhesOverride {
    #[serde(rename = "_allowlists", default)]
    pub allowlists: Vec<Plan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GhesOverride {
    pub fn new<I, P>(plans: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Plan>,
    {
        Self {
            allowlists: plans.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

impl Allowlisted for GhesOverride {
    fn allowlists(&self) -> &[Plan] {
        &self.allowlists
    }
}
