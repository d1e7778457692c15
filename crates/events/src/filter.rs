//! Plan allowlist filtering.

use auditlog_core::Plan;

use crate::event::{Allowlisted, AuditEvent};

/// One plan or several plans to filter by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSelection(Vec<Plan>);

impl PlanSelection {
    pub fn plans(&self) -> &[Plan] {
        &self.0
    }
}

impl From<Plan> for PlanSelection {
    fn from(plan: Plan) -> Self {
        Self(vec![plan])
    }
}

impl From<&Plan> for PlanSelection {
    fn from(plan: &Plan) -> Self {
        Self(vec![plan.clone()])
    }
}

impl From<&str> for PlanSelection {
    fn from(plan: &str) -> Self {
        Self(vec![Plan::from(plan)])
    }
}

impl From<Vec<Plan>> for PlanSelection {
    fn from(plans: Vec<Plan>) -> Self {
        Self(plans)
    }
}

impl From<&[Plan]> for PlanSelection {
    fn from(plans: &[Plan]) -> Self {
        Self(plans.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PlanSelection {
    fn from(plans: [&str; N]) -> Self {
        Self(plans.into_iter().map(Plan::from).collect())
    }
}

/// Events whose allowlist intersects `plans`, in catalog order.
///
/// Each input event occurs at most once in the output, however many of the
/// plans it matches.
pub fn filter_by_allowlist_values(
    events: &[AuditEvent],
    plans: impl Into<PlanSelection>,
) -> Vec<AuditEvent> {
    let selection = plans.into();

    let filtered: Vec<AuditEvent> = events
        .iter()
        .filter(|event| event.is_allowed_for_any(selection.plans()))
        .cloned()
        .collect();

    tracing::trace!(
        plans = ?selection.plans(),
        total = events.len(),
        matched = filtered.len(),
        "filtered events by allowlist"
    );

    filtered
}
