// src/domain/project/associations.rs
use crate::domain::technology::TechnologyId;
use std::collections::BTreeSet;

/// Difference between a project's persisted technology set and the target
/// set submitted with a write. Identifiers present in both sets are left
/// untouched; applying the plan makes the persisted set equal the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologySyncPlan {
    pub to_add: BTreeSet<TechnologyId>,
    pub to_remove: BTreeSet<TechnologyId>,
}

impl TechnologySyncPlan {
    pub fn between(
        current: &BTreeSet<TechnologyId>,
        target: &BTreeSet<TechnologyId>,
    ) -> Self {
        Self {
            to_add: target.difference(current).copied().collect(),
            to_remove: current.difference(target).copied().collect(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
