//! Which entity kinds an import run processes

use crate::types::{EntityKind, Selection};

/// Requested kinds in processing order, or all four when none were requested
pub fn effective_kinds(selection: &Selection) -> Vec<EntityKind> {
    if selection.is_empty() {
        return EntityKind::ALL.to_vec();
    }
    EntityKind::ALL
        .into_iter()
        .filter(|kind| selection.is_requested(*kind))
        .collect()
}
