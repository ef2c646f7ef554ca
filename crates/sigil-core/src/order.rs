//! # Ordering Module
//!
//! Resolves the canonical member order for an enumeration.
//!
//! - All members valued, one comparable domain → ascending by value
//! - Anything else → declaration order
//! - Ties under value ordering are ambiguous and rejected
//!
//! Resolution runs exactly once, at construction time; the result is cached
//! as each member's index.

use crate::decl::DeclEntry;
use crate::types::SigilError;
use serde::{Deserialize, Serialize};

/// How an enumeration's canonical order was determined.
///
/// The policy is inferred from the declaration: supplying a value for every
/// member opts into value ordering, with no configuration flag needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderPolicy {
    /// Members are ordered ascending by their associated values.
    ByValue,
    /// Members keep their declaration order.
    Declaration,
}

/// Resolve the canonical order for a list of declaration entries.
///
/// Returns the policy that applied and the permutation of entry indices in
/// resolved order. Value ordering applies only when every entry carries a
/// value and all values share one comparable domain; a single missing value
/// or a domain mismatch falls back to declaration order (and, with it,
/// disables the duplicate-value check, since declaration order cannot be
/// ambiguous).
///
/// Returns `SigilError::DuplicateValue` when value ordering is in effect
/// and two entries share a value.
pub(crate) fn resolve(entries: &[DeclEntry]) -> Result<(OrderPolicy, Vec<usize>), SigilError> {
    if !value_ordered(entries) {
        return Ok((OrderPolicy::Declaration, (0..entries.len()).collect()));
    }

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].value.cmp(&entries[b].value));

    // A total order requires distinct values; adjacent equals after the
    // sort are exactly the ties.
    for window in order.windows(2) {
        if entries[window[0]].value == entries[window[1]].value {
            if let Some(value) = entries[window[0]].value.clone() {
                return Err(SigilError::DuplicateValue(value));
            }
        }
    }

    Ok((OrderPolicy::ByValue, order))
}

/// Check whether value ordering applies: every entry valued, one domain.
fn value_ordered(entries: &[DeclEntry]) -> bool {
    let mut values = entries.iter().map(|e| e.value.as_ref());

    let Some(Some(first)) = values.next() else {
        return false;
    };

    values.all(|v| v.is_some_and(|v| v.same_domain(first)))
}

// =============================================================================
// TESTS
// =============================================================================
