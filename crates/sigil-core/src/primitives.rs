//! # Innate Primitives
//!
//! Hardcoded constants for the Sigil mechanism.
//!
//! These are compiled into the binary and are immutable at runtime. They
//! bound what a declaration may contain and fence off the names the
//! protocol surface needs for itself.

/// Member names that would shadow the protocol surface of an enumeration.
///
/// The `declare_enums!` macro generates one accessor function per member in
/// the same impl block as these, so a member with one of these names would
/// collide with the lookup and iteration machinery.
pub const RESERVED_NAMES: &[&str] = &["iter", "len", "member", "members", "name", "ty"];

/// Prefix marking machinery names rather than member names.
///
/// Underscore-prefixed names are rejected from declarations; they are
/// reserved for the mechanism itself.
pub const RESERVED_PREFIX: char = '_';

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for a member name.
///
/// Names longer than this are rejected at validation time.
/// This prevents memory exhaustion from malformed declaration bodies.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length for an enumeration's own name.
pub const MAX_TYPE_NAME_LENGTH: usize = 256;

/// Maximum number of members in a single declaration.
///
/// Declarations larger than this are rejected; an enumeration is a small,
/// closed set of symbolic constants, not a data table.
pub const MAX_MEMBER_COUNT: usize = 4096;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_are_sorted_and_unique() {
        let mut sorted = RESERVED_NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), RESERVED_NAMES.len());
        assert_eq!(sorted, RESERVED_NAMES);
    }

    #[test]
    fn limits_are_nonzero() {
        assert!(MAX_NAME_LENGTH > 0);
        assert!(MAX_MEMBER_COUNT > 0);
    }
}
