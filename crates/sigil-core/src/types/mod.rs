//! # Core Type Definitions
//!
//! This module contains the foundation types for the Sigil enumeration
//! mechanism:
//! - Type identity (`TypeId`)
//! - Associated member values (`Value`)
//! - Error types (`SigilError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where needed for deterministic ordering in `BTreeMap`
//! - Carry no interior mutability

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// TYPE IDENTITY
// =============================================================================

/// Unique identifier for one constructed enumeration type.
///
/// Every call to `EnumType::new` allocates a fresh id, so two enumerations
/// are never interchangeable even when their declarations are textually
/// identical. Member equality is scoped by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u64);

// =============================================================================
// MEMBER VALUES
// =============================================================================

/// The associated value a declared member may carry.
///
/// Values come from a closed set of comparable domains. Two values are
/// *mutually comparable* only when they belong to the same domain; the
/// ordering resolver falls back to declaration order otherwise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A signed integer value (e.g. `Ford = 1`).
    Int(i64),
    /// A text value (e.g. `mode = "fast"`).
    Text(String),
}

impl Value {
    /// Check whether two values belong to the same comparable domain.
    #[must_use]
    pub fn same_domain(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Int(_), Self::Int(_)) | (Self::Text(_), Self::Text(_))
        )
    }

    /// Get the integer payload, if this is an `Int` value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Get the text payload, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Value {
    /// Integers render bare; text renders quoted, the way you would write
    /// it back into a declaration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced by the Sigil mechanism.
///
/// - Construction-time variants are fatal to that construction
/// - `MemberNotFound` and `TypeNotFound` are recoverable lookup misses
/// - Successor exhaustion is `Option::None`, never an error
/// - The library never panics; all failures flow through `Result`
#[derive(Debug, Error)]
pub enum SigilError {
    /// The same member name was declared twice.
    #[error("Duplicate member name: {0}")]
    DuplicateName(String),

    /// The declaration contains no members.
    #[error("Enumeration declares no members")]
    EmptyDeclaration,

    /// A declared name collides with the protocol surface.
    #[error("Reserved member name: {0}")]
    ReservedName(String),

    /// Two members share a value while value ordering is in effect,
    /// which would make the resolved order ambiguous.
    #[error("Duplicate member value: {0}")]
    DuplicateValue(Value),

    /// A declared member name is not a valid identifier.
    #[error("Invalid member name: {0:?}")]
    InvalidName(String),

    /// The enumeration's own name is not a valid identifier.
    #[error("Invalid enumeration name: {0:?}")]
    InvalidTypeName(String),

    /// The declaration exceeds the member count limit.
    #[error("Too many members: {0}")]
    TooManyMembers(usize),

    /// A textual declaration body could not be parsed.
    #[error("Invalid declaration syntax: {0}")]
    Syntax(String),

    /// Name-based lookup missed.
    #[error("Member not found: {type_name}.{name}")]
    MemberNotFound {
        /// Name of the enumeration that was searched.
        type_name: String,
        /// The member name that was requested.
        name: String,
    },

    /// A registry already holds an enumeration under this name.
    #[error("Enumeration already defined: {0}")]
    AlreadyDefined(String),

    /// A registry lookup named an enumeration that was never defined.
    #[error("Enumeration not registered: {0}")]
    TypeNotFound(String),
}

// =============================================================================
// TESTS
// =============================================================================
